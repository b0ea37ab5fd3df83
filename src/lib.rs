//! Playfield Engine - physics sandbox runtime in WASM
//!
//! Architecture:
//! - core/        - scale, clock, console diagnostics
//! - domain/      - colors, editor variables and instructions, log entries
//! - systems/     - rigid bodies, world, engine and runner
//! - scenes/      - preset catalog (catapult, pyramid, stack)
//! - simulation/  - the session and its host facade
//! - interpreter/ - instruction -> spawned bodies

pub mod core;
pub mod domain;
pub mod error;
pub mod interpreter;
pub mod scenes;
pub mod simulation;
pub mod systems;

// Short paths used across the crate
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    core::diagnostics::info("Playfield engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use error::{PlaygroundError, Result};
pub use interpreter::{interpret, InterpretError, Interpreted};
pub use scenes::PresetName;
pub use simulation::{Playground, PlayfieldOptions, Session};
