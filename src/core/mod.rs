//! Core helpers shared by every layer

pub mod clock;
pub mod diagnostics;
pub mod scale;

pub use scale::Scale;
