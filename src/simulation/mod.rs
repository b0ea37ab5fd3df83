//! Session - the one live playfield
//!
//! Owns the engine, its runner and renderer, and the two body registries:
//! scene bodies installed by the active preset, and user bodies spawned by
//! instructions. Every operation takes the session explicitly; there is no
//! module-level state.
//!
//! Lifecycle: `initialize` -> stopped -> `start` -> running -> `stop` -> ...
//! `reset` is valid in either run state and does not change it.

use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::Scale;
use crate::rigid_body::{BodyDescriptor, BodyId};
use crate::scenes::{InitialBody, PresetName, SceneRegistry};
use crate::systems::engine::{Engine, Runner};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Playground;
pub use render_extract::{BodyView, Render, RenderFrame, RenderOptions};
pub use settings::{PlayfieldOptions, DEFAULT_BACKGROUND, SOLVER_ITERATIONS};

/// The simulation handle
pub struct Session {
    engine: Engine,
    runner: Runner,
    render: Render,
    scale: Scale,
    user_bodies: Vec<InitialBody>,
    scene: SceneRegistry,
    rng: ChaCha8Rng,
}

/// Registry contents as the host sees them
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneState {
    /// Active preset, empty when none
    pub preset: String,
    pub bodies: Vec<InitialBody>,
    pub composites: Vec<u32>,
    pub user_bodies: Vec<InitialBody>,
}

impl Session {
    /// Fresh engine with walls, renderer attached to `container`, runner stopped.
    ///
    /// When `preset` names a known scene it is built and remembered; otherwise
    /// both registries start empty and no preset is active.
    pub fn initialize(container: &str, options: &PlayfieldOptions, scale: f32, preset: Option<&str>) -> Self {
        init::create_session(container, options, Scale::new(scale), preset, None)
    }

    /// Tear down this world and build a fresh one on the same render surface.
    pub fn reinitialize(self, container: &str, options: &PlayfieldOptions, scale: f32, preset: Option<&str>) -> Self {
        init::create_session(container, options, Scale::new(scale), preset, Some(self.render))
    }

    pub fn start(&mut self) {
        commands::start(self)
    }

    /// Halt stepping and forget user bodies. World contents stay as they are.
    pub fn stop(&mut self) {
        commands::stop(self)
    }

    /// Return user bodies to their spawn points and rebuild the active preset.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Build and remember a preset by name. Unknown names warn and change nothing.
    pub fn switch_preset(&mut self, name: &str) -> Option<PresetName> {
        commands::switch_preset(self, name)
    }

    /// Insert a body and register it as a user body.
    pub fn spawn_user_body(&mut self, descriptor: BodyDescriptor) -> BodyId {
        rigid::spawn_user_body(self, descriptor)
    }

    /// Advance one runner tick (when running) and extract the frame to draw.
    pub fn tick(&mut self) -> RenderFrame {
        self.runner.tick(&mut self.engine);
        self.render.frame(&self.engine)
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn render(&self) -> &Render {
        &self.render
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    pub fn user_bodies(&self) -> &[InitialBody] {
        &self.user_bodies
    }

    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    pub fn active_preset(&self) -> Option<PresetName> {
        self.scene.active()
    }

    pub(crate) fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn scene_state(&self) -> SceneState {
        SceneState {
            preset: self
                .scene
                .active()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            bodies: self.scene.bodies().to_vec(),
            composites: self.scene.composites().iter().map(|c| c.0).collect(),
            user_bodies: self.user_bodies.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
