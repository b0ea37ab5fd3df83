//! Engine - steps the world forward
//!
//! A thin driver over the rapier pipeline the world owns: gravity and solver
//! iteration counts in, one fixed step per call.

mod runner;

pub use runner::Runner;

use rapier2d::prelude::IntegrationParameters;

use crate::rigid_body::Vec2;
use crate::rigid_body_system::World;

/// Scales `gravity` (design units per ms^2) into pixels per ms^2.
pub const GRAVITY_SCALE: f32 = 0.001;

#[derive(Clone, Debug)]
pub struct EngineOptions {
    pub position_iterations: u32,
    pub velocity_iterations: u32,
    pub gravity: Vec2,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            position_iterations: 6,
            velocity_iterations: 4,
            gravity: Vec2::new(0.0, 1.0),
        }
    }
}

pub struct Engine {
    pub world: World,
    pub options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            world: World::new(),
            options,
        }
    }

    /// Advance the world by `delta_ms`.
    pub fn update(&mut self, delta_ms: f32) {
        let params = IntegrationParameters {
            dt: delta_ms / 1000.0,
            max_velocity_iterations: self.options.velocity_iterations.max(1) as usize,
            max_stabilization_iterations: self.options.position_iterations.max(1) as usize,
            ..IntegrationParameters::default()
        };
        // px/ms^2 -> px/s^2
        let k = GRAVITY_SCALE * 1_000_000.0;
        let gravity = Vec2::new(self.options.gravity.x * k, self.options.gravity.y * k);
        self.world.step(gravity, &params);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
