use serde::Deserialize;

use crate::error::{PlaygroundError, Result};
use crate::rigid_body::Vec2;
use crate::systems::engine::EngineOptions;

pub const DEFAULT_BACKGROUND: &str = "rgb(18 19 26)";
/// Position and velocity iterations per step unless overridden
pub const SOLVER_ITERATIONS: u32 = 25;

fn default_iterations() -> u32 {
    SOLVER_ITERATIONS
}

fn default_gravity_y() -> f32 {
    1.0
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// Playfield size (design units) plus optional engine tuning
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayfieldOptions {
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_iterations")]
    pub position_iterations: u32,
    #[serde(default = "default_iterations")]
    pub velocity_iterations: u32,
    #[serde(default = "default_gravity_y")]
    pub gravity_y: f32,
    #[serde(default = "default_background")]
    pub background: String,
    /// Fixed RNG seed; wall-clock seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayfieldOptions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            position_iterations: SOLVER_ITERATIONS,
            velocity_iterations: SOLVER_ITERATIONS,
            gravity_y: default_gravity_y(),
            background: default_background(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let options: PlayfieldOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(PlaygroundError::InvalidOptions(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub(crate) fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            position_iterations: self.position_iterations,
            velocity_iterations: self.velocity_iterations,
            gravity: Vec2::new(0.0, self.gravity_y),
        }
    }
}
