use super::Engine;

/// Fixed-delta stepping loop driven by the host's animation frames.
///
/// The host calls [`Runner::tick`] every frame; the engine only advances
/// while the runner is enabled.
#[derive(Clone, Debug)]
pub struct Runner {
    enabled: bool,
    delta_ms: f32,
    frame: u64,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            enabled: false,
            delta_ms: 1000.0 / 60.0,
            frame: 0,
        }
    }

    pub fn run(&mut self) {
        self.enabled = true;
    }

    pub fn stop(&mut self) {
        self.enabled = false;
    }

    pub fn is_running(&self) -> bool {
        self.enabled
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Step once if enabled. Returns whether the engine advanced.
    pub fn tick(&mut self, engine: &mut Engine) -> bool {
        if !self.enabled {
            return false;
        }
        engine.update(self.delta_ms);
        self.frame += 1;
        true
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
