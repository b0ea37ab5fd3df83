use wasm_bindgen::prelude::*;

use crate::domain::log::LogEntry;
use crate::domain::variables::{Instruction, Variable};
use crate::error::{PlaygroundError, Result};
use crate::interpreter::{self, Interpreted};

use super::settings::PlayfieldOptions;
use super::Session;

fn to_js(err: PlaygroundError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Host-facing handle: at most one live session plus the console output.
#[wasm_bindgen]
pub struct Playground {
    session: Option<Session>,
    console_output: Vec<LogEntry>,
}

impl Playground {
    fn session_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(PlaygroundError::NotInitialized)
    }

    fn session_ref(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(PlaygroundError::NotInitialized)
    }

    /// Parse and run one instruction. Hard errors are already in the console
    /// output when this returns `Err`.
    pub fn run_instruction(&mut self, instruction: &Instruction, snapshot: &[Variable]) -> Result<Interpreted> {
        let session = self.session.as_mut().ok_or(PlaygroundError::NotInitialized)?;
        Ok(interpreter::interpret(session, instruction, snapshot, &mut self.console_output)?)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn console_output(&self) -> &[LogEntry] {
        &self.console_output
    }
}

#[wasm_bindgen]
impl Playground {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: None,
            console_output: Vec::new(),
        }
    }

    /// Replace any live session with a fresh one, keeping its render surface.
    ///
    /// `options_json` is `{ "width": .., "height": .. }` plus optional tuning.
    pub fn initialize(
        &mut self,
        container: String,
        options_json: String,
        scale: f32,
        scene: Option<String>,
    ) -> std::result::Result<(), JsValue> {
        let options = PlayfieldOptions::from_json(&options_json).map_err(to_js)?;
        self.session = Some(match self.session.take() {
            Some(old) => old.reinitialize(&container, &options, scale, scene.as_deref()),
            None => Session::initialize(&container, &options, scale, scene.as_deref()),
        });
        Ok(())
    }

    pub fn start(&mut self) -> std::result::Result<(), JsValue> {
        self.session_mut().map_err(to_js)?.start();
        Ok(())
    }

    pub fn stop(&mut self) -> std::result::Result<(), JsValue> {
        self.session_mut().map_err(to_js)?.stop();
        Ok(())
    }

    pub fn reset(&mut self) -> std::result::Result<(), JsValue> {
        self.session_mut().map_err(to_js)?.reset();
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.session.as_ref().map(|s| s.is_running()).unwrap_or(false)
    }

    /// Switch to a named preset. Returns false for unknown names.
    pub fn switch_preset(&mut self, name: String) -> std::result::Result<bool, JsValue> {
        Ok(self.session_mut().map_err(to_js)?.switch_preset(&name).is_some())
    }

    /// Step (when running) and return the frame to draw as JSON.
    pub fn tick(&mut self) -> std::result::Result<String, JsValue> {
        let frame = self.session_mut().map_err(to_js)?.tick();
        serde_json::to_string(&frame).map_err(|e| to_js(e.into()))
    }

    /// Interpret one instruction against a variable snapshot (both JSON).
    ///
    /// Returns the number of bodies spawned. Validation problems are appended
    /// to the console output; only malformed JSON or a missing session throw.
    pub fn interpret(&mut self, instruction_json: String, snapshot_json: String) -> std::result::Result<u32, JsValue> {
        let instruction: Instruction =
            serde_json::from_str(&instruction_json).map_err(|e| to_js(e.into()))?;
        let snapshot: Vec<Variable> = serde_json::from_str(&snapshot_json).map_err(|e| to_js(e.into()))?;

        match self.run_instruction(&instruction, &snapshot) {
            Ok(done) => Ok(done.spawned().len() as u32),
            Err(PlaygroundError::Interpret(_)) => Ok(0),
            Err(err) => Err(to_js(err)),
        }
    }

    /// Registries and active preset as JSON.
    pub fn scene_state_json(&self) -> std::result::Result<String, JsValue> {
        let state = self.session_ref().map_err(to_js)?.scene_state();
        serde_json::to_string(&state).map_err(|e| to_js(e.into()))
    }

    /// Console output as a JSON array (append-only, oldest first).
    pub fn console_output_json(&self) -> String {
        serde_json::to_string(&self.console_output).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear_console_output(&mut self) {
        self.console_output.clear();
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}
