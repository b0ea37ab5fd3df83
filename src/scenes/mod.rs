//! Scene Catalog - named preset arrangements
//!
//! Each preset is a builder that inserts its bodies and constraints into the
//! engine and reports what has to be tracked so the scene can be torn down
//! and rebuilt later. Constraints are never tracked: every (re)application
//! strips all of them first.

mod catapult;
mod pyramid;
mod stack;

use std::fmt;

use serde::Serialize;

use crate::core::{diagnostics, Scale};
use crate::rigid_body::{BodyId, RenderStyle, Vec2};
use crate::rigid_body_system::CompositeId;
use crate::systems::engine::Engine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetName {
    Catapult,
    Pyramid,
    Stack,
}

impl PresetName {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "catapult" => Some(PresetName::Catapult),
            "pyramid" => Some(PresetName::Pyramid),
            "stack" => Some(PresetName::Stack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Catapult => "catapult",
            PresetName::Pyramid => "pyramid",
            PresetName::Stack => "stack",
        }
    }

    fn build(&self, engine: &mut Engine, scale: Scale) -> SceneInstall {
        match self {
            PresetName::Catapult => catapult::build(engine, scale),
            PresetName::Pyramid => pyramid::build(engine, scale),
            PresetName::Stack => stack::build(engine, scale),
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A body and the position it returns to on reset
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialBody {
    pub body: BodyId,
    pub initial_position: Vec2,
}

/// What a preset builder inserted and wants tracked
#[derive(Clone, Debug, Default)]
pub struct SceneInstall {
    pub bodies: Vec<InitialBody>,
    pub composites: Vec<CompositeId>,
}

impl SceneInstall {
    fn track_body(&mut self, engine: &Engine, id: BodyId) {
        if let Some(body) = engine.world.body(id) {
            self.bodies.push(InitialBody {
                body: id,
                initial_position: body.position,
            });
        }
    }
}

/// Scene bodies, scene composites and the remembered preset
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    bodies: Vec<InitialBody>,
    composites: Vec<CompositeId>,
    active: Option<PresetName>,
}

impl SceneRegistry {
    pub fn bodies(&self) -> &[InitialBody] {
        &self.bodies
    }

    pub fn composites(&self) -> &[CompositeId] {
        &self.composites
    }

    pub fn active(&self) -> Option<PresetName> {
        self.active
    }
}

/// Strip constraints and the previous scene, then build `preset` from scratch.
pub fn apply_preset(engine: &mut Engine, registry: &mut SceneRegistry, preset: PresetName, scale: Scale) {
    for id in engine.world.constraint_ids() {
        engine.world.remove_constraint(id);
    }
    for tracked in registry.bodies.drain(..) {
        engine.world.remove_body(tracked.body);
    }
    for id in registry.composites.drain(..) {
        engine.world.remove_composite(id);
    }

    let install = preset.build(engine, scale);
    registry.bodies = install.bodies;
    registry.composites = install.composites;
    registry.active = Some(preset);
}

/// [`apply_preset`] by name. Unknown names only warn; the world is untouched.
pub fn apply_named(engine: &mut Engine, registry: &mut SceneRegistry, name: &str, scale: Scale) -> Option<PresetName> {
    match PresetName::parse(name) {
        Some(preset) => {
            apply_preset(engine, registry, preset, scale);
            Some(preset)
        }
        None => {
            diagnostics::warn(&format!("Unknown scene: {}", name));
            None
        }
    }
}

/// Dark fill with a white outline, shared by every preset body.
fn outline() -> RenderStyle {
    RenderStyle::outlined("rgb(18 19 26)", "rgb(255, 255, 255)", 2.0)
}
