use std::collections::HashSet;

use crate::core::diagnostics;
use crate::rigid_body::BodyId;
use crate::scenes::{self, PresetName};

use super::Session;

pub(super) fn start(session: &mut Session) {
    session.runner.run();
}

pub(super) fn stop(session: &mut Session) {
    session.runner.stop();
    // The next run starts without stale user bodies.
    session.user_bodies.clear();
}

pub(super) fn reset(session: &mut Session) {
    let keep: HashSet<BodyId> = session.user_bodies.iter().map(|tracked| tracked.body).collect();
    session.engine.world.remove_dynamic_bodies_except(&keep);

    for tracked in session.user_bodies.iter() {
        if !session.engine.world.restore(tracked.body, tracked.initial_position) {
            diagnostics::warn(&format!("user body {} is no longer in the world", tracked.body.0));
        }
    }

    if let Some(preset) = session.scene.active() {
        scenes::apply_preset(&mut session.engine, &mut session.scene, preset, session.scale);
    }
}

pub(super) fn switch_preset(session: &mut Session, name: &str) -> Option<PresetName> {
    scenes::apply_named(&mut session.engine, &mut session.scene, name, session.scale)
}
