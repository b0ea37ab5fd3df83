use super::*;
use crate::domain::log::LogEntry;
use crate::domain::variables::{Instruction, Variable, VariableType};
use crate::interpreter::{self, InterpretError, MAX_ROW_DENSITY, MAX_ROW_DRAG, MIN_ROW_DENSITY, MIN_ROW_DRAG};
use crate::rigid_body::{BodyDescriptor, BodyOptions, Vec2};
use serde_json::json;

fn options() -> PlayfieldOptions {
    PlayfieldOptions::new(450.0, 700.0).with_seed(11)
}

fn fresh(preset: Option<&str>) -> Session {
    Session::initialize("playfield", &options(), 1.0, preset)
}

fn spawn_square(session: &mut Session, x: f32) -> BodyId {
    session.spawn_user_body(BodyDescriptor::rectangle(x, 100.0, 20.0, 20.0))
}

#[test]
fn initialize_installs_walls_and_starts_stopped() {
    let session = fresh(None);

    assert_eq!(session.engine().world.body_count(), 4);
    assert_eq!(session.engine().world.static_body_count(), 4);
    assert!(!session.is_running());
    assert!(session.render().is_running());
    assert_eq!(session.render().container(), "playfield");
    assert!(session.user_bodies().is_empty());
    assert!(session.scene().bodies().is_empty());
    assert!(session.active_preset().is_none());
}

#[test]
fn initialize_scales_the_canvas() {
    let session = Session::initialize("playfield", &options(), 0.5, None);
    assert_eq!(session.render().options().width, 225.0);
    assert_eq!(session.render().options().height, 350.0);
    assert_eq!(session.scale().factor(), 0.5);
}

#[test]
fn initialize_with_unknown_preset_leaves_registries_empty() {
    let session = fresh(Some("volcano"));
    assert!(session.active_preset().is_none());
    assert_eq!(session.engine().world.body_count(), 4);
}

#[test]
fn start_and_stop_toggle_the_runner() {
    let mut session = fresh(None);
    session.start();
    assert!(session.is_running());
    session.start();
    assert!(session.is_running());
    session.stop();
    assert!(!session.is_running());
}

#[test]
fn stop_forgets_user_bodies_but_keeps_them_in_the_world() {
    let mut session = fresh(None);
    let id = spawn_square(&mut session, 100.0);
    session.start();
    session.stop();

    assert!(session.user_bodies().is_empty());
    assert!(session.engine().world.contains_body(id));
}

#[test]
fn tick_only_advances_while_running() {
    let mut session = fresh(None);
    let id = spawn_square(&mut session, 100.0);

    session.tick();
    assert_eq!(session.engine().world.body(id).unwrap().position.y, 100.0);
    assert_eq!(session.runner().frame(), 0);

    session.start();
    let frame = session.tick();
    assert!(session.engine().world.body(id).unwrap().position.y > 100.0);
    assert_eq!(session.runner().frame(), 1);
    assert_eq!(frame.bodies.len(), 5);
    assert_eq!(frame.width, 450.0);
}

#[test]
fn reset_returns_user_bodies_to_spawn_points() {
    let mut session = fresh(None);
    let a = spawn_square(&mut session, 100.0);
    let b = spawn_square(&mut session, 300.0);

    session.start();
    for _ in 0..30 {
        session.tick();
    }
    assert!(session.engine().world.body(a).unwrap().position.y > 100.0);

    session.reset();
    assert!(session.is_running());
    for (id, x) in [(a, 100.0), (b, 300.0)] {
        let body = session.engine().world.body(id).unwrap();
        assert_eq!(body.position, Vec2::new(x, 100.0));
        assert_eq!(body.velocity, Vec2::zero());
    }
    assert_eq!(session.user_bodies().len(), 2);
    assert_eq!(session.engine().world.body_count(), 6);
}

#[test]
fn reset_twice_is_the_same_as_once() {
    let mut session = fresh(Some("catapult"));
    spawn_square(&mut session, 100.0);
    session.start();
    for _ in 0..10 {
        session.tick();
    }

    session.reset();
    let once: Vec<_> = session.engine().world.bodies().map(|b| (b.position, b.velocity)).collect();
    session.reset();
    let twice: Vec<_> = session.engine().world.bodies().map(|b| (b.position, b.velocity)).collect();

    assert_eq!(once, twice);
}

#[test]
fn reset_drops_forgotten_dynamic_bodies() {
    let mut session = fresh(None);
    let id = spawn_square(&mut session, 100.0);
    session.stop();
    session.reset();

    assert!(!session.engine().world.contains_body(id));
    assert_eq!(session.engine().world.body_count(), 4);
}

#[test]
fn reset_rebuilds_catapult_without_orphans() {
    let mut session = fresh(Some("catapult"));
    session.start();
    for _ in 0..20 {
        session.tick();
    }
    session.reset();

    assert_eq!(session.active_preset(), Some(PresetName::Catapult));
    assert_eq!(session.scene().bodies().len(), 4);
    assert_eq!(session.engine().world.body_count(), 8);
    assert_eq!(session.engine().world.constraint_count(), 1);
    for tracked in session.scene().bodies() {
        let body = session.engine().world.body(tracked.body).unwrap();
        assert_eq!(body.position, tracked.initial_position);
    }
}

#[test]
fn reset_rebuilds_pyramid_and_keeps_user_bodies() {
    let mut session = fresh(Some("pyramid"));
    let a = spawn_square(&mut session, 100.0);
    let b = spawn_square(&mut session, 300.0);
    let old = session.scene().composites()[0];
    let old_members = session.engine().world.composite_bodies(old).unwrap().to_vec();

    session.start();
    for _ in 0..30 {
        session.tick();
    }
    session.reset();

    assert!(session.engine().world.composite_bodies(old).is_none());
    assert!(old_members.iter().all(|id| !session.engine().world.contains_body(*id)));
    assert_eq!(session.scene().composites().len(), 1);
    let rebuilt = session.scene().composites()[0];
    assert_ne!(rebuilt, old);
    assert_eq!(session.engine().world.composite_bodies(rebuilt).unwrap().len(), 64);
    assert_eq!(session.engine().world.composite_count(), 1);

    for (id, x) in [(a, 100.0), (b, 300.0)] {
        let body = session.engine().world.body(id).unwrap();
        assert_eq!(body.position, Vec2::new(x, 100.0));
        assert_eq!(body.velocity, Vec2::zero());
    }
    assert_eq!(session.engine().world.body_count(), 4 + 64 + 2);
}

#[test]
fn heavy_drop_on_catapult_launches_the_ball() {
    let mut session = fresh(Some("catapult"));
    let ball = session.scene().bodies()[2].body;
    let arm = session.scene().bodies()[3].body;
    session.spawn_user_body(BodyDescriptor::rectangle(120.0, 500.0, 40.0, 40.0).with(BodyOptions {
        density: 0.5,
        ..BodyOptions::default()
    }));

    session.start();
    let mut highest = f32::MAX;
    let mut max_turn = 0.0f32;
    for _ in 0..240 {
        session.tick();
        let world = &session.engine().world;
        highest = highest.min(world.body(ball).unwrap().position.y);
        max_turn = max_turn.max(world.body(arm).unwrap().angle.abs());
    }

    assert!(max_turn > 0.1, "max turn = {}", max_turn);
    assert!(highest < 560.0, "ball peaked at y = {}", highest);
    // still pinned
    let lever = session.engine().world.body(arm).unwrap();
    assert!((lever.position.x - 225.0).abs() < 3.0);
    assert!((lever.position.y - 610.0).abs() < 3.0);
}

#[test]
fn reinitialize_keeps_the_render_surface() {
    let mut session = fresh(Some("catapult"));
    spawn_square(&mut session, 100.0);
    session.start();

    let session = session.reinitialize("stage", &options(), 0.5, None);

    assert_eq!(session.render().attachments(), 2);
    assert_eq!(session.render().container(), "stage");
    assert_eq!(session.render().options().width, 225.0);
    assert!(session.render().is_running());
    assert!(!session.is_running());
    assert!(session.user_bodies().is_empty());
    assert!(session.active_preset().is_none());
    assert_eq!(session.engine().world.body_count(), 4);
    assert_eq!(session.engine().world.constraint_count(), 0);
}

#[test]
fn switching_presets_replaces_the_scene() {
    let mut session = fresh(Some("pyramid"));
    assert_eq!(session.scene().composites().len(), 1);
    assert_eq!(session.engine().world.body_count(), 4 + 64);

    assert_eq!(session.switch_preset("stack"), Some(PresetName::Stack));
    assert_eq!(session.scene().composites().len(), 1);
    assert_eq!(session.engine().world.composite_count(), 1);
    assert_eq!(session.engine().world.body_count(), 4 + 10);

    assert_eq!(session.switch_preset("volcano"), None);
    assert_eq!(session.active_preset(), Some(PresetName::Stack));
    assert_eq!(session.engine().world.body_count(), 4 + 10);
}

#[test]
fn switching_away_from_catapult_removes_its_constraint() {
    let mut session = fresh(Some("catapult"));
    session.switch_preset("stack");
    assert_eq!(session.engine().world.constraint_count(), 0);
}

#[test]
fn scene_state_serializes_registries() {
    let mut session = fresh(Some("catapult"));
    spawn_square(&mut session, 100.0);

    let state = serde_json::to_value(session.scene_state()).unwrap();
    assert_eq!(state["preset"], "catapult");
    assert_eq!(state["bodies"].as_array().unwrap().len(), 4);
    assert_eq!(state["userBodies"].as_array().unwrap().len(), 1);
    assert_eq!(state["userBodies"][0]["initialPosition"]["x"], 100.0);
}

#[test]
fn unknown_color_still_spawns_with_one_error_entry() {
    let mut session = fresh(None);
    let mut log: Vec<LogEntry> = Vec::new();
    let vars = [Variable::string(1, "fill", "ultraviolet")];

    let out = interpreter::interpret(&mut session, &Instruction::new("create circle", 1), &vars, &mut log).unwrap();

    assert_eq!(out.spawned().len(), 1);
    assert_eq!(session.user_bodies().len(), 1);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message, "Error: Huh? Unrecognized color value: ultraviolet");
    let body = session.engine().world.body(out.spawned()[0]).unwrap();
    assert_eq!(body.render.fill_style, "ultraviolet");
}

#[test]
fn number_array_is_rejected_with_item_type() {
    let mut session = fresh(None);
    let mut log: Vec<LogEntry> = Vec::new();
    let vars = [Variable::array(1, "sizes", VariableType::Number, vec![json!(1), json!(2)])];

    let err =
        interpreter::interpret(&mut session, &Instruction::new("create circles", 1), &vars, &mut log).unwrap_err();

    assert_eq!(err, InterpretError::ExpectedStringItems("number".to_string()));
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message, "Error: Expected an array of strings, but got an array of numbers");
    assert!(session.user_bodies().is_empty());
    assert_eq!(session.engine().world.body_count(), 4);
}

#[test]
fn color_array_spawns_a_row() {
    let mut session = fresh(None);
    let mut log: Vec<LogEntry> = Vec::new();
    let vars = [Variable::array(
        1,
        "fills",
        VariableType::String,
        vec![json!("red"), json!("blue"), json!("green")],
    )];

    let out = interpreter::interpret(&mut session, &Instruction::new("create circles", 1), &vars, &mut log).unwrap();
    assert!(log.is_empty());

    let xs: Vec<f32> = out
        .spawned()
        .iter()
        .map(|id| session.engine().world.body(*id).unwrap().position.x)
        .collect();
    assert_eq!(xs, vec![50.0, 137.0, 224.0]);

    for id in out.spawned() {
        let body = session.engine().world.body(*id).unwrap();
        assert!(body.density >= MIN_ROW_DENSITY && body.density < MAX_ROW_DENSITY);
        assert!(body.friction_air >= MIN_ROW_DRAG && body.friction_air < MAX_ROW_DRAG);
        assert_eq!(body.position.y, 0.0);
    }
    assert_eq!(session.user_bodies().len(), 3);
}

#[test]
fn empty_color_array_spawns_nothing() {
    let mut session = fresh(None);
    let mut log: Vec<LogEntry> = Vec::new();
    let vars = [Variable::array(1, "fills", VariableType::String, vec![])];

    let out = interpreter::interpret(&mut session, &Instruction::new("create circles", 1), &vars, &mut log).unwrap();
    assert!(out.spawned().is_empty());
    assert!(log.is_empty());
}

#[test]
fn same_seed_same_jitter() {
    let vars = [Variable::string(1, "fill", "red")];
    let mut xs = Vec::new();
    for _ in 0..2 {
        let mut session = fresh(None);
        let mut log: Vec<LogEntry> = Vec::new();
        let out =
            interpreter::interpret(&mut session, &Instruction::new("create circle", 1), &vars, &mut log).unwrap();
        xs.push(session.engine().world.body(out.spawned()[0]).unwrap().position.x);
    }
    assert_eq!(xs[0], xs[1]);
    assert!((xs[0] - 100.0).abs() <= 5.0);
}
