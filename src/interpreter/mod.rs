//! Instruction Interpreter
//!
//! Turns one editor instruction plus a snapshot of variables into spawned
//! user bodies. Failures come in two strengths:
//! - soft: an unrecognized color is logged, and the raw string is still used as fill
//! - hard: a missing variable or a mistyped value is logged and nothing spawns
//!
//! Unknown actions are console diagnostics only and never reach the log.

mod error;
pub mod shapes;

pub use error::InterpretError;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::{diagnostics, Scale};
use crate::domain::colors::{check_color, ColorCheck};
use crate::domain::log::{LogEntry, LogSink};
use crate::domain::variables::{json_kind, Action, Instruction, Variable, VariableType};
use crate::rigid_body::{BodyDescriptor, BodyId};
use crate::simulation::Session;

/// Horizontal spawn jitter, in design units either side of the anchor
pub const JITTER: f32 = 5.0;
pub const MIN_ROW_DENSITY: f32 = 0.002;
pub const MAX_ROW_DENSITY: f32 = 0.005;
pub const MIN_ROW_DRAG: f32 = 0.005;
pub const MAX_ROW_DRAG: f32 = 0.025;

/// What a successfully interpreted instruction did
#[derive(Clone, Debug, PartialEq)]
pub enum Interpreted {
    Spawned(Vec<BodyId>),
    /// Action not in the supported set; nothing changed
    Unsupported,
}

impl Interpreted {
    pub fn spawned(&self) -> &[BodyId] {
        match self {
            Interpreted::Spawned(ids) => ids,
            Interpreted::Unsupported => &[],
        }
    }
}

/// Run `instruction` against `snapshot`, spawning into `session`.
///
/// Hard errors are appended to `sink` and also returned.
pub fn interpret(
    session: &mut Session,
    instruction: &Instruction,
    snapshot: &[Variable],
    sink: &mut dyn LogSink,
) -> Result<Interpreted, InterpretError> {
    let Some(action) = Action::parse(&instruction.action) else {
        diagnostics::warn(&format!("Unknown instruction type: {}", instruction.action));
        return Ok(Interpreted::Unsupported);
    };

    let variable = match lookup(instruction, snapshot) {
        Ok(variable) => variable,
        Err(err) => return Err(reject(sink, err)),
    };

    let spawned = match action {
        Action::CreateCircle => spawn_single(session, variable, sink, |rng, scale, fill| {
            shapes::circle(scale, fill, rng.gen_range(-JITTER..JITTER))
        })
        .map(|id| vec![id]),
        Action::CreateSquare => {
            spawn_single(session, variable, sink, |_, scale, fill| shapes::square(scale, fill)).map(|id| vec![id])
        }
        Action::CreateTriangle => spawn_single(session, variable, sink, |rng, scale, fill| {
            shapes::triangle(scale, fill, rng.gen_range(-JITTER..JITTER))
        })
        .map(|id| vec![id]),
        Action::CreateCircles => spawn_row(session, variable, sink),
    };

    spawned.map(Interpreted::Spawned).map_err(|err| reject(sink, err))
}

fn lookup<'a>(instruction: &Instruction, snapshot: &'a [Variable]) -> Result<&'a Variable, InterpretError> {
    let Some(id) = instruction.variable_id else {
        return Err(InterpretError::MissingVariable("none".to_string()));
    };
    snapshot
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| InterpretError::MissingVariable(id.to_string()))
}

fn reject(sink: &mut dyn LogSink, err: InterpretError) -> InterpretError {
    sink.append(LogEntry::error(&err.to_string()));
    err
}

/// Soft check: log an unknown color and hand back the fill to use either way.
fn checked_fill(raw: &str, sink: &mut dyn LogSink) -> String {
    let check = check_color(raw);
    if let ColorCheck::Invalid { reason, .. } = &check {
        sink.append(LogEntry::error(reason));
    }
    check.fill().to_string()
}

fn spawn_single<F>(
    session: &mut Session,
    variable: &Variable,
    sink: &mut dyn LogSink,
    shape: F,
) -> Result<BodyId, InterpretError>
where
    F: FnOnce(&mut ChaCha8Rng, Scale, &str) -> BodyDescriptor,
{
    let raw = variable
        .value
        .as_str()
        .ok_or_else(|| InterpretError::ExpectedString(variable.value.kind()))?;
    let fill = checked_fill(raw, sink);
    let scale = session.scale();
    let descriptor = shape(session.rng(), scale, &fill);
    Ok(session.spawn_user_body(descriptor))
}

/// `create circles`: validated once up front, then one circle per color.
fn spawn_row(session: &mut Session, variable: &Variable, sink: &mut dyn LogSink) -> Result<Vec<BodyId>, InterpretError> {
    let colors = string_items(variable)?;
    let scale = session.scale();

    let mut spawned = Vec::with_capacity(colors.len());
    for (i, raw) in colors.into_iter().enumerate() {
        let fill = checked_fill(raw, sink);
        let density = session.rng().gen_range(MIN_ROW_DENSITY..MAX_ROW_DENSITY);
        let drag = session.rng().gen_range(MIN_ROW_DRAG..MAX_ROW_DRAG);
        spawned.push(session.spawn_user_body(shapes::row_circle(scale, &fill, i, density, drag)));
    }
    Ok(spawned)
}

fn string_items(variable: &Variable) -> Result<Vec<&str>, InterpretError> {
    if variable.item_type != Some(VariableType::String) {
        let declared = variable
            .item_type
            .map(|t| t.as_str())
            .unwrap_or("undefined");
        return Err(InterpretError::ExpectedStringItems(declared.to_string()));
    }

    let items = variable
        .value
        .as_array()
        .ok_or_else(|| InterpretError::ExpectedArray(variable.value.kind()))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| InterpretError::ExpectedStringItems(json_kind(item).to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::PlayfieldOptions;
    use serde_json::json;

    fn session() -> Session {
        Session::initialize("playfield", &PlayfieldOptions::new(450.0, 700.0).with_seed(7), 1.0, None)
    }

    #[test]
    fn missing_variable_is_a_hard_error() {
        let mut session = session();
        let mut log: Vec<LogEntry> = Vec::new();
        let err = interpret(&mut session, &Instruction::new("create circle", 42), &[], &mut log).unwrap_err();
        assert_eq!(err, InterpretError::MissingVariable("42".to_string()));
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].message, "Error: Huh? Unknown variable reference: 42");
        assert!(session.user_bodies().is_empty());
    }

    #[test]
    fn unknown_action_changes_nothing_and_logs_nothing() {
        let mut session = session();
        let mut log: Vec<LogEntry> = Vec::new();
        let vars = [Variable::string(1, "fill", "red")];
        let bodies_before = session.engine().world.body_count();

        let out = interpret(&mut session, &Instruction::new("create hexagon", 1), &vars, &mut log).unwrap();
        assert_eq!(out, Interpreted::Unsupported);
        assert!(log.is_empty());
        assert_eq!(session.engine().world.body_count(), bodies_before);
    }

    #[test]
    fn non_string_value_for_single_shape_is_rejected() {
        let mut session = session();
        let mut log: Vec<LogEntry> = Vec::new();
        let vars = [Variable::array(1, "fills", VariableType::String, vec![json!("red")])];

        let err = interpret(&mut session, &Instruction::new("create square", 1), &vars, &mut log).unwrap_err();
        assert_eq!(err, InterpretError::ExpectedString(VariableType::Array));
        assert_eq!(log[0].message, "Error: Expected a string value, but got array");
        assert!(session.user_bodies().is_empty());
    }

    #[test]
    fn mixed_array_aborts_before_spawning_anything() {
        let mut session = session();
        let mut log: Vec<LogEntry> = Vec::new();
        let vars = [Variable::array(1, "fills", VariableType::String, vec![json!("red"), json!(3)])];

        let err = interpret(&mut session, &Instruction::new("create circles", 1), &vars, &mut log).unwrap_err();
        assert_eq!(err, InterpretError::ExpectedStringItems("number".to_string()));
        assert_eq!(log.len(), 1);
        assert!(session.user_bodies().is_empty());
    }

    #[test]
    fn square_spawns_at_fixed_column() {
        let mut session = session();
        let mut log: Vec<LogEntry> = Vec::new();
        let vars = [Variable::string(1, "fill", "gold")];

        let out = interpret(&mut session, &Instruction::new("create square", 1), &vars, &mut log).unwrap();
        let id = out.spawned()[0];
        let body = session.engine().world.body(id).unwrap();
        assert_eq!(body.position.x, 225.0);
        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.render.fill_style, "gold");
        assert!(log.is_empty());
    }

    #[test]
    fn triangle_is_jittered_and_rotated() {
        let mut session = session();
        let mut log: Vec<LogEntry> = Vec::new();
        let vars = [Variable::string(1, "fill", "navy")];

        let out = interpret(&mut session, &Instruction::new("create triangle", 1), &vars, &mut log).unwrap();
        let body = session.engine().world.body(out.spawned()[0]).unwrap();
        assert!((body.position.x - 350.0).abs() <= 5.0);
        assert!((body.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(body.restitution, 0.75);
        assert_eq!(body.friction, 0.5);
    }
}
