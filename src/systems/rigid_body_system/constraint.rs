use crate::rigid_body::{BodyId, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub u32);

/// Zero-length pin holding a point of a body on a fixed world point.
///
/// The body keeps turning freely around the pin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub body: BodyId,
    /// Offset from the body's center, in its local frame
    pub point_on_body: Vec2,
    /// World point the body is held on
    pub anchor: Vec2,
}

impl Constraint {
    /// Pin `body` at its center to the world point `anchor`.
    pub fn pin(body: BodyId, anchor: Vec2) -> Self {
        Self {
            body,
            point_on_body: Vec2::zero(),
            anchor,
        }
    }
}
