//! Rigid bodies as the playfield sees them.
//!
//! A body is described by a shape in local coordinates (centered on 0,0), a
//! position and the material knobs the sandbox exposes. Once added, the
//! physics world owns its motion; [`Body`] is a read-back snapshot.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{Body, BodyDescriptor, BodyId, BodyOptions, Bounds, CollisionFilter, RenderStyle, Shape};
