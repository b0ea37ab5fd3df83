//! World storage for the playfield's bodies
//!
//! A registry of bodies, composites (groups placed and removed together) and
//! pin constraints layered over the rapier sets that simulate them. Ids are
//! allocated from one counter on insertion and never reused.

mod composites;
mod constraint;
mod system;

pub use composites::{Composite, CompositeId, StackCell};
pub use constraint::{Constraint, ConstraintId};
pub use system::{World, PIXELS_PER_METER};
