//! Physics: bodies, the world that holds them, and the engine that steps it

pub mod engine;
pub mod rigid_body;
pub mod rigid_body_system;
