//! Errors surfaced across the wasm boundary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaygroundError>;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("playfield is not initialized")]
    NotInitialized,

    #[error("invalid playfield options: {0}")]
    InvalidOptions(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Interpret(#[from] crate::interpreter::InterpretError),
}
