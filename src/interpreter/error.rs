use thiserror::Error;

use crate::domain::variables::VariableType;

/// Hard failures: the whole instruction is dropped.
///
/// The display text is what the learner sees after `Error: ` in the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    #[error("Huh? Unknown variable reference: {0}")]
    MissingVariable(String),

    #[error("Expected a string value, but got {0}")]
    ExpectedString(VariableType),

    #[error("Expected an array of strings, but got {0}")]
    ExpectedArray(VariableType),

    #[error("Expected an array of strings, but got an array of {0}s")]
    ExpectedStringItems(String),
}
