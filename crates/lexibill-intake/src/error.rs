//! Error types for the intake engine.

use lexibill_core::error::LexiBillError;

/// Errors surfaced to the caller of the intake engine.
///
/// Malformed user input is not an error: extractors report [`NoMatch`] and
/// the conversation re-prompts instead.
///
/// [`NoMatch`]: crate::extract::NoMatch
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("a turn is already being processed")]
    Busy,
    #[error("time entry is incomplete")]
    IncompleteEntry,
    #[error("entry belongs to matter '{found}', session is for '{expected}'")]
    MatterMismatch { expected: String, found: String },
    #[error("store error: {0}")]
    Store(String),
}

impl From<LexiBillError> for IntakeError {
    fn from(err: LexiBillError) -> Self {
        IntakeError::Store(err.to_string())
    }
}
