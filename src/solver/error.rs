//! Engine error types

use thiserror::Error;

/// Errors raised by the solution engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine cannot be built from the given candidates
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// Internal state that correct partitioning can never produce
    #[error("engine invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Reasons a candidate list is rejected at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("candidate word list must be non-empty")]
    EmptyCandidates,
    #[error("candidates must all have length {expected}, but '{word}' has length {found}")]
    MixedLengths {
        expected: usize,
        found: usize,
        word: String,
    },
}
