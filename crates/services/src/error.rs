//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// The pool no longer holds enough questions for a full round.
    ///
    /// Terminal for the current session; the caller ends the quiz loop
    /// rather than retrying.
    #[error("not enough questions remain to start a round: {remaining} left")]
    PoolExhausted { remaining: usize },
}

/// Errors emitted by `SessionController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
