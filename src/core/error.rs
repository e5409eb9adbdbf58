//! State machine error types.

use thiserror::Error;

/// Errors raised by the generic state holder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The holder was asked for its state before any transition happened
    #[error("No state has been entered yet")]
    NotStarted,
}
