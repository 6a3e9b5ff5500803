//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
///
/// The messages are the field-specific texts surfaced verbatim by the
/// transport boundary in its validation-failure responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty or whitespace-only.
    #[error("Please add Title")]
    EmptyTitle,

    /// The priority is empty or whitespace-only.
    #[error("Please Set Priority")]
    EmptyPriority,
}
