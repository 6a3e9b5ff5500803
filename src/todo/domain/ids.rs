//! Identifier types for the todo domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored todo record.
///
/// Identifiers are assigned by the store on first persistence; the domain
/// never generates them. The wrapped value matches the store's `BIGINT`
/// key column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a todo identifier from a raw key value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
