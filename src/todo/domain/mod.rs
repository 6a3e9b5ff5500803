//! Domain model for todo lifecycle management.
//!
//! The todo domain models record construction with required-field
//! validation and the null-coalescing merge applied during partial updates,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use todo::{PersistedTodoData, Todo, TodoPatch};
