//! Repository port for todo persistence, lookup, and priority filtering.
//!
//! The repository is storage-level only: it enforces no business rules and
//! reports absence as a normal result. Not-found policy lives in the
//! lifecycle service.

use crate::todo::domain::{Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Implementations own identifier generation and maintain a secondary
/// exact-match index on `priority`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persists a new record, assigning a fresh identifier.
    ///
    /// Any identifier already present on the input is ignored. Returns the
    /// stored record including the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn insert(&self, todo: Todo) -> TodoRepositoryResult<Todo>;

    /// Upserts a record by identifier.
    ///
    /// Input without an identifier takes the [`TodoRepository::insert`]
    /// path; input with one overwrites (or creates) the record under that
    /// key. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Reports whether a record exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn exists_by_id(&self, id: TodoId) -> TodoRepositoryResult<bool>;

    /// Deletes the record for the identifier.
    ///
    /// Deleting an absent record is a no-op at this layer; the existence
    /// check belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()>;

    /// Returns every stored record, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Returns every record whose priority matches `priority` exactly.
    ///
    /// Matching is case-sensitive with no partial matching; the result may
    /// be empty.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] on storage failure.
    async fn find_by_priority(&self, priority: &str) -> TodoRepositoryResult<Vec<Todo>>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
