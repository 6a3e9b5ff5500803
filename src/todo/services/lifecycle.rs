//! Service layer for todo creation, retrieval, partial update, deletion,
//! and priority filtering.

use crate::todo::{
    domain::{Todo, TodoId, TodoPatch},
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Service-level errors for todo lifecycle operations.
///
/// The not-found variants carry the exact messages the boundary surfaces in
/// its 404 bodies; repository failures pass through for the boundary to
/// replace with a generic message.
#[derive(Debug, Error)]
pub enum TodoLifecycleError {
    /// No record exists for the identifier.
    #[error("Todo task not found with ID: {0}")]
    NotFound(TodoId),

    /// The store holds no records at all.
    ///
    /// An empty collection is treated as an error rather than a valid empty
    /// result; inherited contract, see DESIGN.md.
    #[error("No Todo items found")]
    Empty,

    /// No record matches the priority filter.
    #[error("No Todos found with priority: {0}")]
    NoPriorityMatch(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Coarse classification of lifecycle errors for status-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoErrorKind {
    /// A lookup, delete, or filter matched nothing; maps to 404.
    NotFound,
    /// Anything else; the boundary must not leak details. Maps to 500.
    Unexpected,
}

impl TodoLifecycleError {
    /// Classifies this error for the boundary's status-code translation.
    #[must_use]
    pub const fn kind(&self) -> TodoErrorKind {
        match self {
            Self::NotFound(_) | Self::Empty | Self::NoPriorityMatch(_) => TodoErrorKind::NotFound,
            Self::Repository(_) => TodoErrorKind::Unexpected,
        }
    }
}

/// Result type for todo lifecycle service operations.
pub type TodoLifecycleResult<T> = Result<T, TodoLifecycleError>;

/// Todo lifecycle orchestration service.
///
/// Stateless between calls: every operation reads what it needs from the
/// repository, computes, and writes back. It performs no locking of its own
/// and relies on the store's per-operation guarantees.
#[derive(Clone)]
pub struct TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Persists a new todo and returns it with its assigned identifier.
    ///
    /// The input is valid by construction ([`Todo::new`] enforces the
    /// required fields); no merging or defaulting happens here.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when persistence fails.
    pub async fn create_todo(&self, todo: Todo) -> TodoLifecycleResult<Todo> {
        info!(title = todo.title(), "creating new todo");
        let saved = self.repository.save(todo).await?;
        info!(id = ?saved.id(), "todo created");
        Ok(saved)
    }

    /// Retrieves every stored todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Empty`] when the store holds no
    /// records, or [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn get_all_todos(&self) -> TodoLifecycleResult<Vec<Todo>> {
        info!("fetching all todos");
        let todos = self.repository.find_all().await?;

        if todos.is_empty() {
            error!("no todos found");
            return Err(TodoLifecycleError::Empty);
        }

        info!(count = todos.len(), "todos fetched");
        Ok(todos)
    }

    /// Retrieves a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NotFound`] when no record exists for
    /// `id`, or [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn get_todo_by_id(&self, id: TodoId) -> TodoLifecycleResult<Todo> {
        info!(%id, "fetching todo");
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            error!(%id, "todo not found");
            TodoLifecycleError::NotFound(id)
        })
    }

    /// Deletes a todo by identifier.
    ///
    /// Existence check and delete are deliberately two separate repository
    /// calls; a concurrent delete between them can hit an already-gone
    /// record. That window is part of the observable contract.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NotFound`] when no record exists for
    /// `id`, or [`TodoLifecycleError::Repository`] when a store call fails.
    pub async fn delete_todo_by_id(&self, id: TodoId) -> TodoLifecycleResult<()> {
        info!(%id, "deleting todo");
        let exists = self.repository.exists_by_id(id).await?;
        if !exists {
            error!(%id, "todo not found, deletion failed");
            return Err(TodoLifecycleError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(%id, "todo deleted");
        Ok(())
    }

    /// Applies a partial update to a todo and returns the merged record.
    ///
    /// Fields present and non-blank on the patch overwrite; all others are
    /// retained. The stored `created_at` always survives and `updated_at`
    /// is set from the service clock. Find-then-save runs as two separate
    /// repository calls: concurrent updates to the same identifier are
    /// last-write-wins, with no version check.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NotFound`] when no record exists for
    /// `id`, or [`TodoLifecycleError::Repository`] when a store call fails.
    pub async fn update_todo_by_id(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> TodoLifecycleResult<Todo> {
        info!(%id, "updating todo");
        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            error!(%id, "todo not found for update");
            return Err(TodoLifecycleError::NotFound(id));
        };

        existing.apply_patch(patch, &*self.clock);
        let updated = self.repository.save(existing).await?;
        info!(%id, "todo updated");
        Ok(updated)
    }

    /// Retrieves every todo whose priority matches `priority` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NoPriorityMatch`] when nothing
    /// matches, or [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn get_todos_by_priority(&self, priority: &str) -> TodoLifecycleResult<Vec<Todo>> {
        info!(priority, "fetching todos by priority");
        let todos = self.repository.find_by_priority(priority).await?;
        if todos.is_empty() {
            error!(priority, "no todos found with priority");
            return Err(TodoLifecycleError::NoPriorityMatch(priority.to_owned()));
        }
        info!(priority, count = todos.len(), "todos fetched by priority");
        Ok(todos)
    }
}
