//! In-memory repository for todo storage and tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are assigned from a sequential counter starting at 1. A
/// secondary index keyed on the raw priority string backs
/// [`TodoRepository::find_by_priority`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    priority_index: HashMap<String, Vec<TodoId>>,
    next_id: i64,
}

impl Default for InMemoryTodoState {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            priority_index: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Adds a record to the priority index.
fn index_priority(index: &mut HashMap<String, Vec<TodoId>>, todo: &Todo, id: TodoId) {
    index.entry(todo.priority().to_owned()).or_default().push(id);
}

/// Removes a record from the priority index, cleaning up the entry if empty.
fn deindex_priority(index: &mut HashMap<String, Vec<TodoId>>, todo: &Todo, id: TodoId) {
    if let Some(ids) = index.get_mut(todo.priority()) {
        ids.retain(|indexed| *indexed != id);
        if ids.is_empty() {
            index.remove(todo.priority());
        }
    }
}

/// Stores a record with a freshly assigned identifier.
fn insert_locked(state: &mut InMemoryTodoState, todo: Todo) -> Todo {
    let id = TodoId::new(state.next_id);
    state.next_id += 1;
    let stored = todo.with_id(id);
    index_priority(&mut state.priority_index, &stored, id);
    state.todos.insert(id, stored.clone());
    stored
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(insert_locked(&mut state, todo))
    }

    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(id) = todo.id() else {
            return Ok(insert_locked(&mut state, todo));
        };

        // Re-index in case the update changed the priority.
        if let Some(previous) = state.todos.get(&id).cloned() {
            deindex_priority(&mut state.priority_index, &previous, id);
        }
        index_priority(&mut state.priority_index, &todo, id);
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if let Some(removed) = state.todos.remove(&id) {
            deindex_priority(&mut state.priority_index, &removed, id);
        }
        Ok(())
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn find_by_priority(&self, priority: &str) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let todos = state
            .priority_index
            .get(priority)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.todos.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(todos)
    }
}
