//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow, TodoUpsertRow},
    schema::todos,
};
use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        let new_row = to_new_row(&todo);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row_to_todo(row))
        })
        .await
    }

    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        let Some(id) = todo.id() else {
            return self.insert(todo).await;
        };

        let upsert_row = to_upsert_row(&todo, id);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&upsert_row)
                .on_conflict(todos::id)
                .do_update()
                .set(&upsert_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row_to_todo(row))
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.value()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(row_to_todo))
        })
        .await
    }

    async fn exists_by_id(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                todos::table.filter(todos::id.eq(id.value())),
            ))
            .get_result::<bool>(connection)
            .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // No-op-safe: a zero row count is not an error at this layer.
            diesel::delete(todos::table.filter(todos::id.eq(id.value())))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_todo).collect())
        })
        .await
    }

    async fn find_by_priority(&self, priority: &str) -> TodoRepositoryResult<Vec<Todo>> {
        let priority_value = priority.to_owned();
        self.run_blocking(move |connection| {
            let rows = todos::table
                .filter(todos::priority.eq(priority_value))
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_todo).collect())
        })
        .await
    }
}

fn to_new_row(todo: &Todo) -> NewTodoRow {
    NewTodoRow {
        title: todo.title().to_owned(),
        description: todo.description().map(ToOwned::to_owned),
        status: todo.status().map(ToOwned::to_owned),
        priority: todo.priority().to_owned(),
        due_date: todo.due_date(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
    }
}

fn to_upsert_row(todo: &Todo, id: TodoId) -> TodoUpsertRow {
    TodoUpsertRow {
        id: id.value(),
        title: todo.title().to_owned(),
        description: todo.description().map(ToOwned::to_owned),
        status: todo.status().map(ToOwned::to_owned),
        priority: todo.priority().to_owned(),
        due_date: todo.due_date(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
    }
}

fn row_to_todo(row: TodoRow) -> Todo {
    let TodoRow {
        id,
        title,
        description,
        status,
        priority,
        due_date,
        created_at,
        updated_at,
    } = row;

    Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        title,
        description,
        status,
        priority,
        due_date,
        created_at,
        updated_at,
    })
}
