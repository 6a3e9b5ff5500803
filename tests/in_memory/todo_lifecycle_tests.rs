//! In-memory integration tests for the todo lifecycle operations.

use std::sync::Arc;

use listkeeper::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId, TodoPatch},
    services::{TodoErrorKind, TodoLifecycleError, TodoLifecycleService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TodoLifecycleService<InMemoryTodoRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TodoLifecycleService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Asserts the stored todo carries an assigned identifier.
///
/// # Errors
///
/// Returns an error when the identifier is missing.
fn assigned_id(todo: &Todo) -> Result<TodoId, eyre::Report> {
    todo.id()
        .ok_or_else(|| eyre::eyre!("stored todo should carry an id"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_delete_round_trip(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_todo(Todo::new("Drive to Airport", "medium")?)
        .await?;
    let id = assigned_id(&created)?;

    let fetched = service.get_todo_by_id(id).await?;
    eyre::ensure!(
        fetched.title() == "Drive to Airport",
        "fetched title mismatch"
    );

    let updated = service
        .update_todo_by_id(id, TodoPatch::new().with_priority("High"))
        .await?;
    eyre::ensure!(updated.priority() == "High", "priority should be replaced");
    eyre::ensure!(
        updated.title() == "Drive to Airport",
        "title should survive the patch"
    );

    service.delete_todo_by_id(id).await?;
    let gone = service.get_todo_by_id(id).await;
    eyre::ensure!(
        matches!(gone, Err(TodoLifecycleError::NotFound(_))),
        "deleted todo should report not-found"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_reports_not_found_for_both_list_operations(service: TestService) {
    let all = service.get_all_todos().await;
    assert!(matches!(all, Err(TodoLifecycleError::Empty)));

    let filtered = service.get_todos_by_priority("High").await;
    let Err(err) = filtered else {
        panic!("empty filter result should fail");
    };
    assert_eq!(err.to_string(), "No Todos found with priority: High");
    assert_eq!(err.kind(), TodoErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_filter_returns_only_exact_matches(
    service: TestService,
) -> Result<(), eyre::Report> {
    service
        .create_todo(Todo::new("File taxes", "High")?)
        .await?;
    service
        .create_todo(Todo::new("Water the plants", "high")?)
        .await?;
    service
        .create_todo(Todo::new("Renew passport", "High")?)
        .await?;

    let high = service.get_todos_by_priority("High").await?;
    eyre::ensure!(high.len() == 2, "expected two exact matches");
    eyre::ensure!(
        high.iter().all(|todo| todo.priority() == "High"),
        "filter must be case-sensitive"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_at_is_set_only_after_an_update(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_todo(Todo::new("Write report", "Medium")?)
        .await?;
    eyre::ensure!(
        created.updated_at().is_none(),
        "creation must not set updated_at"
    );

    let id = assigned_id(&created)?;
    let updated = service
        .update_todo_by_id(id, TodoPatch::new().with_status("Done"))
        .await?;
    eyre::ensure!(
        updated.updated_at().is_some(),
        "update must set updated_at"
    );
    eyre::ensure!(
        updated.status() == Some("Done"),
        "status should be replaced"
    );
    Ok(())
}
