//! Store-level integration tests for the in-memory todo repository.

use listkeeper::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId},
    ports::TodoRepository,
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTodoRepository {
    InMemoryTodoRepository::new()
}

fn todo(title: &str, priority: &str) -> Todo {
    Todo::new(title, priority).expect("valid todo")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_sequential_ids(repository: InMemoryTodoRepository) {
    let first = repository
        .insert(todo("First", "High"))
        .await
        .expect("insert should succeed");
    let second = repository
        .insert(todo("Second", "Low"))
        .await
        .expect("insert should succeed");

    assert_eq!(first.id(), Some(TodoId::new(1)));
    assert_eq!(second.id(), Some(TodoId::new(2)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_ignores_a_preset_id(repository: InMemoryTodoRepository) {
    let stored = repository
        .insert(todo("Preset", "High").with_id(TodoId::new(99)))
        .await
        .expect("insert should succeed");

    assert_eq!(stored.id(), Some(TodoId::new(1)));
    let missing = repository
        .find_by_id(TodoId::new(99))
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_without_id_takes_the_insert_path(repository: InMemoryTodoRepository) {
    let stored = repository
        .save(todo("Fresh", "Medium"))
        .await
        .expect("save should succeed");

    assert_eq!(stored.id(), Some(TodoId::new(1)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_with_id_overwrites_the_stored_record(repository: InMemoryTodoRepository) {
    let stored = repository
        .insert(todo("Original", "Medium"))
        .await
        .expect("insert should succeed");
    let id = stored.id().expect("stored todo has an id");

    let replacement = todo("Replacement", "Medium").with_id(id);
    repository
        .save(replacement)
        .await
        .expect("save should succeed");

    let found = repository
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(found.title(), "Replacement");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_record_is_a_no_op(repository: InMemoryTodoRepository) {
    repository
        .delete_by_id(TodoId::new(5))
        .await
        .expect("delete of a missing record should not fail");

    let exists = repository
        .exists_by_id(TodoId::new(5))
        .await
        .expect("exists check should succeed");
    assert!(!exists);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_index_follows_a_priority_change(repository: InMemoryTodoRepository) {
    let stored = repository
        .insert(todo("Shifting", "Low"))
        .await
        .expect("insert should succeed");
    let id = stored.id().expect("stored todo has an id");

    let moved = todo("Shifting", "High").with_id(id);
    repository.save(moved).await.expect("save should succeed");

    let high = repository
        .find_by_priority("High")
        .await
        .expect("filter should succeed");
    assert_eq!(high.len(), 1);
    let low = repository
        .find_by_priority("Low")
        .await
        .expect("filter should succeed");
    assert!(low.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_returns_records_in_id_order(repository: InMemoryTodoRepository) {
    for title in ["One", "Two", "Three"] {
        repository
            .insert(todo(title, "Medium"))
            .await
            .expect("insert should succeed");
    }

    let all = repository.find_all().await.expect("find_all should succeed");
    let titles: Vec<&str> = all.iter().map(Todo::title).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}
