//! In-memory repository integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `todo_lifecycle_tests`: Service-level create/read/update/delete/filter flows
//! - `todo_repository_tests`: Store-level identifier assignment, upsert, and
//!   priority indexing

mod in_memory {
    mod todo_lifecycle_tests;
    mod todo_repository_tests;
}
