//! Diesel row models for todo persistence.

use super::schema::todos;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Required title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional status.
    pub status: Option<String>,
    /// Required priority.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Optional last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for fresh todo records; the database assigns the key.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Required title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional status.
    pub status: Option<String>,
    /// Required priority.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Optional last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Upsert model for records that already carry an identifier.
///
/// `treat_none_as_null` keeps the changeset faithful to the merged record:
/// the null-coalescing merge has already run in the service, so a `None`
/// here genuinely means "no value".
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoUpsertRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Required title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional status.
    pub status: Option<String>,
    /// Required priority.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Optional last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}
