//! Todo aggregate root and the partial-update merge applied to it.

use super::{TodoDomainError, TodoId};
use chrono::{DateTime, NaiveDate, Timelike, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// `title` and `priority` are required and validated non-blank at
/// construction; `status` and `priority` are deliberately free strings, not
/// enums, so previously accepted values keep round-tripping. The identifier
/// stays unset until the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: Option<TodoId>,
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: String,
    due_date: Option<NaiveDate>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Store-assigned identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status, if any.
    pub status: Option<String>,
    /// Persisted priority.
    pub priority: String,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted creation timestamp, if any.
    pub created_at: Option<DateTime<Utc>>,
    /// Persisted last-update timestamp, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new todo with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] or
    /// [`TodoDomainError::EmptyPriority`] when the corresponding value is
    /// blank after trimming.
    pub fn new(
        title: impl Into<String>,
        priority: impl Into<String>,
    ) -> Result<Self, TodoDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        let priority = priority.into();
        if priority.trim().is_empty() {
            return Err(TodoDomainError::EmptyPriority);
        }

        Ok(Self {
            id: None,
            title,
            description: None,
            status: None,
            priority,
            due_date: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the store-assigned identifier.
    ///
    /// Identifier assignment is a store concern; only repository adapters
    /// should call this.
    #[must_use]
    pub const fn with_id(mut self, id: TodoId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the store-assigned identifier, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<TodoId> {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp, if any.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the last-update timestamp, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Merges a partial update into this record, field by field.
    ///
    /// A present, non-blank patch value overwrites the stored value; an
    /// absent or blank value leaves it untouched. The stored `created_at`
    /// always survives, whatever the patch carries, and `updated_at` is set
    /// from the clock (truncated to whole seconds, matching the stored wire
    /// precision).
    pub fn apply_patch(&mut self, patch: TodoPatch, clock: &impl Clock) {
        merge_text(&mut self.title, patch.title);
        merge_optional_text(&mut self.description, patch.description);
        merge_text(&mut self.priority, patch.priority);
        merge_optional_text(&mut self.status, patch.status);
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        // patch.created_at and patch.updated_at are never merged.
        self.updated_at = Some(truncate_to_seconds(clock.utc()));
    }
}

/// Partial update payload for a todo record.
///
/// Every field is optional. The timestamps are carried for wire fidelity
/// with inbound update bodies but never merged: [`Todo::apply_patch`]
/// discards both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoPatch {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement status, if any.
    pub status: Option<String>,
    /// Replacement priority, if any.
    pub priority: Option<String>,
    /// Replacement due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Ignored: the stored creation timestamp always wins.
    pub created_at: Option<DateTime<Utc>>,
    /// Ignored: the service clock always wins.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TodoPatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets a creation timestamp on the patch (always discarded by the
    /// merge; useful for asserting that contract).
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Overwrites a required text field when the patch value is non-blank.
fn merge_text(existing: &mut String, patch: Option<String>) {
    if let Some(value) = patch
        && !value.trim().is_empty()
    {
        *existing = value;
    }
}

/// Overwrites an optional text field when the patch value is non-blank.
fn merge_optional_text(existing: &mut Option<String>, patch: Option<String>) {
    if let Some(value) = patch
        && !value.trim().is_empty()
    {
        *existing = Some(value);
    }
}

/// Drops the sub-second component of a timestamp.
fn truncate_to_seconds(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
