//! Descriptive task payload carried alongside the ordering fields.
//!
//! Everything in this module is opaque to the ordering logic: the move
//! planner and bucket projection never inspect these values, they only
//! travel with the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority as assigned through the (out-of-scope) edit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

/// Descriptive fields of a task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetails {
    /// Task title.
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Assignee identifier or handle.
    pub assignee: Option<String>,
    /// Priority label.
    pub priority: Option<TaskPriority>,
    /// Due date, if scheduled.
    pub due_date: Option<DateTime<Utc>>,
    /// Remaining remote fields the engine carries but never interprets.
    pub metadata: serde_json::Value,
}

impl TaskDetails {
    /// Creates details with a title and no optional fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee: None,
            priority: None,
            due_date: None,
            metadata: serde_json::Value::Null,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the opaque remote metadata payload.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}
