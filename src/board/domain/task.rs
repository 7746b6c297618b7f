//! Task record aggregate: the entity the board orders and relocates.

use super::{ProjectId, TaskDetails, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task as known to the board.
///
/// The ordering logic reads and writes only `status` and `order`; the
/// rest of the record is payload carried for the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    project_id: ProjectId,
    status: TaskStatus,
    order: u32,
    details: TaskDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a new task record.
    ///
    /// Records normally originate in the remote store; this constructor
    /// exists for seeding gateways and tests.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        status: TaskStatus,
        order: u32,
        details: TaskDetails,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id,
            status,
            order,
            details,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the status bucket the task currently belongs to.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the display position within the current status bucket.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Returns the descriptive payload.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to a new bucket position.
    ///
    /// This is the only mutation the board engine performs on a record.
    pub fn relocate(&mut self, status: TaskStatus, order: u32, clock: &impl Clock) {
        self.status = status;
        self.order = order;
        self.updated_at = clock.utc();
    }

    /// Adopts a server-assigned modification timestamp.
    ///
    /// Never touches `status` or `order`; those remain client-authoritative
    /// until the next full refetch.
    pub const fn restamp(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
