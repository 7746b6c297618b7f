//! In-memory board snapshot: all tasks as currently believed to exist.

use super::{BoardDomainError, ChangeSet, ProjectId, TaskId, TaskRecord};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;

/// The mutable in-memory picture of one project's tasks.
///
/// A snapshot is populated from a full remote listing and replaced
/// wholesale on project switch or reconciliation failure. Between an
/// optimistic apply and the corresponding gateway resolution it may
/// diverge from remote truth; readers always see it either fully
/// pre-move or fully post-move.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    project_id: ProjectId,
    tasks: HashMap<TaskId, TaskRecord>,
}

impl BoardSnapshot {
    /// Builds a snapshot from a full remote listing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ForeignTask`] when a listed task
    /// belongs to a different project than the board.
    pub fn from_remote(
        project_id: ProjectId,
        tasks: Vec<TaskRecord>,
    ) -> Result<Self, BoardDomainError> {
        let mut by_id = HashMap::with_capacity(tasks.len());
        for task in tasks {
            if task.project_id() != project_id {
                return Err(BoardDomainError::ForeignTask { task_id: task.id() });
            }
            by_id.insert(task.id(), task);
        }
        Ok(Self {
            project_id,
            tasks: by_id,
        })
    }

    /// Returns the project this snapshot belongs to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&TaskRecord> {
        self.tasks.get(&task_id)
    }

    /// Iterates over all tasks in the snapshot.
    pub fn tasks(&self) -> impl Iterator<Item = &TaskRecord> {
        self.tasks.values()
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the snapshot holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Writes every placement of a changeset into the snapshot.
    ///
    /// The whole pass is synchronous; callers guard it with the board's
    /// single write lock so no reader observes a partial renumbering.
    pub fn apply(&mut self, changeset: &ChangeSet, clock: &impl Clock) {
        for placement in changeset {
            if let Some(task) = self.tasks.get_mut(&placement.task_id) {
                task.relocate(placement.status, placement.order, clock);
            }
        }
    }

    /// Adopts server-assigned modification timestamps for the given
    /// task ids without touching `status` or `order`.
    pub fn restamp(&mut self, stamps: impl IntoIterator<Item = (TaskId, DateTime<Utc>)>) {
        for (task_id, updated_at) in stamps {
            if let Some(task) = self.tasks.get_mut(&task_id) {
                task.restamp(updated_at);
            }
        }
    }
}
