//! Changeset values describing the ordering rewrites of one move.

use super::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// One task's new bucket assignment after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPlacement {
    /// Task whose ordering fields changed.
    pub task_id: TaskId,
    /// Bucket the task now belongs to.
    pub status: TaskStatus,
    /// New position within the bucket.
    pub order: u32,
}

/// The full set of placements produced by one move operation.
///
/// Contains an entry for the moved task and for every other task whose
/// `order` was rewritten by the bucket renumbering. A move of a task to
/// its own current position yields an empty changeset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeSet {
    placements: Vec<TaskPlacement>,
}

impl ChangeSet {
    /// Creates a changeset from its placements.
    #[must_use]
    pub const fn new(placements: Vec<TaskPlacement>) -> Self {
        Self { placements }
    }

    /// Returns `true` when the move changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the number of placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Iterates over the placements.
    pub fn iter(&self) -> impl Iterator<Item = &TaskPlacement> {
        self.placements.iter()
    }

    /// Returns the distinct buckets touched by this changeset, in
    /// canonical status order.
    #[must_use]
    pub fn touched_buckets(&self) -> Vec<TaskStatus> {
        let mut buckets: Vec<TaskStatus> = self
            .placements
            .iter()
            .map(|placement| placement.status)
            .collect();
        buckets.sort_unstable();
        buckets.dedup();
        buckets
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a TaskPlacement;
    type IntoIter = std::slice::Iter<'a, TaskPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}
