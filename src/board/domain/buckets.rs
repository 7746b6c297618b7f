//! Status-partitioned ordered projection of a flat task collection.

use super::{TaskId, TaskRecord, TaskStatus};
use std::collections::BTreeMap;

/// Mapping from every status bucket to its member task ids in display
/// order.
///
/// This is a pure projection: building it has no side effects, it is
/// idempotent, and it is cheap enough to re-derive on every read. Members
/// are sorted ascending by `order`; two tasks sharing an `order` value
/// (a transient consistency violation, not a sanctioned state) are
/// tie-broken by task id so the projection stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketIndex {
    buckets: BTreeMap<TaskStatus, Vec<TaskId>>,
}

impl BucketIndex {
    /// Builds the projection from a flat collection of task records.
    ///
    /// Every status in [`TaskStatus::ALL`] is present in the result,
    /// including buckets with zero members.
    #[must_use]
    pub fn build<'a>(tasks: impl IntoIterator<Item = &'a TaskRecord>) -> Self {
        let mut members: BTreeMap<TaskStatus, Vec<&'a TaskRecord>> = TaskStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        for task in tasks {
            members.entry(task.status()).or_default().push(task);
        }

        let buckets = members
            .into_iter()
            .map(|(status, mut records)| {
                records.sort_by_key(|record| (record.order(), record.id()));
                let ids = records.into_iter().map(TaskRecord::id).collect();
                (status, ids)
            })
            .collect();
        Self { buckets }
    }

    /// Returns the ordered member ids of a bucket.
    #[must_use]
    pub fn bucket(&self, status: TaskStatus) -> &[TaskId] {
        self.buckets
            .get(&status)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the bucket and position a task currently occupies.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<(TaskStatus, usize)> {
        self.buckets.iter().find_map(|(status, ids)| {
            ids.iter()
                .position(|id| *id == task_id)
                .map(|index| (*status, index))
        })
    }

    /// Returns the total number of tasks across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
