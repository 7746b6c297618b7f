//! Move planning: computing the ordering rewrites for one drag-end event.

use super::{
    BoardDomainError, BoardSnapshot, BucketIndex, ChangeSet, TaskId, TaskPlacement, TaskStatus,
};

/// Computes the changeset for moving a task to a bucket position.
///
/// The destination index is clamped to `[0, n]` where `n` is the
/// destination bucket size measured after removal of the moved task, so
/// any oversized index means append-to-end. The plan renumbers the whole
/// destination bucket, and the whole source bucket when distinct, to a
/// gapless `0..n-1` sequence; only tasks whose `(status, order)` actually
/// changes appear in the result. Moving a task onto its own current
/// position therefore yields an empty changeset.
///
/// Pure: the snapshot is not mutated. Callers apply the returned
/// changeset via [`BoardSnapshot::apply`].
///
/// # Errors
///
/// Returns [`BoardDomainError::UnknownTask`] when the task is not in the
/// snapshot. No other precondition exists: a `usize` index cannot be
/// negative and oversized indices clamp.
pub fn plan_move(
    snapshot: &BoardSnapshot,
    task_id: TaskId,
    destination: TaskStatus,
    destination_index: usize,
) -> Result<ChangeSet, BoardDomainError> {
    let moved = snapshot
        .task(task_id)
        .ok_or(BoardDomainError::UnknownTask(task_id))?;
    let source = moved.status();
    let index = BucketIndex::build(snapshot.tasks());

    let mut destination_ids: Vec<TaskId> = index.bucket(destination).to_vec();
    if source == destination {
        destination_ids.retain(|id| *id != task_id);
        let insert_at = destination_index.min(destination_ids.len());
        destination_ids.insert(insert_at, task_id);
        let mut placements = Vec::new();
        renumber(snapshot, destination, &destination_ids, &mut placements);
        return Ok(ChangeSet::new(placements));
    }

    let mut source_ids: Vec<TaskId> = index.bucket(source).to_vec();
    source_ids.retain(|id| *id != task_id);
    let insert_at = destination_index.min(destination_ids.len());
    destination_ids.insert(insert_at, task_id);

    let mut placements = Vec::new();
    renumber(snapshot, destination, &destination_ids, &mut placements);
    renumber(snapshot, source, &source_ids, &mut placements);
    Ok(ChangeSet::new(placements))
}

/// Emits a placement for every task whose `(status, order)` differs from
/// its positional assignment in the given sequence.
fn renumber(
    snapshot: &BoardSnapshot,
    status: TaskStatus,
    ordered_ids: &[TaskId],
    placements: &mut Vec<TaskPlacement>,
) {
    for (position, id) in (0u32..).zip(ordered_ids.iter()) {
        let unchanged = snapshot
            .task(*id)
            .is_some_and(|task| task.status() == status && task.order() == position);
        if !unchanged {
            placements.push(TaskPlacement {
                task_id: *id,
                status,
                order: position,
            });
        }
    }
}
