//! Tests for the status-partitioned bucket projection.

use crate::board::domain::{BucketIndex, ProjectId, TaskStatus};
use crate::board::tests::fixtures::record;
use rstest::rstest;

#[rstest]
fn empty_collection_still_exposes_every_bucket() {
    let tasks: Vec<crate::board::domain::TaskRecord> = Vec::new();
    let index = BucketIndex::build(&tasks);

    for status in TaskStatus::ALL {
        assert!(index.bucket(status).is_empty());
    }
    assert_eq!(index.total(), 0);
}

#[rstest]
fn buckets_are_sorted_ascending_by_order() {
    let project_id = ProjectId::new();
    let first = record(project_id, TaskStatus::Pending, 0, "first");
    let second = record(project_id, TaskStatus::Pending, 1, "second");
    let third = record(project_id, TaskStatus::Pending, 2, "third");

    // Build from a shuffled iteration order.
    let index = BucketIndex::build([&third, &first, &second]);

    assert_eq!(
        index.bucket(TaskStatus::Pending),
        [first.id(), second.id(), third.id()]
    );
}

#[rstest]
fn membership_is_partitioned_by_status() {
    let project_id = ProjectId::new();
    let pending = record(project_id, TaskStatus::Pending, 0, "pending");
    let blocked = record(project_id, TaskStatus::Blocked, 0, "blocked");

    let index = BucketIndex::build([&pending, &blocked]);

    assert_eq!(index.bucket(TaskStatus::Pending), [pending.id()]);
    assert_eq!(index.bucket(TaskStatus::Blocked), [blocked.id()]);
    assert!(index.bucket(TaskStatus::Completed).is_empty());
    assert_eq!(index.total(), 2);
}

#[rstest]
fn duplicate_orders_tie_break_by_task_id() {
    let project_id = ProjectId::new();
    let one = record(project_id, TaskStatus::InProgress, 3, "one");
    let two = record(project_id, TaskStatus::InProgress, 3, "two");
    let mut expected = [one.id(), two.id()];
    expected.sort_unstable();

    let index = BucketIndex::build([&one, &two]);

    assert_eq!(index.bucket(TaskStatus::InProgress), expected);

    // Same flat input, opposite iteration order: the projection must not
    // depend on it.
    let reversed = BucketIndex::build([&two, &one]);
    assert_eq!(reversed.bucket(TaskStatus::InProgress), expected);
}

#[rstest]
fn position_of_reports_bucket_and_index() {
    let project_id = ProjectId::new();
    let head = record(project_id, TaskStatus::Completed, 0, "head");
    let tail = record(project_id, TaskStatus::Completed, 1, "tail");

    let index = BucketIndex::build([&head, &tail]);

    assert_eq!(
        index.position_of(tail.id()),
        Some((TaskStatus::Completed, 1))
    );
    assert_eq!(
        index.position_of(crate::board::domain::TaskId::new()),
        None
    );
}
