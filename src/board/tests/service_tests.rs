//! Service tests for board lifecycle, read view, and successful moves.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryTaskGateway,
    domain::{ProjectId, TaskId, TaskRecord, TaskStatus},
    services::{BoardError, BoardService},
    tests::fixtures::record,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = BoardService<InMemoryTaskGateway, DefaultClock>;

struct Board {
    service: TestService,
    gateway: InMemoryTaskGateway,
    project_id: ProjectId,
    ids: Vec<TaskId>,
}

/// Board seeded with pending [A, B, C] and in-progress [D].
#[fixture]
fn board() -> Board {
    let gateway = InMemoryTaskGateway::new();
    let project_id = ProjectId::new();
    let seeds = vec![
        record(project_id, TaskStatus::Pending, 0, "A"),
        record(project_id, TaskStatus::Pending, 1, "B"),
        record(project_id, TaskStatus::Pending, 2, "C"),
        record(project_id, TaskStatus::InProgress, 0, "D"),
    ];
    let ids = seeds.iter().map(TaskRecord::id).collect();
    gateway.seed(seeds).expect("seeding succeeds");
    let service = BoardService::new(Arc::new(gateway.clone()), Arc::new(DefaultClock));
    Board {
        service,
        gateway,
        project_id,
        ids,
    }
}

fn titles(tasks: &[TaskRecord]) -> Vec<&str> {
    tasks.iter().map(|task| task.details().title.as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_populates_every_bucket(board: Board) {
    board.service.load(board.project_id).await.expect("load succeeds");

    let pending = board
        .service
        .get_bucket(TaskStatus::Pending)
        .expect("bucket readable");
    assert_eq!(titles(&pending), ["A", "B", "C"]);
    assert_eq!(board.service.task_count().expect("count readable"), 4);

    let buckets = board.service.buckets().expect("buckets readable");
    assert_eq!(buckets.len(), TaskStatus::ALL.len());
    assert!(buckets
        .get(&TaskStatus::Completed)
        .is_some_and(Vec::is_empty));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reads_before_load_are_rejected(board: Board) {
    assert!(matches!(
        board.service.get_bucket(TaskStatus::Pending),
        Err(BoardError::NotLoaded)
    ));
    assert!(matches!(board.service.project(), Err(BoardError::NotLoaded)));
    assert!(matches!(
        board.service.reload().await,
        Err(BoardError::NotLoaded)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_applies_locally_and_round_trips_through_the_store(board: Board) {
    board.service.load(board.project_id).await.expect("load succeeds");
    let a_id = *board.ids.first().expect("seeded id");

    let changeset = board
        .service
        .move_task(a_id, TaskStatus::InProgress, 1)
        .await
        .expect("move persists");
    assert!(!changeset.is_empty());

    let in_progress = board
        .service
        .get_bucket(TaskStatus::InProgress)
        .expect("bucket readable");
    assert_eq!(titles(&in_progress), ["D", "A"]);

    // A fresh load from the same store must reproduce the optimistic
    // arrangement exactly.
    let refetched = BoardService::new(Arc::new(board.gateway.clone()), Arc::new(DefaultClock));
    refetched.load(board.project_id).await.expect("reload succeeds");
    let remote_in_progress = refetched
        .get_bucket(TaskStatus::InProgress)
        .expect("bucket readable");
    assert_eq!(titles(&remote_in_progress), ["D", "A"]);
    let remote_pending = refetched
        .get_bucket(TaskStatus::Pending)
        .expect("bucket readable");
    assert_eq!(titles(&remote_pending), ["B", "C"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_op_move_returns_empty_changeset_and_changes_nothing(board: Board) {
    board.service.load(board.project_id).await.expect("load succeeds");
    let b_id = *board.ids.get(1).expect("seeded id");
    let before = board.service.buckets().expect("buckets readable");

    let changeset = board
        .service
        .move_task(b_id, TaskStatus::Pending, 1)
        .await
        .expect("no-op move succeeds");

    assert!(changeset.is_empty());
    assert_eq!(board.service.buckets().expect("buckets readable"), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_an_unknown_task_is_rejected_synchronously(board: Board) {
    board.service.load(board.project_id).await.expect("load succeeds");
    let before = board.service.buckets().expect("buckets readable");

    let result = board
        .service
        .move_task(TaskId::new(), TaskStatus::Pending, 0)
        .await;

    assert!(matches!(result, Err(BoardError::Domain(_))));
    assert_eq!(board.service.buckets().expect("buckets readable"), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_projects_replaces_the_snapshot(board: Board) {
    board.service.load(board.project_id).await.expect("load succeeds");

    let other_project = ProjectId::new();
    board
        .gateway
        .seed(vec![record(other_project, TaskStatus::Pending, 0, "Z")])
        .expect("seeding succeeds");

    board.service.load(other_project).await.expect("switch succeeds");

    assert_eq!(board.service.project().expect("loaded"), other_project);
    assert_eq!(board.service.task_count().expect("count readable"), 1);
    let pending = board
        .service
        .get_bucket(TaskStatus::Pending)
        .expect("bucket readable");
    assert_eq!(titles(&pending), ["Z"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlapping_moves_settle_to_a_dense_arrangement(board: Board) {
    board.service.load(board.project_id).await.expect("load succeeds");
    let a_id = *board.ids.first().expect("seeded id");
    let c_id = *board.ids.get(2).expect("seeded id");

    // Both moves renumber the in-progress bucket; the reconciler queues
    // the second behind the first instead of letting the writes race.
    let (first, second) = tokio::join!(
        board.service.move_task(a_id, TaskStatus::InProgress, 0),
        board.service.move_task(c_id, TaskStatus::InProgress, 0),
    );
    first.expect("first move persists");
    second.expect("second move persists");

    assert_eq!(board.service.task_count().expect("count readable"), 4);
    let in_progress = board
        .service
        .get_bucket(TaskStatus::InProgress)
        .expect("bucket readable");
    let orders: Vec<u32> = in_progress.iter().map(TaskRecord::order).collect();
    assert_eq!(orders, [0, 1, 2]);

    // Remote truth matches the local arrangement.
    let refetched = BoardService::new(Arc::new(board.gateway.clone()), Arc::new(DefaultClock));
    refetched.load(board.project_id).await.expect("reload succeeds");
    assert_eq!(
        titles(&refetched.get_bucket(TaskStatus::InProgress).expect("bucket readable")),
        titles(&in_progress),
    );
}
