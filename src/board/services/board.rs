//! Board service: lifecycle, read view, and the move entry point.

use crate::board::{
    domain::{
        plan_move, BoardDomainError, BoardSnapshot, BucketIndex, ChangeSet, ProjectId, TaskId,
        TaskRecord, TaskStatus,
    },
    ports::{TaskGateway, TaskGatewayError},
};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use super::Reconciler;

/// Errors surfaced by the board service.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Local precondition violation, rejected before any state mutation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// A gateway call outside the move path failed (initial load or
    /// explicit reload).
    #[error(transparent)]
    Gateway(#[from] TaskGatewayError),

    /// No project has been loaded onto the board yet.
    #[error("board is not loaded")]
    NotLoaded,

    /// A move's remote writes failed; the board was reverted to a fresh
    /// remote snapshot and the in-flight reorder was discarded.
    #[error("move reverted after gateway failure")]
    MoveReverted {
        /// The gateway failure that triggered the revert, for user
        /// messaging (network vs. rejection vs. stale task).
        #[source]
        source: TaskGatewayError,
    },

    /// The revert refetch itself failed; the optimistic state was kept
    /// so the caller can retry with `reload`.
    #[error("revert refetch failed")]
    RevertFailed {
        /// The refetch failure.
        #[source]
        source: TaskGatewayError,
    },

    /// The board state lock was poisoned.
    #[error("board state lock poisoned: {0}")]
    StatePoisoned(String),
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// The task board engine's single public surface.
///
/// Holds the optimistic in-memory snapshot behind one write lock: a
/// move mutates it synchronously (readers see pre-move or post-move
/// state, never a partial renumbering), then persistence runs
/// asynchronously through the [`Reconciler`]. On any write failure the
/// snapshot is discarded and rebuilt from a fresh listing.
///
/// Each move passes through `applied -> confirmed` or
/// `applied -> reverted`; the service keeps no per-move state across
/// operations, only the snapshot persists.
pub struct BoardService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    reconciler: Reconciler<G>,
    state: RwLock<Option<BoardSnapshot>>,
}

impl<G, C> BoardService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    /// Creates an unloaded board service.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        let reconciler = Reconciler::new(Arc::clone(&gateway));
        Self {
            gateway,
            clock,
            reconciler,
            state: RwLock::new(None),
        }
    }

    /// Loads (or switches to) a project, replacing any existing
    /// snapshot wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the listing fails or
    /// [`BoardError::Domain`] when the listing contains a task from
    /// another project.
    pub async fn load(&self, project_id: ProjectId) -> BoardResult<()> {
        let tasks = self.gateway.list_tasks(project_id).await?;
        let snapshot = BoardSnapshot::from_remote(project_id, tasks)?;
        *self.write_state()? = Some(snapshot);
        Ok(())
    }

    /// Refetches the active project and replaces the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] when no project is active, or
    /// the same errors as [`BoardService::load`].
    pub async fn reload(&self) -> BoardResult<()> {
        let project_id = self.project()?;
        self.load(project_id).await
    }

    /// Returns the active project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] when no project is active.
    pub fn project(&self) -> BoardResult<ProjectId> {
        let state = self.read_state()?;
        state
            .as_ref()
            .map(BoardSnapshot::project_id)
            .ok_or(BoardError::NotLoaded)
    }

    /// Returns the ordered tasks of one status bucket.
    ///
    /// The returned records are clones; mutating them has no effect on
    /// the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] when no project is active.
    pub fn get_bucket(&self, status: TaskStatus) -> BoardResult<Vec<TaskRecord>> {
        let state = self.read_state()?;
        let snapshot = state.as_ref().ok_or(BoardError::NotLoaded)?;
        let index = BucketIndex::build(snapshot.tasks());
        Ok(resolve(snapshot, index.bucket(status)))
    }

    /// Returns every bucket's ordered tasks, including empty buckets.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] when no project is active.
    pub fn buckets(&self) -> BoardResult<BTreeMap<TaskStatus, Vec<TaskRecord>>> {
        let state = self.read_state()?;
        let snapshot = state.as_ref().ok_or(BoardError::NotLoaded)?;
        let index = BucketIndex::build(snapshot.tasks());
        Ok(TaskStatus::ALL
            .iter()
            .map(|status| (*status, resolve(snapshot, index.bucket(*status))))
            .collect())
    }

    /// Looks up a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] when no project is active.
    pub fn task(&self, task_id: TaskId) -> BoardResult<Option<TaskRecord>> {
        let state = self.read_state()?;
        let snapshot = state.as_ref().ok_or(BoardError::NotLoaded)?;
        Ok(snapshot.task(task_id).cloned())
    }

    /// Returns the total task count across all buckets.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] when no project is active.
    pub fn task_count(&self) -> BoardResult<usize> {
        let state = self.read_state()?;
        let snapshot = state.as_ref().ok_or(BoardError::NotLoaded)?;
        Ok(snapshot.len())
    }

    /// Moves a task to a position in a status bucket.
    ///
    /// The move is applied to the local snapshot synchronously, then
    /// persisted through the reconciler. On success the server-assigned
    /// timestamps are adopted (never `status`/`order`) and the changeset
    /// is returned. A no-op move returns an empty changeset without
    /// touching the gateway.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] for unknown task ids (nothing
    /// mutated), [`BoardError::MoveReverted`] when a remote write failed
    /// and the board was rebuilt from a fresh listing, or
    /// [`BoardError::RevertFailed`] when that rebuild listing failed
    /// too.
    pub async fn move_task(
        &self,
        task_id: TaskId,
        destination: TaskStatus,
        destination_index: usize,
    ) -> BoardResult<ChangeSet> {
        let changeset = self.apply_optimistic(task_id, destination, destination_index)?;
        if changeset.is_empty() {
            return Ok(changeset);
        }

        match self.reconciler.persist(&changeset).await {
            Ok(confirmed) => {
                self.adopt_stamps(confirmed)?;
                Ok(changeset)
            }
            Err(cause) => {
                self.revert().await?;
                Err(BoardError::MoveReverted { source: cause })
            }
        }
    }

    /// Plans and applies a move under the write lock.
    fn apply_optimistic(
        &self,
        task_id: TaskId,
        destination: TaskStatus,
        destination_index: usize,
    ) -> BoardResult<ChangeSet> {
        let mut state = self.write_state()?;
        let snapshot = state.as_mut().ok_or(BoardError::NotLoaded)?;
        let changeset = plan_move(snapshot, task_id, destination, destination_index)?;
        snapshot.apply(&changeset, &*self.clock);
        Ok(changeset)
    }

    /// Adopts server-confirmed timestamps into the snapshot.
    fn adopt_stamps(&self, confirmed: Vec<TaskRecord>) -> BoardResult<()> {
        let mut state = self.write_state()?;
        if let Some(snapshot) = state.as_mut() {
            snapshot.restamp(
                confirmed
                    .into_iter()
                    .map(|task| (task.id(), task.updated_at())),
            );
        }
        Ok(())
    }

    /// Discards the optimistic snapshot and rebuilds it from a fresh
    /// listing.
    async fn revert(&self) -> BoardResult<()> {
        let project_id = self.project()?;
        let tasks = match self.gateway.list_tasks(project_id).await {
            Ok(tasks) => tasks,
            Err(source) => return Err(BoardError::RevertFailed { source }),
        };
        let snapshot = BoardSnapshot::from_remote(project_id, tasks)?;
        *self.write_state()? = Some(snapshot);
        Ok(())
    }

    fn read_state(&self) -> BoardResult<RwLockReadGuard<'_, Option<BoardSnapshot>>> {
        self.state
            .read()
            .map_err(|err| BoardError::StatePoisoned(err.to_string()))
    }

    fn write_state(&self) -> BoardResult<RwLockWriteGuard<'_, Option<BoardSnapshot>>> {
        self.state
            .write()
            .map_err(|err| BoardError::StatePoisoned(err.to_string()))
    }
}

impl<G, C> std::fmt::Debug for BoardService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardService").finish_non_exhaustive()
    }
}

/// Resolves ordered bucket ids to cloned records.
fn resolve(snapshot: &BoardSnapshot, ids: &[TaskId]) -> Vec<TaskRecord> {
    ids.iter()
        .filter_map(|id| snapshot.task(*id).cloned())
        .collect()
}
