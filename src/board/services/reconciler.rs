//! Persistence reconciliation for optimistic board moves.

use crate::board::{
    domain::{ChangeSet, TaskRecord, TaskStatus},
    ports::{TaskGateway, TaskGatewayResult, TaskPatch},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Writes changesets to the gateway, one bucket at a time.
///
/// The gateway gives no ordering guarantee across concurrent calls, so
/// two overlapping moves that renumber the same bucket could stomp each
/// other's writes. The reconciler holds one async mutex per status
/// bucket and acquires the locks for every bucket a changeset touches,
/// in canonical status order, before issuing any write. Writes from a
/// later move that touches a busy bucket queue behind the in-flight
/// ones instead of racing them.
pub struct Reconciler<G>
where
    G: TaskGateway,
{
    gateway: Arc<G>,
    queues: HashMap<TaskStatus, Arc<Mutex<()>>>,
}

impl<G> Reconciler<G>
where
    G: TaskGateway,
{
    /// Creates a reconciler over the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        let queues = TaskStatus::ALL
            .iter()
            .map(|status| (*status, Arc::new(Mutex::new(()))))
            .collect();
        Self { gateway, queues }
    }

    /// Issues one `update_task` per placement and returns the
    /// server-confirmed records.
    ///
    /// The first failing write short-circuits the rest; partial-success
    /// recovery is the caller's wholesale revert, not this method's
    /// concern.
    ///
    /// # Errors
    ///
    /// Returns the first gateway error encountered.
    pub async fn persist(&self, changeset: &ChangeSet) -> TaskGatewayResult<Vec<TaskRecord>> {
        let touched = changeset.touched_buckets();
        let locks: Vec<Arc<Mutex<()>>> = touched
            .iter()
            .filter_map(|status| self.queues.get(status).cloned())
            .collect();
        let mut guards = Vec::with_capacity(locks.len());
        for lock in &locks {
            guards.push(lock.lock().await);
        }

        let mut confirmed = Vec::with_capacity(changeset.len());
        for placement in changeset {
            let patch = TaskPatch::new()
                .with_status(placement.status)
                .with_order(placement.order);
            let updated = self.gateway.update_task(placement.task_id, patch).await?;
            confirmed.push(updated);
        }
        Ok(confirmed)
    }
}

impl<G> std::fmt::Debug for Reconciler<G>
where
    G: TaskGateway,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler").finish_non_exhaustive()
    }
}
