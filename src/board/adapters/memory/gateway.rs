//! In-memory task gateway for board engine tests.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ProjectId, TaskId, TaskRecord},
    ports::{TaskGateway, TaskGatewayError, TaskGatewayResult, TaskPatch},
};

/// Thread-safe in-memory task store with scripted failure injection.
///
/// Serves as the deterministic fake behind the board engine's tests:
/// seeded records behave like remote truth, and failures can be queued
/// to exercise the revert path.
#[derive(Clone)]
pub struct InMemoryTaskGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Default)]
struct InMemoryGatewayState {
    tasks: HashMap<TaskId, TaskRecord>,
    update_failures: VecDeque<TaskGatewayError>,
    list_failures: VecDeque<TaskGatewayError>,
    sticky_failures: HashMap<TaskId, TaskGatewayError>,
}

impl InMemoryTaskGateway {
    /// Creates an empty gateway using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty gateway stamping server timestamps from the
    /// given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryGatewayState::default())),
            clock,
        }
    }

    /// Seeds the store with task records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Internal`] when the store lock is
    /// poisoned.
    pub fn seed(&self, tasks: impl IntoIterator<Item = TaskRecord>) -> TaskGatewayResult<()> {
        let mut state = self.write_state()?;
        for task in tasks {
            state.tasks.insert(task.id(), task);
        }
        Ok(())
    }

    /// Removes a task, simulating concurrent deletion by another actor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Internal`] when the store lock is
    /// poisoned.
    pub fn remove(&self, task_id: TaskId) -> TaskGatewayResult<()> {
        let mut state = self.write_state()?;
        state.tasks.remove(&task_id);
        Ok(())
    }

    /// Queues an error for the next `update_task` call, whichever task
    /// it targets.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Internal`] when the store lock is
    /// poisoned.
    pub fn fail_next_update(&self, error: TaskGatewayError) -> TaskGatewayResult<()> {
        let mut state = self.write_state()?;
        state.update_failures.push_back(error);
        Ok(())
    }

    /// Queues an error for the next `list_tasks` call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Internal`] when the store lock is
    /// poisoned.
    pub fn fail_next_list(&self, error: TaskGatewayError) -> TaskGatewayResult<()> {
        let mut state = self.write_state()?;
        state.list_failures.push_back(error);
        Ok(())
    }

    /// Makes every `update_task` call targeting the given task fail.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Internal`] when the store lock is
    /// poisoned.
    pub fn fail_updates_for(
        &self,
        task_id: TaskId,
        error: TaskGatewayError,
    ) -> TaskGatewayResult<()> {
        let mut state = self.write_state()?;
        state.sticky_failures.insert(task_id, error);
        Ok(())
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Internal`] when the store lock is
    /// poisoned.
    pub fn task_count(&self) -> TaskGatewayResult<usize> {
        let state = self.read_state()?;
        Ok(state.tasks.len())
    }

    fn write_state(
        &self,
    ) -> TaskGatewayResult<std::sync::RwLockWriteGuard<'_, InMemoryGatewayState>> {
        self.state
            .write()
            .map_err(|err| TaskGatewayError::internal(std::io::Error::other(err.to_string())))
    }

    fn read_state(
        &self,
    ) -> TaskGatewayResult<std::sync::RwLockReadGuard<'_, InMemoryGatewayState>> {
        self.state
            .read()
            .map_err(|err| TaskGatewayError::internal(std::io::Error::other(err.to_string())))
    }
}

impl Default for InMemoryTaskGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryTaskGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTaskGateway").finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn list_tasks(&self, project_id: ProjectId) -> TaskGatewayResult<Vec<TaskRecord>> {
        let mut state = self.write_state()?;
        if let Some(error) = state.list_failures.pop_front() {
            return Err(error);
        }
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskGatewayResult<TaskRecord> {
        let mut state = self.write_state()?;
        if let Some(error) = state.update_failures.pop_front() {
            return Err(error);
        }
        if let Some(error) = state.sticky_failures.get(&id) {
            return Err(error.clone());
        }

        let timestamp = self.clock.utc();
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskGatewayError::StaleTask(id))?;
        let status = patch.status.unwrap_or_else(|| task.status());
        let order = patch.order.unwrap_or_else(|| task.order());
        task.relocate(status, order, &DefaultClock);
        // The whole update carries the moment the gateway accepted it.
        task.restamp(timestamp);
        Ok(task.clone())
    }
}
