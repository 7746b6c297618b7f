//! Gateway port for the remote task store.
//!
//! The gateway is the only sanctioned channel between the board engine
//! and the remote store. Both operations are asynchronous and fallible,
//! and implementations give no ordering guarantee across concurrent
//! invocations; the reconciler serializes writes per bucket on top of
//! this contract.

use crate::board::domain::{ProjectId, TaskId, TaskRecord, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Partial update of a task's ordering fields.
///
/// Descriptive fields travel through the excluded create/edit flow; the
/// board engine only ever patches `status` and `order`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New status bucket, when the move crossed buckets.
    pub status: Option<TaskStatus>,
    /// New position within the bucket.
    pub order: Option<u32>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            order: None,
        }
    }

    /// Sets the status field.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the order field.
    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

/// Remote task store contract.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Returns the full task listing for a project.
    ///
    /// Used on mount, on project switch, and for the wholesale revert
    /// after a failed write.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskGatewayError`] when the listing cannot be
    /// fetched.
    async fn list_tasks(&self, project_id: ProjectId) -> TaskGatewayResult<Vec<TaskRecord>>;

    /// Applies a partial update to one task and returns the updated
    /// record as the server now sees it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::StaleTask`] when the task no longer
    /// exists remotely, [`TaskGatewayError::Rejected`] when the remote
    /// refuses the update, or [`TaskGatewayError::Network`] on transport
    /// failure.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskGatewayResult<TaskRecord>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// Transient transport failure; the write may or may not have
    /// landed.
    #[error("network failure: {0}")]
    Network(String),

    /// The remote store refused the update.
    #[error("update rejected: {reason}")]
    Rejected {
        /// Remote-supplied rejection reason, for user messaging.
        reason: String,
    },

    /// The task no longer exists remotely (deleted by another actor).
    #[error("stale task: {0}")]
    StaleTask(TaskId),

    /// Adapter-level failure.
    #[error("gateway failure: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGatewayError {
    /// Wraps an adapter-level error.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}
