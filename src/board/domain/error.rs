//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors raised by board domain operations before any state mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The referenced task does not exist in the board snapshot.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The referenced task belongs to a different project than the board.
    #[error("task {task_id} belongs to another project")]
    ForeignTask {
        /// Identifier of the offending task.
        task_id: TaskId,
    },
}

/// Error returned while parsing task statuses from storage strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
