//! Domain model for the task board ordering engine.
//!
//! Pure types and logic only: ordered status buckets, the board
//! snapshot, and the move-planning algorithm, with no infrastructure
//! concerns inside the domain boundary.

mod board;
mod buckets;
mod change;
mod details;
mod error;
mod ids;
mod moves;
mod status;
mod task;

pub use board::BoardSnapshot;
pub use buckets::BucketIndex;
pub use change::{ChangeSet, TaskPlacement};
pub use details::{TaskDetails, TaskPriority};
pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use moves::plan_move;
pub use status::TaskStatus;
pub use task::TaskRecord;
