//! Application services orchestrating the board domain over its ports.

mod board;
mod reconciler;

pub use board::{BoardError, BoardResult, BoardService};
pub use reconciler::Reconciler;
