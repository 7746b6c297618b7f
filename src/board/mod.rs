//! Task board ordering and reconciliation engine.
//!
//! Maintains an ordered, status-partitioned collection of task records
//! for one project at a time. A move is applied to the local snapshot
//! immediately (optimistic update) and persisted asynchronously; on any
//! persistence failure the snapshot is discarded and rebuilt from a
//! fresh remote listing rather than patched. After every completed move
//! each bucket's `order` values form a gapless `0..n-1` sequence.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the move-planning algorithm in [`domain`]
//! - The remote store contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board service and reconciler in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
