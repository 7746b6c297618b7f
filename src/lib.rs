//! Trellis: task board ordering and reconciliation engine.
//!
//! This crate backs a kanban-style task view: it keeps an ordered,
//! status-partitioned collection of task records, applies drag-end moves
//! to local state immediately, persists them asynchronously through a
//! gateway to the remote task store, and reverts wholesale when a write
//! fails.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure ordering logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote task store
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: The board surface consumed by the task view
//!
//! # Modules
//!
//! - [`board`]: Ordered task buckets, the move algorithm, and the
//!   optimistic-apply/confirm/revert protocol

pub mod board;
