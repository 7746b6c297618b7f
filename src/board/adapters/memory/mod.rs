//! In-memory adapter implementations.

mod gateway;

pub use gateway::InMemoryTaskGateway;
