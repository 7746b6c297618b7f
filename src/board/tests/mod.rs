//! Unit tests for the board engine.

mod bucket_tests;
mod service_tests;
