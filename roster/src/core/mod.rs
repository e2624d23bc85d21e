//! Deterministic, pure logic over the in-memory roster.
//!
//! Core modules must be free of I/O side effects. They operate on slices and
//! vectors of records and return outcome values suitable for tests.

pub mod edit;
pub mod search;
pub mod sort;
pub mod types;
