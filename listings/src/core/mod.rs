//! Deterministic, pure logic for the listing report.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! listings and return deterministic outputs suitable for tests.

pub mod accumulator;
pub mod criteria;
pub mod currency;
pub mod listing;
pub mod summary;
