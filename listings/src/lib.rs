//! Property listing report: filter a listing export by state and bathroom
//! count, then summarize price statistics.
//!
//! The crate keeps the same split throughout:
//!
//! - **[`core`]**: Pure logic (argument validation, filtering, aggregation,
//!   formatting). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (reading the listing file,
//!   loading configuration).
//!
//! [`report`] wires the two together to implement the CLI command.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
