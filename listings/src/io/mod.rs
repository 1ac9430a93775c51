//! I/O helpers for the listing report.

pub mod config;
pub mod reader;
