//! Stable exit codes for the `listings` CLI.

/// Report printed.
pub const OK: i32 = 0;
/// Invalid command-line argument or configuration.
pub const INVALID: i32 = 1;
/// Input file missing, unreadable, or malformed.
pub const INPUT: i32 = 2;
