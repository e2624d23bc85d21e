//! Stable exit codes for the roster CLI.

/// Session ended normally.
pub const OK: i32 = 0;
/// Startup failed (unreadable config, console I/O error, or similar).
pub const INVALID: i32 = 1;
