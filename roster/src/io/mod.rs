//! I/O helpers: configuration, the roster data file, and console prompts.

pub mod config;
pub mod console;
pub mod init;
pub mod roster_file;
