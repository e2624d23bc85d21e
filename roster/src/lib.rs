//! Interactive employee roster persisted to a single local file.
//!
//! The crate keeps the same split as the rest of the tool:
//!
//! - **[`core`]**: Pure, deterministic operations over in-memory records
//!   (add, remove, search, update, sort). No I/O.
//! - **[`io`]**: Side effects (config file, roster data file, console prompts).
//!
//! [`store`] couples core operations with persistence, and [`dispatch`] drives
//! the numbered menu on top of a store.

pub mod core;
pub mod dispatch;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod record;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
