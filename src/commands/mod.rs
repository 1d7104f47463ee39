//! Command implementations
//!
//! - `porcelain`: the user-facing workflows (init, add, remove, save, status, checkout, log)
//!
//! Each command is an `impl Repository` block. Commands write their report to
//! the repository writer and return the data they produced.

pub mod porcelain;
