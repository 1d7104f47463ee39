//! Save point chain and history traversal
//!
//! - `chain`: persisting and reading save points, moving the references
//! - `history`: lazy walk along parent links, used by `log`
//!
//! The chain is a singly linked list: every save point has at most one parent,
//! and the walk stops at the root (empty parent).

pub mod chain;
pub mod history;
