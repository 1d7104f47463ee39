//! Working tree status
//!
//! Compares three tables keyed by relative path: the staging index, the file
//! table of the save point HEAD points at, and a fresh scan of the working tree.
//!
//! ## Components
//!
//! - `file_change`: change categories and their labels
//! - `status_info`: classification and the concurrent gathering of its inputs

pub mod file_change;
pub mod status_info;
