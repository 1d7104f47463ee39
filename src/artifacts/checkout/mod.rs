//! Checkout of a save point into the working tree
//!
//! - `target`: parsing and resolving the save point selector (`latest` or a fingerprint)
//! - `migration`: restoring every file of the selected save point
//!
//! Restoring is not transactional. Files are written one at a time in path
//! order and the first failure aborts, leaving already restored files in place.
//! Files that are not part of the save point are never touched.

pub mod migration;
pub mod target;
