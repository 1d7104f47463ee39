//! Data types and engines built on the areas
//!
//! - `checkout`: restoring a save point into the working tree
//! - `core`: shared output helpers (pager writer)
//! - `log`: save point chain and history walk
//! - `objects`: fingerprints and save point records
//! - `status`: working tree classification

pub mod checkout;
pub mod core;
pub mod log;
pub mod objects;
pub mod status;
