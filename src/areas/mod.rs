//! Persisted areas of a repository
//!
//! - `database`: content-addressed object store (file blobs and save points)
//! - `index`: staging table for the next save point
//! - `refs`: the HEAD and LATEST pointers
//! - `repository`: root handle owning every area
//! - `workspace`: working tree scan, reads and restores

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
