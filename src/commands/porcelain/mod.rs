//! Porcelain commands
//!
//! - `init`: create the store directory
//! - `add`: stage files and directories
//! - `remove`: unstage paths
//! - `save`: record the index as a new save point
//! - `status`: classify the working tree
//! - `checkout`: restore a save point
//! - `log`: walk the save point chain from HEAD

pub mod add;
pub mod checkout;
pub mod init;
pub mod log;
pub mod remove;
pub mod save;
pub mod status;
