//! Error taxonomy for the snapshot store
//!
//! Every area (object database, index, refs, workspace) reports failures through
//! [`Error`]. Nothing is retried: an I/O failure is reported once and the
//! operation that hit it aborts, possibly leaving earlier writes in place.

use crate::areas::refs::RefName;
use crate::artifacts::objects::fingerprint::Fingerprint;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to write object file {}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read object file {}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("object {0} not found")]
    ObjectNotFound(Fingerprint),

    #[error("save point {0} not found")]
    SavePointNotFound(Fingerprint),

    #[error("save point {fingerprint} is malformed")]
    MalformedSavePoint {
        fingerprint: Fingerprint,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to encode save point")]
    SavePointEncode(#[source] serde_json::Error),

    #[error("unable to read reference {reference}")]
    ReferenceRead {
        reference: RefName,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write reference {reference}")]
    ReferenceWrite {
        reference: RefName,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read index file {}", path.display())]
    IndexRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write index file {}", path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to scan working tree at {}", path.display())]
    WorkingTreeScan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("unable to restore {}", path.display())]
    WorkingTreeWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fingerprint: {0:?}")]
    InvalidFingerprint(String),

    #[error("no files have been added")]
    EmptyIndex,

    #[error("no save points yet")]
    NoSavePoints,

    #[error("background task failed")]
    Task(#[from] tokio::task::JoinError),
}
