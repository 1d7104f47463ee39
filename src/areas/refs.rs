//! Save point references (HEAD, LATEST)
//!
//! Two single-value pointers name save points:
//! - HEAD: the save point currently checked out, parent of the next save
//! - LATEST: the most recently created save point
//!
//! ## File Format
//!
//! Each reference is a file in the store directory holding the raw fingerprint
//! bytes, or nothing when no save point exists yet. Writes go through a temp
//! file and a rename, so a reader sees either the old or the new value.

use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};
use fake::rand;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the HEAD (current) reference file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the LATEST reference file
pub const LATEST_REF_NAME: &str = "LATEST";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefName {
    Head,
    Latest,
}

impl RefName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefName::Head => HEAD_REF_NAME,
            RefName::Latest => LATEST_REF_NAME,
        }
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage seam for reference pointers
///
/// Implementations must be cheap to clone: both pointers are written from
/// separate blocking tasks when a save point is created.
pub trait RefStore: Clone + Send + Sync + 'static {
    /// Read a pointer, `None` when it is missing or empty
    fn read_ref(&self, name: RefName) -> Result<Option<Fingerprint>>;

    /// Replace a pointer atomically
    fn write_ref(&self, name: RefName, fingerprint: &Fingerprint) -> Result<()>;
}

/// File-backed references living in the store directory
#[derive(Debug, Clone)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    pub fn ref_path(&self, name: RefName) -> PathBuf {
        self.path.join(name.as_str())
    }

    pub fn head_path(&self) -> PathBuf {
        self.ref_path(RefName::Head)
    }

    pub fn latest_path(&self) -> PathBuf {
        self.ref_path(RefName::Latest)
    }

    pub fn read_head(&self) -> Result<Option<Fingerprint>> {
        self.read_ref(RefName::Head)
    }

    pub fn read_latest(&self) -> Result<Option<Fingerprint>> {
        self.read_ref(RefName::Latest)
    }

    pub fn update_head(&self, fingerprint: &Fingerprint) -> Result<()> {
        self.write_ref(RefName::Head, fingerprint)
    }

    /// Create an empty reference file, used when initializing a repository
    pub fn create_empty(&self, name: RefName) -> Result<()> {
        std::fs::write(self.ref_path(name), b"").map_err(|source| Error::ReferenceWrite {
            reference: name,
            source,
        })
    }
}

impl RefStore for Refs {
    fn read_ref(&self, name: RefName) -> Result<Option<Fingerprint>> {
        let content = match std::fs::read_to_string(self.ref_path(name)) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ReferenceRead {
                    reference: name,
                    source,
                });
            }
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Fingerprint::try_parse(content).map(Some)
    }

    fn write_ref(&self, name: RefName, fingerprint: &Fingerprint) -> Result<()> {
        let ref_path = self.ref_path(name);
        let temp_path = self
            .path
            .join(format!("{}.tmp-{}", name.as_str(), rand::random::<u32>()));
        let reference_error = |source| Error::ReferenceWrite {
            reference: name,
            source,
        };

        std::fs::write(&temp_path, fingerprint.as_str().as_bytes()).map_err(reference_error)?;
        std::fs::rename(&temp_path, &ref_path).map_err(|source| {
            let _ = std::fs::remove_file(&temp_path);
            reference_error(source)
        })?;

        debug!(reference = %name, %fingerprint, "updated reference");

        Ok(())
    }
}
