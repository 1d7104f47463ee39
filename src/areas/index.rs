//! Staging index
//!
//! The index is the table of files that will make up the next save point. It
//! maps repository-relative paths to the fingerprint of their staged content.
//!
//! ## Index File Format
//!
//! Newline-delimited `<path> <fingerprint>` pairs, in staging order, without a
//! trailing newline. The path is everything before the last space, so paths
//! containing spaces round-trip. Lines that do not split into a path and a
//! valid fingerprint are skipped on load.
//!
//! The index carries no locking: one command runs against a repository at a time.

use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};
use fake::rand;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which entries `unstage` removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnstageSelector {
    /// Only the entry whose path equals this one exactly
    Path(PathBuf),
    /// Every entry
    All,
}

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.pit/index`)
    path: Box<Path>,
    /// Staged files in insertion order
    entries: IndexMap<PathBuf, Fingerprint>,
    /// Set when the in-memory table differs from what was loaded
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: IndexMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted table, replacing whatever is in memory
    ///
    /// A missing or empty index file is an empty index.
    pub fn load(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(Error::IndexRead {
                    path: self.path.to_path_buf(),
                    source,
                });
            }
        };

        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            match Self::parse_line(line) {
                Some((path, fingerprint)) => {
                    self.entries.insert(path, fingerprint);
                }
                None => debug!(line, "skipping malformed index line"),
            }
        }

        Ok(())
    }

    fn parse_line(line: &str) -> Option<(PathBuf, Fingerprint)> {
        let (path, fingerprint) = line.rsplit_once(' ')?;

        if path.is_empty() {
            return None;
        }

        Some((PathBuf::from(path), Fingerprint::try_parse(fingerprint).ok()?))
    }

    /// Upsert the entry for `path`
    ///
    /// A path that is already staged keeps its position and takes the new
    /// fingerprint; a new path is appended.
    pub fn stage(&mut self, path: PathBuf, fingerprint: Fingerprint) {
        self.entries.insert(path, fingerprint);
        self.changed = true;
    }

    /// Remove entries, a path that was never staged is not an error
    pub fn unstage(&mut self, selector: &UnstageSelector) {
        match selector {
            UnstageSelector::All => self.clear(),
            UnstageSelector::Path(path) => {
                if self.entries.shift_remove(path.as_path()).is_some() {
                    self.changed = true;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&Fingerprint> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &Fingerprint)> {
        self.entries.iter()
    }

    /// Persist the full table, replacing the index file in one rename
    pub fn write_updates(&mut self) -> Result<()> {
        let content = self
            .entries
            .iter()
            .map(|(path, fingerprint)| format!("{} {}", path.to_string_lossy(), fingerprint))
            .collect::<Vec<_>>()
            .join("\n");

        let index_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp_path = index_dir.join(format!("index.tmp-{}", rand::random::<u32>()));
        let index_error = |source| Error::IndexWrite {
            path: self.path.to_path_buf(),
            source,
        };

        std::fs::write(&temp_path, content).map_err(index_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = std::fs::remove_file(&temp_path);
            index_error(source)
        })?;

        debug!(entries = self.entries.len(), "index written");
        self.changed = false;

        Ok(())
    }
}
