use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Fingerprint of every file in the working tree, keyed by relative path
pub type WorkingTree = BTreeMap<PathBuf, Fingerprint>;

#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
    /// Top-level directory names never scanned (the store itself, `.git`)
    ignored: Vec<String>,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignored: Vec<String>) -> Self {
        Workspace { path, ignored }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        match relative_path.components().next() {
            Some(Component::Normal(name)) => {
                let name = name.to_string_lossy();
                self.ignored.iter().any(|ignored| ignored.as_str() == name)
            }
            _ => false,
        }
    }

    fn is_ignored_entry(&self, entry: &DirEntry) -> bool {
        entry
            .path()
            .strip_prefix(&self.path)
            .map(|relative| self.is_ignored(relative))
            .unwrap_or(false)
    }

    /// Spell a user-supplied path relative to the root, `.` and `..` resolved
    ///
    /// The path does not have to exist. The root itself comes back empty.
    pub fn relative_path(&self, file_path: &Path) -> anyhow::Result<PathBuf> {
        let mut normalized = PathBuf::new();
        for component in self.path.join(file_path).components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                component => normalized.push(component),
            }
        }

        normalized
            .strip_prefix(&self.path)
            .map(Path::to_path_buf)
            .with_context(|| format!("{:?} is outside the repository", file_path))
    }

    /// Expand a file or directory into the files below it, relative to the root
    ///
    /// `root_file_path` may be absolute or relative to the workspace root.
    pub fn list_files(&self, root_file_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let relative_path = self.relative_path(root_file_path)?;
        let root_file_path = self
            .path
            .join(&relative_path)
            .canonicalize()
            .with_context(|| format!("The specified path does not exist: {:?}", root_file_path))?;

        let relative_root = root_file_path
            .strip_prefix(&self.path)
            .with_context(|| format!("{:?} is outside the repository", root_file_path))?;

        if self.is_ignored(relative_root) {
            return Ok(Vec::new());
        }

        if !root_file_path.is_dir() {
            return Ok(vec![relative_root.to_path_buf()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored_entry(entry))
        {
            let entry = entry.with_context(|| {
                format!("Unable to list files under {}", root_file_path.display())
            })?;

            if entry.file_type().is_file()
                && let Ok(relative) = entry.path().strip_prefix(&self.path)
            {
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Hash every file of the working tree
    ///
    /// Files that cannot be read are left out of the result; a failure to walk
    /// the tree itself aborts the scan.
    pub fn scan(&self) -> Result<WorkingTree> {
        let mut working_tree = WorkingTree::new();

        for entry in WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored_entry(entry))
        {
            let entry = entry.map_err(|source| Error::WorkingTreeScan {
                path: self.path.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.path) else {
                continue;
            };

            match std::fs::read(entry.path()) {
                Ok(content) => {
                    working_tree.insert(relative.to_path_buf(), Fingerprint::of(&content));
                }
                Err(err) => debug!(path = %relative.display(), %err, "skipping unreadable file"),
            }
        }

        Ok(working_tree)
    }

    pub fn read_file(&self, file_path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.path.join(file_path))
    }

    /// Overwrite a working tree file with `content`
    ///
    /// Parent directories are not created: restoring into a directory that no
    /// longer exists fails.
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> Result<()> {
        let path = self.path.join(file_path);

        std::fs::write(&path, content).map_err(|source| {
            warn!(path = %file_path.display(), %source, "unable to restore file");
            Error::WorkingTreeWrite {
                path: file_path.to_path_buf(),
                source,
            }
        })
    }
}
