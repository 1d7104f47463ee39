use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append-only object database
///
/// Blobs are written once under their fingerprint and never updated or deleted.
#[derive(Debug, Clone)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.path.join(fingerprint.to_path())
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.object_path(fingerprint).is_file()
    }

    /// Persist `content` under `fingerprint`
    ///
    /// Writing an existing fingerprint again is a no-op: the content is identical
    /// by construction.
    pub fn put(&self, fingerprint: &Fingerprint, content: &[u8]) -> Result<()> {
        if self.contains(fingerprint) {
            debug!(%fingerprint, "object already stored");
            return Ok(());
        }

        self.write_object(&self.object_path(fingerprint), content)
    }

    /// Hash `content`, store it and return its fingerprint
    pub fn store(&self, content: &[u8]) -> Result<Fingerprint> {
        let fingerprint = Fingerprint::of(content);
        self.put(&fingerprint, content)?;

        Ok(fingerprint)
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Result<Bytes> {
        let object_path = self.object_path(fingerprint);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(fingerprint.clone()))
            }
            Err(source) => Err(Error::StorageRead {
                path: object_path,
                source,
            }),
        }
    }

    fn write_object(&self, object_path: &Path, content: &[u8]) -> Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());
        let storage_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| Error::StorageWrite { path, source }
        };

        // write to a temp file in the same directory, then rename to make it atomic
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .map_err(storage_error(&temp_object_path))?;

        file.write_all(content)
            .and_then(|_| file.sync_all())
            .map_err(storage_error(&temp_object_path))?;

        std::fs::rename(&temp_object_path, object_path).map_err(|source| {
            let _ = std::fs::remove_file(&temp_object_path);
            Error::StorageWrite {
                path: object_path.to_path_buf(),
                source,
            }
        })?;

        debug!(path = %object_path.display(), bytes = content.len(), "stored object");

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
