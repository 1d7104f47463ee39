use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use std::path::{Path, PathBuf};
use tracing::warn;

impl Repository {
    /// Stage files, expanding directories recursively
    ///
    /// Paths that cannot be staged are reported and skipped, the remaining
    /// files are still staged. The index is written once at the end.
    pub async fn add(&self, paths: &[PathBuf]) -> anyhow::Result<Vec<(PathBuf, Fingerprint)>> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.load()?;

        let files = paths
            .iter()
            .filter_map(|path| match self.workspace().list_files(path) {
                Ok(files) => Some(files),
                Err(err) => {
                    warn!(path = %path.display(), "{err:#}, skipping");
                    None
                }
            })
            .flatten()
            .collect::<Vec<_>>();

        let mut added = Vec::with_capacity(files.len());
        for file in files {
            // index lines are UTF-8 text
            if file.to_str().is_none() {
                warn!(path = %file.display(), "path is not valid UTF-8, skipping");
                continue;
            }

            let Some(fingerprint) = self.stage_file(&file)? else {
                continue;
            };

            index.stage(file.clone(), fingerprint.clone());
            writeln!(
                self.writer(),
                "Added {} (fingerprint: {})",
                file.display(),
                fingerprint
            )?;
            added.push((file, fingerprint));
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(added)
    }

    /// Store the content of one file, `None` when it cannot be read
    fn stage_file(&self, file: &Path) -> anyhow::Result<Option<Fingerprint>> {
        let content = match self.workspace().read_file(file) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %file.display(), %err, "unable to read file, skipping");
                return Ok(None);
            }
        };

        Ok(Some(self.database().store(&content)?))
    }
}
