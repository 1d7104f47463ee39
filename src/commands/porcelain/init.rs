use crate::areas::refs::RefName;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create the store layout, leaving an existing repository untouched
    pub async fn init(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            writeln!(self.writer(), "Repository already initialized.")?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create the objects directory")?;

        fs::write(self.index_path(), b"").context("Failed to create the index file")?;

        for name in [RefName::Head, RefName::Latest] {
            self.refs()
                .create_empty(name)
                .with_context(|| format!("Failed to create the {name} reference"))?;
        }

        writeln!(
            self.writer(),
            "Initialized empty pit repository in {}",
            self.store_path().display()
        )?;

        Ok(())
    }
}
