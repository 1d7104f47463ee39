use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::log::chain::Chain;
use crate::artifacts::status::status_info::Status;
use crate::config::Config;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub const OBJECTS_DIR: &str = "objects";
pub const INDEX_FILE: &str = "index";

/// Root handle of a repository, owning every area
pub struct Repository {
    path: Box<Path>,
    store_path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index_path: Box<Path>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    pub fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to open repository at {}", path.display()))?;
        let store_path = path.join(config.store_dir());

        let index_path = store_path.join(INDEX_FILE).into_boxed_path();
        let database = Database::new(store_path.join(OBJECTS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path(), config.ignored_dirs());
        let refs = Refs::new(store_path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            store_path: store_path.into_boxed_path(),
            writer: RefCell::new(writer),
            index_path,
            database,
            workspace,
            refs,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn is_initialized(&self) -> bool {
        self.store_path.is_dir()
    }

    /// Fail unless `init` has created the store directory
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            anyhow::bail!(
                "not a pit repository (no {} directory in {})",
                self.config.store_dir(),
                self.path.display()
            );
        }

        Ok(())
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Fresh, unloaded handle on the staging index
    pub fn index(&self) -> Index {
        Index::new(self.index_path.clone())
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chain(&'_ self) -> Chain<'_, Refs> {
        Chain::new(&self.database, self.refs.clone())
    }

    pub fn status_engine(&'_ self) -> Status<'_> {
        Status::new(self)
    }
}
