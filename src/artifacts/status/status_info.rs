use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::areas::workspace::WorkingTree;
use crate::artifacts::log::chain::read_save_point;
use crate::artifacts::objects::save_point::FileTable;
use crate::artifacts::status::file_change::DeletedFrom;
use crate::errors::Result;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::{debug, warn};

pub type FileSet = BTreeSet<PathBuf>;
pub type DeletedSet = BTreeMap<PathBuf, DeletedFrom>;

/// Classified view of the repository, every set sorted by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) staged: FileSet,
    pub(crate) modified: FileSet,
    pub(crate) untracked: FileSet,
    pub(crate) deleted: DeletedSet,
}

impl StatusInfo {
    /// Partition paths by comparing the index, the last saved table and the working tree
    pub fn classify(index: &Index, saved: &FileTable, working_tree: &WorkingTree) -> Self {
        let mut status = StatusInfo::default();

        for (path, fingerprint) in index.entries() {
            if saved.get(path) != Some(fingerprint) {
                status.staged.insert(path.clone());
            }

            match working_tree.get(path) {
                Some(current) if current != fingerprint => {
                    status.modified.insert(path.clone());
                }
                Some(_) => {}
                None => {
                    status.deleted.insert(path.clone(), DeletedFrom::WasStaged);
                }
            }
        }

        // a path both staged and saved is reported once, as saved
        for path in saved.keys().filter(|path| !working_tree.contains_key(*path)) {
            status.deleted.insert(path.clone(), DeletedFrom::WasSaved);
        }

        status.untracked = working_tree
            .keys()
            .filter(|path| index.entry_by_path(path).is_none() && !saved.contains_key(*path))
            .cloned()
            .collect();

        status
    }

    pub fn staged(&self) -> &FileSet {
        &self.staged
    }

    pub fn modified(&self) -> &FileSet {
        &self.modified
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked
    }

    pub fn deleted(&self) -> &DeletedSet {
        &self.deleted
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.modified.is_empty()
            && self.untracked.is_empty()
            && self.deleted.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Gather the three inputs concurrently, then classify
    ///
    /// The index read and the working tree scan are required; the first of
    /// them to fail (index first) fails the whole status. A save point that
    /// cannot be read is logged and counts as an empty table.
    pub async fn initialize(&self) -> Result<StatusInfo> {
        let index_path = self.repository.index_path().to_path_buf();
        let load_index = tokio::task::spawn_blocking(move || {
            let mut index = Index::new(index_path.into_boxed_path());
            index.load().map(|()| index)
        });

        let database = self.repository.database().clone();
        let refs = self.repository.refs().clone();
        let load_saved = tokio::task::spawn_blocking(move || load_saved_files(&database, &refs));

        let workspace = self.repository.workspace().clone();
        let scan_workspace = tokio::task::spawn_blocking(move || workspace.scan());

        let (index, saved, working_tree) = tokio::join!(load_index, load_saved, scan_workspace);

        let index = index??;
        let working_tree = working_tree??;
        let saved = saved?;

        debug!(
            staged = index.len(),
            saved = saved.len(),
            working = working_tree.len(),
            "gathered status inputs"
        );

        Ok(StatusInfo::classify(&index, &saved, &working_tree))
    }
}

fn load_saved_files(database: &Database, refs: &Refs) -> FileTable {
    let head = match refs.read_head() {
        Ok(Some(head)) => head,
        Ok(None) => return FileTable::new(),
        Err(err) => {
            warn!("{err}, treating the working tree as never saved");
            return FileTable::new();
        }
    };

    match read_save_point(database, &head) {
        Ok(save_point) => save_point.into_files(),
        Err(err) => {
            warn!(save_point = %head, "{err}, treating the working tree as never saved");
            FileTable::new()
        }
    }
}
