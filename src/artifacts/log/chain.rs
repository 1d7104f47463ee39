use crate::areas::database::Database;
use crate::areas::refs::{RefName, RefStore};
use crate::artifacts::log::history::HistoryWalk;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::save_point::SavePoint;
use crate::errors::Result;
use derive_new::new;
use tracing::{debug, error};

/// Save point chain over an object database and a reference store
#[derive(Debug, Clone, new)]
pub struct Chain<'r, R: RefStore> {
    database: &'r Database,
    refs: R,
}

impl<'r, R: RefStore> Chain<'r, R> {
    /// Serialize, fingerprint and store a save point
    pub fn persist(&self, save_point: &SavePoint) -> Result<Fingerprint> {
        let content = save_point.serialize()?;
        let fingerprint = self.database.store(&content)?;

        debug!(%fingerprint, files = save_point.files().len(), "persisted save point");

        Ok(fingerprint)
    }

    pub fn read(&self, fingerprint: &Fingerprint) -> Result<SavePoint> {
        read_save_point(self.database, fingerprint)
    }

    /// Point both HEAD and LATEST at `fingerprint`
    ///
    /// The two writes run concurrently and are not rolled back: when one fails
    /// the other may already be in place, and the references then disagree.
    pub async fn advance_references(&self, fingerprint: &Fingerprint) -> Result<()> {
        let write = |name: RefName| {
            let refs = self.refs.clone();
            let fingerprint = fingerprint.clone();
            tokio::task::spawn_blocking(move || refs.write_ref(name, &fingerprint))
        };

        let (head, latest) = tokio::join!(write(RefName::Head), write(RefName::Latest));

        match (head?, latest?) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(err), Ok(())) | (Ok(()), Err(err)) => {
                error!(%fingerprint, %err, "only one reference was updated, HEAD and LATEST now disagree");
                Err(err)
            }
            (Err(err), Err(_)) => Err(err),
        }
    }

    /// Lazily walk the chain from `start` to the root
    pub fn walk_history(&self, start: Option<Fingerprint>) -> HistoryWalk<'r> {
        HistoryWalk::new(self.database, start)
    }
}

pub(crate) fn read_save_point(database: &Database, fingerprint: &Fingerprint) -> Result<SavePoint> {
    let content = database.get(fingerprint)?;

    SavePoint::deserialize(fingerprint, &content)
}
