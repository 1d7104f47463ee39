use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::log::chain::read_save_point;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::save_point::SavePoint;
use crate::errors::{Error, Result};
use tracing::debug;

/// Restores the file table of one save point into the working tree
pub struct Migration<'r> {
    database: &'r Database,
    workspace: &'r Workspace,
    fingerprint: Fingerprint,
    save_point: SavePoint,
}

impl<'r> Migration<'r> {
    /// Load the save point to restore
    ///
    /// A fingerprint with no object behind it is reported as a missing save
    /// point rather than a missing object.
    pub fn load(
        database: &'r Database,
        workspace: &'r Workspace,
        fingerprint: Fingerprint,
    ) -> Result<Self> {
        let save_point = read_save_point(database, &fingerprint).map_err(|err| match err {
            Error::ObjectNotFound(missing) => Error::SavePointNotFound(missing),
            err => err,
        })?;

        Ok(Migration {
            database,
            workspace,
            fingerprint,
            save_point,
        })
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Overwrite every file of the save point, in path order
    ///
    /// Returns the number of restored files. The first blob or file that
    /// cannot be processed aborts the migration.
    pub fn apply_changes(&self) -> Result<usize> {
        for (path, fingerprint) in self.save_point.files() {
            let content = self.database.get(fingerprint)?;
            self.workspace.write_file(path, &content)?;

            debug!(path = %path.display(), %fingerprint, "restored file");
        }

        Ok(self.save_point.files().len())
    }
}
