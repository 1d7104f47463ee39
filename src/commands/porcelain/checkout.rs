use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::checkout::target::CheckoutTarget;
use crate::artifacts::objects::fingerprint::Fingerprint;
use anyhow::Context;

impl Repository {
    /// Restore a save point (`latest` or a fingerprint) and point HEAD at it
    ///
    /// LATEST is never moved by a checkout. When a file cannot be restored the
    /// checkout stops there and HEAD keeps its previous value.
    pub async fn checkout(&self, target: &str) -> anyhow::Result<Fingerprint> {
        self.ensure_initialized()?;

        let target = CheckoutTarget::try_parse(target)?;
        let fingerprint = target.resolve(self.refs())?;

        let migration = Migration::load(self.database(), self.workspace(), fingerprint)?;
        migration
            .apply_changes()
            .with_context(|| format!("Checkout of save point {} aborted", migration.fingerprint()))?;

        self.refs().update_head(migration.fingerprint())?;

        writeln!(
            self.writer(),
            "Successfully checked out save point {}",
            migration.fingerprint()
        )?;

        Ok(migration.fingerprint().clone())
    }
}
