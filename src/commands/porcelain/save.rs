use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::save_point::SavePoint;
use crate::errors::Error;
use anyhow::Context;
use tracing::info;

impl Repository {
    /// Record the staged files as a new save point on top of HEAD
    ///
    /// An empty index is rejected before anything is written. On success both
    /// references point at the new save point and the index is empty.
    pub async fn save(&self, message: &str) -> anyhow::Result<Fingerprint> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.load()?;

        if index.is_empty() {
            return Err(Error::EmptyIndex.into());
        }

        let parent = self.refs().read_head()?;
        let latest = self.refs().read_latest()?;
        if parent != latest {
            // history forks here, nothing reconciles HEAD and LATEST afterwards
            info!(
                parent = ?parent.as_ref().map(Fingerprint::to_short),
                latest = ?latest.as_ref().map(Fingerprint::to_short),
                "saving on top of a save point that is not the latest"
            );
        }

        let files = index
            .entries()
            .map(|(path, fingerprint)| (path.clone(), fingerprint.clone()));
        let save_point = match self.config().save_date() {
            Some(date) => SavePoint::create_with_timestamp(message, files, parent, date),
            None => SavePoint::create(message, files, parent),
        };

        let chain = self.chain();
        let fingerprint = chain.persist(&save_point)?;
        chain.advance_references(&fingerprint).await.with_context(|| {
            format!("Save point {fingerprint} was stored but HEAD and LATEST may not point at it")
        })?;

        index.clear();
        index.write_updates()?;

        writeln!(self.writer(), "Saved: {fingerprint}")?;

        Ok(fingerprint)
    }
}
