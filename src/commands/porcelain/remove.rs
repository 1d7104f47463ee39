use crate::areas::index::UnstageSelector;
use crate::areas::repository::Repository;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path argument that unstages everything
pub const ALL_SELECTOR: &str = ".";

impl Repository {
    /// Unstage exact paths, `.` unstages every entry
    ///
    /// Paths that were never staged are ignored.
    pub async fn remove(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.load()?;

        for selector in paths.iter().filter_map(|path| self.unstage_selector(path)) {
            index.unstage(&selector);
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(())
    }

    /// Paths are spelled the way `add` staged them, relative to the root
    fn unstage_selector(&self, path: &Path) -> Option<UnstageSelector> {
        if path == Path::new(ALL_SELECTOR) {
            return Some(UnstageSelector::All);
        }

        match self.workspace().relative_path(path) {
            Ok(relative) => Some(UnstageSelector::Path(relative)),
            Err(err) => {
                warn!(path = %path.display(), "{err:#}, skipping");
                None
            }
        }
    }
}
