//! Runtime configuration
//!
//! Read once at startup from the environment:
//!
//! - `PIT_DIR`: store directory name under the repository root (default `.pit`)
//! - `PIT_SAVE_DATE`: RFC3339 timestamp stamped on new save points instead of now
//! - `NO_PAGER`: when set, `log` output is never paged

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::path::{Component, Path};

pub const DEFAULT_STORE_DIR: &str = ".pit";

/// Directory of a git checkout sharing the working tree, never scanned
pub const GIT_DIR: &str = ".git";

pub const STORE_DIR_ENV: &str = "PIT_DIR";
pub const SAVE_DATE_ENV: &str = "PIT_SAVE_DATE";
pub const NO_PAGER_ENV: &str = "NO_PAGER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    store_dir: String,
    save_date: Option<DateTime<FixedOffset>>,
    pager: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_dir: DEFAULT_STORE_DIR.to_string(),
            save_date: None,
            pager: true,
        }
    }
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let store_dir = match lookup(STORE_DIR_ENV) {
            Some(store_dir) => Self::validate_store_dir(store_dir)?,
            None => DEFAULT_STORE_DIR.to_string(),
        };

        let save_date = lookup(SAVE_DATE_ENV)
            .map(|date| {
                DateTime::parse_from_rfc3339(&date)
                    .with_context(|| format!("{SAVE_DATE_ENV} is not an RFC3339 timestamp: {date}"))
            })
            .transpose()?;

        let pager = lookup(NO_PAGER_ENV).is_none();

        Ok(Config {
            store_dir,
            save_date,
            pager,
        })
    }

    fn validate_store_dir(store_dir: String) -> anyhow::Result<String> {
        let mut components = Path::new(&store_dir).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(store_dir),
            _ => anyhow::bail!("{STORE_DIR_ENV} must be a single directory name, got {store_dir:?}"),
        }
    }

    pub fn with_save_date(mut self, save_date: DateTime<FixedOffset>) -> Self {
        self.save_date = Some(save_date);
        self
    }

    pub fn store_dir(&self) -> &str {
        &self.store_dir
    }

    pub fn save_date(&self) -> Option<DateTime<FixedOffset>> {
        self.save_date
    }

    pub fn pager(&self) -> bool {
        self.pager
    }

    /// Top-level directories the working tree scan skips
    pub fn ignored_dirs(&self) -> Vec<String> {
        let mut ignored = vec![self.store_dir.clone()];
        if self.store_dir != GIT_DIR {
            ignored.push(GIT_DIR.to_string());
        }
        ignored
    }
}
