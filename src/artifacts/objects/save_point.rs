//! Save point object
//!
//! A save point is a complete snapshot of the staged files: every save point
//! carries the full file table, never a diff against its parent.
//!
//! ## Format
//!
//! Stored as pretty-printed JSON (the field names are a compatibility surface):
//! ```text
//! {
//!   "message": "...",
//!   "timestamp": "2024-01-01T12:00:00+00:00",
//!   "parent": "<fingerprint>" | "",
//!   "files": { "<path>": "<fingerprint>", ... }
//! }
//! ```

use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// File table of a save point, keyed by repository-relative path
pub type FileTable = BTreeMap<PathBuf, Fingerprint>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePoint {
    message: String,
    timestamp: String,
    #[serde(with = "parent_field")]
    parent: Option<Fingerprint>,
    files: FileTable,
}

impl SavePoint {
    /// Build a save point stamped with the current time
    pub fn create(
        message: impl Into<String>,
        files: impl IntoIterator<Item = (PathBuf, Fingerprint)>,
        parent: Option<Fingerprint>,
    ) -> Self {
        Self::create_with_timestamp(message, files, parent, chrono::Local::now().fixed_offset())
    }

    /// Build a save point with an explicit timestamp
    pub fn create_with_timestamp(
        message: impl Into<String>,
        files: impl IntoIterator<Item = (PathBuf, Fingerprint)>,
        parent: Option<Fingerprint>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        SavePoint {
            message: message.into(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            parent,
            files: files.into_iter().collect(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn parent(&self) -> Option<&Fingerprint> {
        self.parent.as_ref()
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn into_files(self) -> FileTable {
        self.files
    }

    pub fn serialize(&self) -> Result<Bytes> {
        serde_json::to_vec_pretty(self)
            .map(Bytes::from)
            .map_err(Error::SavePointEncode)
    }

    /// Decode a save point previously stored under `fingerprint`
    pub fn deserialize(fingerprint: &Fingerprint, content: &[u8]) -> Result<Self> {
        serde_json::from_slice(content).map_err(|source| Error::MalformedSavePoint {
            fingerprint: fingerprint.clone(),
            source,
        })
    }
}

// the root save point is written with an empty parent string
mod parent_field {
    use crate::artifacts::objects::fingerprint::Fingerprint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        parent: &Option<Fingerprint>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match parent {
            Some(parent) => serializer.serialize_str(parent.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Fingerprint>, D::Error> {
        let raw = String::deserialize(deserializer)?;

        if raw.is_empty() {
            return Ok(None);
        }

        Fingerprint::try_parse(raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
