//! Content fingerprint (SHA-256 hash)
//!
//! Fingerprints are 64-character lowercase hexadecimal strings. They are used
//! both as object database keys and as a content equality test: two byte
//! sequences share a fingerprint only when they are identical.
//!
//! ## Storage
//!
//! Objects are stored flat, in `<store>/objects/<fingerprint>`

use crate::artifacts::objects::{FINGERPRINT_LENGTH, SHORT_FINGERPRINT_LENGTH};
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Hex-encoded SHA-256 digest of a byte sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash arbitrary bytes
    ///
    /// Pure and deterministic; this is the only place digests are computed.
    pub fn of(content: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_ref());

        let digest = hasher.finalize();
        Self(format!("{digest:x}"))
    }

    /// Parse and validate a fingerprint from a string
    ///
    /// Only 64 lowercase hex characters are accepted, which also guarantees the
    /// value is safe to join onto the objects directory.
    pub fn try_parse(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();

        if id.len() != FINGERPRINT_LENGTH
            || !id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(Error::InvalidFingerprint(id));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the object inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters, for human-facing output
    pub fn to_short(&self) -> &str {
        &self.0[..SHORT_FINGERPRINT_LENGTH]
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
