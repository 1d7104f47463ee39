//! Stored object types
//!
//! The object database only knows about opaque byte blobs. Two kinds of payload
//! end up there:
//!
//! - **File content**: the raw bytes of a staged file
//! - **Save point**: a JSON record (message, timestamp, parent, file table)
//!
//! Both are keyed by the SHA-256 [`Fingerprint`](fingerprint::Fingerprint) of
//! their bytes.

pub mod fingerprint;
pub mod save_point;

/// Length of a SHA-256 digest in hexadecimal format
pub const FINGERPRINT_LENGTH: usize = 64;

/// Number of leading characters used for abbreviated fingerprints
pub const SHORT_FINGERPRINT_LENGTH: usize = 7;
