use crate::areas::refs::{RefName, RefStore};
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};

/// Selector naming the symbolic latest save point
pub const LATEST_SELECTOR: &str = "latest";

/// Save point selected by a checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// Whatever LATEST points at when the checkout runs
    Latest,
    /// A literal save point fingerprint
    SavePoint(Fingerprint),
}

impl CheckoutTarget {
    /// Parse a selector, validating literal fingerprints before any lookup
    pub fn try_parse(selector: &str) -> Result<Self> {
        let selector = selector.trim();

        if selector == LATEST_SELECTOR {
            return Ok(CheckoutTarget::Latest);
        }

        Fingerprint::try_parse(selector).map(CheckoutTarget::SavePoint)
    }

    pub fn resolve(&self, refs: &impl RefStore) -> Result<Fingerprint> {
        match self {
            CheckoutTarget::Latest => refs.read_ref(RefName::Latest)?.ok_or(Error::NoSavePoints),
            CheckoutTarget::SavePoint(fingerprint) => Ok(fingerprint.clone()),
        }
    }
}
