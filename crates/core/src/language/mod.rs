//! Language identities and locale resolution.
//!
//! Callers pass arbitrary locale tags (`"zh-Hant-TW"`, `"CMN"`,
//! `"EN-001-x-fake"`); tables are keyed by a normalized [`LanguageIdentity`].
//! The [`LanguageResolver`] maps one to the other without touching any table.

pub mod resolver;
pub mod tag;

pub use resolver::LanguageResolver;
pub use tag::LanguageTag;

use crate::error::{FreqError, Result};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved handle to a supported frequency table, such as `en` or `sr-Latn`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageIdentity(CompactString);

impl LanguageIdentity {
    /// Build the identity naming a table for the given tag.
    ///
    /// Only language, script and region survive; no equivalence mapping is
    /// applied, so this is for naming tables, not for resolving user input.
    pub fn from_tag(tag: &LanguageTag) -> Self {
        let mut id = CompactString::new(tag.effective_language());
        for part in tag.script.iter().chain(tag.region.iter()) {
            id.push('-');
            id.push_str(part);
        }
        Self(id)
    }

    /// The identity as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language subtag alone.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for LanguageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LanguageIdentity {
    type Err = FreqError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::from_tag(&LanguageTag::parse(s)?))
    }
}

impl TryFrom<String> for LanguageIdentity {
    type Error = FreqError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LanguageIdentity> for String {
    fn from(id: LanguageIdentity) -> Self {
        id.0.into_string()
    }
}

impl AsRef<str> for LanguageIdentity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_str_normalizes() {
        let id: LanguageIdentity = "SR_latn".parse().unwrap();
        assert_eq!(id.as_str(), "sr-Latn");
        assert_eq!(id.language(), "sr");
    }

    #[test]
    fn test_identity_drops_private_use() {
        let id: LanguageIdentity = "en-x-test".parse().unwrap();
        assert_eq!(id.to_string(), "en");
    }

    #[test]
    fn test_identity_serde() {
        let id: LanguageIdentity = "zh-Hant".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"zh-Hant\"");
        let back: LanguageIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<LanguageIdentity>("\"-\"").is_err());
    }
}
