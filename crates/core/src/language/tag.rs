//! Locale tag grammar.
//!
//! A deliberately small BCP 47 subset:
//!
//! ```text
//! language[-extlang]{0,3}[-Script][-REGION][-variant]*[-singleton-ext+]*[-x-private+]
//! ```
//!
//! `_` is accepted as a separator. Subtags are case-insensitive on input and
//! normalized on output (`zh`, `Hant`, `TW`).

use crate::error::{FreqError, Result};
use compact_str::CompactString;
use std::fmt;

/// A parsed locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageTag {
    /// Primary language subtag, lowercase
    pub language: CompactString,
    /// Extended language subtags, lowercase
    pub extlangs: Vec<CompactString>,
    /// Script subtag, title case
    pub script: Option<CompactString>,
    /// Region subtag, uppercase (or three digits)
    pub region: Option<CompactString>,
    /// Variant subtags, lowercase
    pub variants: Vec<CompactString>,
    /// Extension sequences such as `u-co-phonebk`, lowercase
    pub extensions: Vec<CompactString>,
    /// Private-use subtags following `x`, lowercase
    pub private_use: Vec<CompactString>,
}

impl LanguageTag {
    /// Parse a locale tag.
    ///
    /// Malformed tags are reported as [`FreqError::UnsupportedLanguage`]
    /// carrying the raw input.
    pub fn parse(tag: &str) -> Result<Self> {
        let unsupported = || FreqError::UnsupportedLanguage(tag.to_string());

        let subtags: Vec<&str> = tag.trim().split(['-', '_']).collect();
        if subtags
            .iter()
            .any(|s| s.is_empty() || s.len() > 8 || !s.bytes().all(|b| b.is_ascii_alphanumeric()))
        {
            return Err(unsupported());
        }

        let mut iter = subtags.into_iter().peekable();

        let first = iter.next().ok_or_else(unsupported)?;
        // Private-use-only and grandfathered irregular tags have no table.
        if first.len() < 2 || !is_alpha(first) {
            return Err(unsupported());
        }
        let mut parsed = LanguageTag {
            language: lower(first),
            ..Default::default()
        };

        if first.len() <= 3 {
            while parsed.extlangs.len() < 3 {
                match iter.peek() {
                    Some(s) if s.len() == 3 && is_alpha(s) => {
                        parsed.extlangs.push(lower(s));
                        iter.next();
                    }
                    _ => break,
                }
            }
        }

        if let Some(s) = iter.peek() {
            if s.len() == 4 && is_alpha(s) {
                parsed.script = Some(title(s));
                iter.next();
            }
        }

        if let Some(s) = iter.peek() {
            if (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && is_digit(s)) {
                parsed.region = Some(upper(s));
                iter.next();
            }
        }

        while let Some(s) = iter.peek() {
            let is_variant = (5..=8).contains(&s.len())
                || (s.len() == 4 && s.as_bytes()[0].is_ascii_digit());
            if !is_variant {
                break;
            }
            parsed.variants.push(lower(s));
            iter.next();
        }

        while let Some(s) = iter.next() {
            if s.len() != 1 {
                return Err(unsupported());
            }
            let singleton = lower(s);
            let mut body: Vec<CompactString> = Vec::new();
            if singleton == "x" {
                parsed.private_use.extend(iter.by_ref().map(lower));
                if parsed.private_use.is_empty() {
                    return Err(unsupported());
                }
                break;
            }
            while let Some(part) = iter.peek() {
                if part.len() == 1 {
                    break;
                }
                body.push(lower(part));
                iter.next();
            }
            if body.is_empty() {
                return Err(unsupported());
            }
            let mut extension = singleton;
            for part in body {
                extension.push('-');
                extension.push_str(&part);
            }
            parsed.extensions.push(extension);
        }

        Ok(parsed)
    }

    /// The effective language subtag: an extended language subtag replaces
    /// its prefix (`zh-yue` means `yue`).
    pub fn effective_language(&self) -> &str {
        self.extlangs
            .first()
            .map(|s| s.as_str())
            .unwrap_or(self.language.as_str())
    }

    /// Drop variants, extensions and private-use subtags.
    pub fn strip_extensions(&self) -> Self {
        Self {
            language: self.language.clone(),
            extlangs: self.extlangs.clone(),
            script: self.script.clone(),
            region: self.region.clone(),
            ..Default::default()
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        for part in self
            .extlangs
            .iter()
            .chain(self.script.iter())
            .chain(self.region.iter())
            .chain(self.variants.iter())
            .chain(self.extensions.iter())
        {
            write!(f, "-{}", part)?;
        }
        if !self.private_use.is_empty() {
            write!(f, "-x-{}", self.private_use.join("-"))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for LanguageTag {
    type Err = FreqError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_digit(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn lower(s: &str) -> CompactString {
    CompactString::new(s.to_ascii_lowercase())
}

fn upper(s: &str) -> CompactString {
    CompactString::new(s.to_ascii_uppercase())
}

fn title(s: &str) -> CompactString {
    let mut out = CompactString::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if i == 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let tag = LanguageTag::parse("en").unwrap();
        assert_eq!(tag.language, "en");
        assert!(tag.script.is_none());
        assert!(tag.region.is_none());
    }

    #[test]
    fn test_parse_normalizes_case() {
        let tag = LanguageTag::parse("ZH-hant-tw").unwrap();
        assert_eq!(tag.language, "zh");
        assert_eq!(tag.script.as_deref(), Some("Hant"));
        assert_eq!(tag.region.as_deref(), Some("TW"));
        assert_eq!(tag.to_string(), "zh-Hant-TW");
    }

    #[test]
    fn test_parse_numeric_region_and_private_use() {
        let tag = LanguageTag::parse("EN-001-x-fake-extension").unwrap();
        assert_eq!(tag.language, "en");
        assert_eq!(tag.region.as_deref(), Some("001"));
        assert_eq!(tag.private_use, vec!["fake", "extension"]);
        assert_eq!(tag.strip_extensions().to_string(), "en-001");
    }

    #[test]
    fn test_parse_underscore_separator() {
        let tag = LanguageTag::parse("pt_BR").unwrap();
        assert_eq!(tag.to_string(), "pt-BR");
    }

    #[test]
    fn test_parse_extlang() {
        let tag = LanguageTag::parse("zh-yue-HK").unwrap();
        assert_eq!(tag.effective_language(), "yue");
        assert_eq!(tag.region.as_deref(), Some("HK"));
    }

    #[test]
    fn test_parse_variants_and_extensions() {
        let tag = LanguageTag::parse("de-DE-1996-u-co-phonebk").unwrap();
        assert_eq!(tag.variants, vec!["1996"]);
        assert_eq!(tag.extensions, vec!["u-co-phonebk"]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "e", "x-private", "en--US", "en-US-x", "en-u", "123", "en-toolongsubtag"] {
            assert!(
                matches!(LanguageTag::parse(bad), Err(FreqError::UnsupportedLanguage(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
