//! Locale tag to table resolution.

use super::{LanguageIdentity, LanguageTag};
use crate::error::{FreqError, Result};
use compact_str::CompactString;
use std::collections::BTreeSet;

/// Language codes that share a table with another code.
///
/// Covers macrolanguage members, ISO 639-2/3 aliases of two-letter codes and
/// deprecated codes.
const LANGUAGE_EQUIVALENTS: &[(&str, &str)] = &[
    // Chinese macrolanguage
    ("cmn", "zh"),
    ("yue", "zh"),
    ("wuu", "zh"),
    ("hak", "zh"),
    ("nan", "zh"),
    ("gan", "zh"),
    ("hsn", "zh"),
    ("cjy", "zh"),
    ("cpx", "zh"),
    ("czh", "zh"),
    ("czo", "zh"),
    ("mnp", "zh"),
    ("lzh", "zh"),
    ("zho", "zh"),
    ("chi", "zh"),
    // Arabic, Malay, Persian, Norwegian macrolanguages
    ("arb", "ar"),
    ("ara", "ar"),
    ("zsm", "ms"),
    ("msa", "ms"),
    ("may", "ms"),
    ("pes", "fa"),
    ("fas", "fa"),
    ("per", "fa"),
    ("no", "nb"),
    ("nob", "nb"),
    ("nor", "nb"),
    // ISO 639-2/3 aliases
    ("eng", "en"),
    ("deu", "de"),
    ("ger", "de"),
    ("fra", "fr"),
    ("fre", "fr"),
    ("spa", "es"),
    ("ita", "it"),
    ("jpn", "ja"),
    ("kor", "ko"),
    ("nld", "nl"),
    ("dut", "nl"),
    ("por", "pt"),
    ("rus", "ru"),
    ("ind", "id"),
    ("tur", "tr"),
    ("pol", "pl"),
    ("swe", "sv"),
    ("heb", "he"),
    // Deprecated codes
    ("iw", "he"),
    ("in", "id"),
    ("ji", "yi"),
    ("jw", "jv"),
];

/// Scripts implied by a language (and region) when the tag names none.
const IMPLIED_SCRIPTS: &[(&str, Option<&str>, &str)] = &[
    ("zh", Some("TW"), "Hant"),
    ("zh", Some("HK"), "Hant"),
    ("zh", Some("MO"), "Hant"),
    ("zh", Some("CN"), "Hans"),
    ("zh", Some("SG"), "Hans"),
    ("yue", None, "Hant"),
];

/// Maps locale tags to the closest available table.
///
/// Resolution only consults the set of identities given at construction;
/// it never loads a table.
#[derive(Debug, Clone, Default)]
pub struct LanguageResolver {
    available: BTreeSet<LanguageIdentity>,
}

impl LanguageResolver {
    /// Create a resolver over the identities that have tables.
    pub fn new(available: impl IntoIterator<Item = LanguageIdentity>) -> Self {
        Self {
            available: available.into_iter().collect(),
        }
    }

    /// Identities with tables.
    pub fn available(&self) -> &BTreeSet<LanguageIdentity> {
        &self.available
    }

    /// Resolve a raw locale tag.
    pub fn resolve(&self, tag: &str) -> Result<LanguageIdentity> {
        let parsed = LanguageTag::parse(tag)?;
        self.resolve_tag(&parsed)
            .ok_or_else(|| FreqError::UnsupportedLanguage(tag.to_string()))
    }

    /// Resolve a parsed tag, returning `None` when no table matches.
    pub fn resolve_tag(&self, tag: &LanguageTag) -> Option<LanguageIdentity> {
        let found = Self::candidates(tag)
            .into_iter()
            .find(|candidate| self.available.contains(candidate));
        if found.is_some() {
            return found;
        }

        // Only more specific tables exist (e.g. sr-Cyrl, sr-Latn): take the first.
        let original = tag.effective_language();
        let canonical = canonical_language(original);
        let fallback = self
            .available
            .iter()
            .find(|id| id.language() == original)
            .or_else(|| self.available.iter().find(|id| id.language() == canonical))
            .cloned();
        if let Some(id) = &fallback {
            log::debug!("No exact table for {}, falling back to {}", tag, id);
        }
        fallback
    }

    /// Candidate identities for a tag, most specific first.
    ///
    /// The language subtag as written is tried before its canonical code, so
    /// a table built under an alias (`no`, `iw`) stays reachable.
    pub fn candidates(tag: &LanguageTag) -> Vec<LanguageIdentity> {
        let original = tag.effective_language();
        let canonical = canonical_language(original);
        let region = tag.region.as_deref();
        let script = tag
            .script
            .as_deref()
            .or_else(|| implied_script(original, region))
            .or_else(|| implied_script(canonical, region));

        let mut out: Vec<LanguageIdentity> = Vec::with_capacity(8);
        let mut push = |language: &str, parts: &[Option<&str>]| {
            let mut id = CompactString::new(language);
            for part in parts {
                match part {
                    Some(part) => {
                        id.push('-');
                        id.push_str(part);
                    }
                    None => return,
                }
            }
            let id = LanguageIdentity(id);
            if !out.contains(&id) {
                out.push(id);
            }
        };

        for language in [original, canonical] {
            push(language, &[script, region]);
            push(language, &[script]);
            push(language, &[region]);
            push(language, &[]);
        }

        out
    }
}

/// Map a language subtag to the code its table is built under.
pub fn canonical_language(code: &str) -> &str {
    LANGUAGE_EQUIVALENTS
        .iter()
        .find(|(from, _)| *from == code)
        .map(|(_, to)| *to)
        .unwrap_or(code)
}

fn implied_script(language: &str, region: Option<&str>) -> Option<&'static str> {
    IMPLIED_SCRIPTS
        .iter()
        .find(|(lang, reg, _)| *lang == language && (reg.is_none() || *reg == region))
        .map(|(_, _, script)| *script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(codes: &[&str]) -> Vec<LanguageIdentity> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    fn resolver(codes: &[&str]) -> LanguageResolver {
        LanguageResolver::new(ids(codes))
    }

    #[test]
    fn test_resolve_exact() {
        let r = resolver(&["en", "de"]);
        assert_eq!(r.resolve("en").unwrap().as_str(), "en");
        assert_eq!(r.resolve("DE").unwrap().as_str(), "de");
    }

    #[test]
    fn test_resolve_strips_region_and_private_use() {
        let r = resolver(&["en"]);
        assert_eq!(r.resolve("EN-001-x-fake-extension").unwrap().as_str(), "en");
        assert_eq!(r.resolve("en_GB").unwrap().as_str(), "en");
    }

    #[test]
    fn test_resolve_chinese_equivalence() {
        let r = resolver(&["en", "zh"]);
        for tag in ["zh", "zh-TW", "zh-CN", "zh-Hant", "zh-Hans", "yue-HK", "cmn", "CMN", "zh-yue"] {
            assert_eq!(r.resolve(tag).unwrap().as_str(), "zh", "tag {}", tag);
        }
    }

    #[test]
    fn test_resolve_prefers_more_specific_table() {
        let r = resolver(&["zh", "zh-Hant"]);
        assert_eq!(r.resolve("zh-TW").unwrap().as_str(), "zh-Hant");
        assert_eq!(r.resolve("yue").unwrap().as_str(), "zh-Hant");
        assert_eq!(r.resolve("zh-CN").unwrap().as_str(), "zh");
        assert_eq!(r.resolve("zh").unwrap().as_str(), "zh");
    }

    #[test]
    fn test_resolve_falls_back_to_specific_when_no_base() {
        let r = resolver(&["sr-Cyrl", "sr-Latn"]);
        assert_eq!(r.resolve("sr-Latn-RS").unwrap().as_str(), "sr-Latn");
        assert_eq!(r.resolve("sr").unwrap().as_str(), "sr-Cyrl");
    }

    #[test]
    fn test_resolve_aliases() {
        let r = resolver(&["en", "he", "nb", "id"]);
        assert_eq!(r.resolve("eng").unwrap().as_str(), "en");
        assert_eq!(r.resolve("iw").unwrap().as_str(), "he");
        assert_eq!(r.resolve("no").unwrap().as_str(), "nb");
        assert_eq!(r.resolve("in").unwrap().as_str(), "id");
    }

    #[test]
    fn test_resolve_tables_named_by_alias() {
        for code in ["no", "cmn", "iw"] {
            let r = resolver(&[code]);
            assert_eq!(r.resolve(code).unwrap().as_str(), code);
        }
        assert_eq!(resolver(&["no"]).resolve("NO_x_test").unwrap().as_str(), "no");
        assert_eq!(resolver(&["iw"]).resolve("iw-IL").unwrap().as_str(), "iw");
        // The table named as written wins over the canonical one
        assert_eq!(resolver(&["nb", "no"]).resolve("no").unwrap().as_str(), "no");
        assert_eq!(resolver(&["nb", "no"]).resolve("nob").unwrap().as_str(), "nb");
    }

    #[test]
    fn test_resolve_unsupported() {
        let r = resolver(&["en"]);
        match r.resolve("qqq") {
            Err(FreqError::UnsupportedLanguage(tag)) => assert_eq!(tag, "qqq"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
        assert!(r.resolve("fr").is_err());
        assert!(r.resolve("not a tag").is_err());
    }

    #[test]
    fn test_candidates_order() {
        let tag = LanguageTag::parse("zh-TW").unwrap();
        assert_eq!(
            LanguageResolver::candidates(&tag),
            ids(&["zh-Hant-TW", "zh-Hant", "zh-TW", "zh"])
        );

        let tag = LanguageTag::parse("no-NO").unwrap();
        assert_eq!(
            LanguageResolver::candidates(&tag),
            ids(&["no-NO", "no", "nb-NO", "nb"])
        );
    }
}
