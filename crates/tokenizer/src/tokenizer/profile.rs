//! Per-language tokenization strategies.
//!
//! Language special cases are data, not branches: each language maps to a
//! [`LanguageProfile`] and new languages register a profile instead of
//! adding code paths to the tokenizer.

use crate::pre_tokenizer::{CaseMapping, NormalizationForm, Normalizer, Segmenter};
use ahash::AHashMap;
use compact_str::CompactString;
use lexfreq_core::LanguageIdentity;
use std::fmt;
use std::sync::Arc;

/// How a language is cut into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segmentation {
    /// Unicode word boundaries plus the apostrophe and punctuation rules
    #[default]
    Structural,
    /// Hand the text to a registered external segmenter first
    Delegated,
}

/// Tokenization settings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageProfile {
    /// Unicode normalization form
    pub normalization: NormalizationForm,
    /// Case folding convention
    pub case_mapping: CaseMapping,
    /// Segmentation strategy
    pub segmentation: Segmentation,
}

impl LanguageProfile {
    /// NFC, default lowercasing, structural splitting.
    pub fn structural() -> Self {
        Self::default()
    }

    /// NFC, default lowercasing, external segmenter.
    pub fn delegated() -> Self {
        Self {
            segmentation: Segmentation::Delegated,
            ..Self::default()
        }
    }

    /// NFKC (folds full-width forms), default lowercasing, external segmenter.
    pub fn delegated_cjk() -> Self {
        Self {
            normalization: NormalizationForm::NFKC,
            case_mapping: CaseMapping::Default,
            segmentation: Segmentation::Delegated,
        }
    }

    /// Normalizer for this profile.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.normalization, self.case_mapping)
    }
}

/// Profiles and segmenters keyed by language.
///
/// Lookups try the full identity (`zh-Hant`) first, then the bare language
/// subtag (`zh`), then fall back to the default profile.
#[derive(Clone)]
pub struct ProfileRegistry {
    profiles: AHashMap<CompactString, LanguageProfile>,
    segmenters: AHashMap<CompactString, Arc<dyn Segmenter>>,
    default: LanguageProfile,
}

impl ProfileRegistry {
    /// Registry with no language-specific entries.
    pub fn empty() -> Self {
        Self {
            profiles: AHashMap::new(),
            segmenters: AHashMap::new(),
            default: LanguageProfile::structural(),
        }
    }

    /// Registry with the built-in profiles.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        let turkic = LanguageProfile {
            case_mapping: CaseMapping::Turkic,
            ..LanguageProfile::structural()
        };
        let korean = LanguageProfile {
            normalization: NormalizationForm::NFKC,
            ..LanguageProfile::structural()
        };

        registry.insert_profile("ja", LanguageProfile::delegated_cjk());
        registry.insert_profile("zh", LanguageProfile::delegated_cjk());
        registry.insert_profile("ko", korean);
        // No spaces between words and no UAX #29 word rules
        for code in ["th", "lo", "km", "my"] {
            registry.insert_profile(code, LanguageProfile::delegated());
        }
        registry.insert_profile("tr", turkic);
        registry.insert_profile("az", turkic);
        registry
    }

    /// Register or replace the profile for a language.
    pub fn register(&mut self, language: &LanguageIdentity, profile: LanguageProfile) {
        self.insert_profile(language.as_str(), profile);
    }

    /// Register or replace the segmenter for a language.
    pub fn register_segmenter(&mut self, language: &LanguageIdentity, segmenter: Arc<dyn Segmenter>) {
        self.segmenters
            .insert(CompactString::new(language.as_str()), segmenter);
    }

    /// Profile applying to a language.
    pub fn profile(&self, language: &LanguageIdentity) -> &LanguageProfile {
        self.profiles
            .get(language.as_str())
            .or_else(|| self.profiles.get(language.language()))
            .unwrap_or(&self.default)
    }

    /// Segmenter registered for a language, if any.
    pub fn segmenter(&self, language: &LanguageIdentity) -> Option<&Arc<dyn Segmenter>> {
        self.segmenters
            .get(language.as_str())
            .or_else(|| self.segmenters.get(language.language()))
    }

    fn insert_profile(&mut self, key: &str, profile: LanguageProfile) {
        self.profiles.insert(CompactString::new(key), profile);
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segmenters: Vec<&str> = self.segmenters.keys().map(|k| k.as_str()).collect();
        segmenters.sort_unstable();
        f.debug_struct("ProfileRegistry")
            .field("profiles", &self.profiles)
            .field("segmenters", &segmenters)
            .field("default", &self.default)
            .finish()
    }
}
