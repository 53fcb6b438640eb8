//! Main tokenizer implementation.
//!
//! This module provides the `Tokenizer` that turns raw text into the token
//! units frequency tables are built from, using a per-language profile.

pub mod phrase;
pub mod profile;

pub use phrase::combine_frequencies;
pub use profile::{LanguageProfile, ProfileRegistry, Segmentation};

use crate::pre_tokenizer::{Segmenter, Splitter};
use lexfreq_core::{FreqError, LanguageIdentity, LanguageResolver, LanguageTag, Result};
use std::sync::Arc;

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    registry: ProfileRegistry,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with the built-in profiles.
    pub fn new() -> Self {
        Self {
            registry: ProfileRegistry::new(),
        }
    }

    /// Set the profile for a language.
    pub fn profile(mut self, language: &LanguageIdentity, profile: LanguageProfile) -> Self {
        self.registry.register(language, profile);
        self
    }

    /// Set the external segmenter for a language.
    pub fn segmenter(mut self, language: &LanguageIdentity, segmenter: Arc<dyn Segmenter>) -> Self {
        self.registry.register_segmenter(language, segmenter);
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Tokenizer {
        Tokenizer {
            registry: self.registry,
            splitter: Splitter::new(),
        }
    }
}

/// Language-aware tokenizer.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Per-language profiles and segmenters
    registry: ProfileRegistry,
    /// Structural splitter
    splitter: Splitter,
}

impl Tokenizer {
    /// Tokenizer with the built-in profiles and no external segmenters.
    pub fn new() -> Self {
        TokenizerBuilder::new().build()
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Profile used for a language.
    pub fn profile(&self, language: &LanguageIdentity) -> &LanguageProfile {
        self.registry.profile(language)
    }

    /// Normalize text the way table tokens are normalized.
    pub fn normalize(&self, text: &str, language: &LanguageIdentity) -> String {
        self.profile(language).normalizer().normalize(text)
    }

    /// Split text into normalized tokens.
    pub fn tokenize(&self, text: &str, language: &LanguageIdentity) -> Vec<String> {
        let normalized = self.normalize(text, language);
        self.tokenize_normalized(&normalized, language)
    }

    /// Split text for a raw locale tag, using the profile of its canonical
    /// base language. No table is involved.
    pub fn tokenize_tag(&self, text: &str, tag: &str) -> Result<Vec<String>> {
        let language = Self::base_language(tag)?;
        Ok(self.tokenize(text, &language))
    }

    /// Canonical base language for a tag (`zh-Hant-TW` and `cmn` give `zh`).
    pub fn base_language(tag: &str) -> Result<LanguageIdentity> {
        let parsed = LanguageTag::parse(tag)?;
        LanguageResolver::candidates(&parsed)
            .pop()
            .ok_or_else(|| FreqError::UnsupportedLanguage(tag.to_string()))
    }

    /// Split text that is already normalized for `language`.
    pub fn tokenize_normalized(&self, text: &str, language: &LanguageIdentity) -> Vec<String> {
        match self.profile(language).segmentation {
            Segmentation::Structural => self.splitter.split(text),
            Segmentation::Delegated => match self.registry.segmenter(language) {
                Some(segmenter) => {
                    let mut tokens = Vec::new();
                    for piece in segmenter.segment(text) {
                        self.splitter.refine(&piece, &mut tokens);
                    }
                    tokens
                }
                None => {
                    log::debug!(
                        "No segmenter registered for {}, using structural splitting",
                        language
                    );
                    self.splitter.split(text)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pre_tokenizer::{CaseMapping, NormalizationForm, PresegmentedText};
    use pretty_assertions::assert_eq;

    fn id(code: &str) -> LanguageIdentity {
        code.parse().unwrap()
    }

    #[test]
    fn test_tokenize_english() {
        let tokenizer = Tokenizer::new();
        let en = id("en");
        assert_eq!(tokenizer.tokenize("can't", &en), vec!["can't"]);
        assert_eq!(tokenizer.tokenize("plan't", &en), vec!["plan't"]);
        assert_eq!(tokenizer.tokenize("can.t", &en), vec!["can", "t"]);
        assert_eq!(tokenizer.tokenize("😂test", &en), vec!["😂", "test"]);
        assert_eq!(
            tokenizer.tokenize("The Quick, brown FOX!", &en),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_tokenize_turkish_case() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("IRMAK İzmir", &id("tr")), vec!["ırmak", "izmir"]);
    }

    #[test]
    fn test_delegated_without_segmenter_falls_back() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("我的猫", &id("zh")), vec!["我", "的", "猫"]);
    }

    #[test]
    fn test_delegated_segmenter_output_is_refined() {
        let ja = id("ja");
        let tokenizer = Tokenizer::builder()
            .segmenter(&ja, Arc::new(PresegmentedText))
            .build();
        // Full-width letters fold under NFKC; punctuation is dropped; the
        // interior apostrophe survives
        assert_eq!(
            tokenizer.tokenize("私は Ｃａｎ'ｔ 。 猫😂", &ja),
            vec!["私は", "can't", "猫", "😂"]
        );
    }

    #[test]
    fn test_tokenize_tag() {
        let tokenizer = Tokenizer::new();
        assert_eq!(Tokenizer::base_language("zh-Hant-TW").unwrap().as_str(), "zh");
        assert_eq!(Tokenizer::base_language("CMN").unwrap().as_str(), "zh");
        assert_eq!(
            tokenizer.tokenize_tag("IRMAK", "tr-TR").unwrap(),
            vec!["ırmak"]
        );
        assert_eq!(
            tokenizer.tokenize_tag("Ｃａｔ", "cmn").unwrap(),
            vec!["cat"]
        );
        assert!(matches!(
            tokenizer.tokenize_tag("text", "not a tag!"),
            Err(FreqError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_thai_segmenter() {
        let th = id("th");
        assert_eq!(
            Tokenizer::new().tokenize("สวัสดีครับ", &th),
            vec!["สวัสดีครับ"]
        );

        let greeting: Arc<dyn Segmenter> = Arc::new(|text: &str| {
            text.replace("สวัสดี", "สวัสดี ")
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        let tokenizer = Tokenizer::builder().segmenter(&th, greeting).build();
        assert_eq!(tokenizer.tokenize("สวัสดีครับ", &th), vec!["สวัสดี", "ครับ"]);
    }

    #[test]
    fn test_custom_profile() {
        let xx = id("en");
        let tokenizer = Tokenizer::builder()
            .profile(
                &xx,
                LanguageProfile {
                    normalization: NormalizationForm::NFC,
                    case_mapping: CaseMapping::Preserve,
                    segmentation: Segmentation::Structural,
                },
            )
            .build();
        assert_eq!(tokenizer.tokenize("Hello World", &xx), vec!["Hello", "World"]);
    }
}
