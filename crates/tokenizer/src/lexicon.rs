//! Lookup facade tying resolution, storage, tokenization and sampling together.
//!
//! Every operation takes a raw locale tag, resolves it to a table identity
//! and works against the cached table for that identity.

use crate::io::DEFAULT_WORDLIST;
use crate::pre_tokenizer::Segmenter;
use crate::sampler::{self, Charset, SampleRequest};
use crate::store::TableStore;
use crate::tokenizer::{combine_frequencies, LanguageProfile, Tokenizer, TokenizerBuilder};
use lexfreq_core::{
    FreqError, FrequencyTable, LanguageIdentity, LanguageResolver, Result,
};
use rand::Rng;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where tables come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Directory holding table files; `None` serves only in-memory tables
    pub data_dir: Option<PathBuf>,
    /// Wordlist name, `combined` by default
    pub wordlist: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            wordlist: DEFAULT_WORDLIST.to_string(),
        }
    }
}

/// Builder for creating a [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    config: LexiconConfig,
    tokenizer: TokenizerBuilder,
    tables: Vec<FrequencyTable>,
}

impl LexiconBuilder {
    /// Create a new builder with the built-in language profiles.
    pub fn new() -> Self {
        Self {
            config: LexiconConfig::default(),
            tokenizer: TokenizerBuilder::new(),
            tables: Vec::new(),
        }
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: LexiconConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the directory table files are read from.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(dir.into());
        self
    }

    /// Set the wordlist.
    pub fn wordlist(mut self, wordlist: impl Into<String>) -> Self {
        self.config.wordlist = wordlist.into();
        self
    }

    /// Override the tokenization profile of a language.
    pub fn profile(mut self, language: &LanguageIdentity, profile: LanguageProfile) -> Self {
        self.tokenizer = self.tokenizer.profile(language, profile);
        self
    }

    /// Register an external segmenter for a language.
    pub fn segmenter(mut self, language: &LanguageIdentity, segmenter: Arc<dyn Segmenter>) -> Self {
        self.tokenizer = self.tokenizer.segmenter(language, segmenter);
        self
    }

    /// Serve an already built table; it takes precedence over a file for
    /// the same language.
    pub fn table(mut self, table: FrequencyTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Serve several already built tables.
    pub fn tables(mut self, tables: impl IntoIterator<Item = FrequencyTable>) -> Self {
        self.tables.extend(tables);
        self
    }

    /// Build the lexicon.
    ///
    /// Only the data directory listing is read here; tables load on first use.
    pub fn build(self) -> Result<Lexicon> {
        let mut store = match &self.config.data_dir {
            Some(dir) => TableStore::open(dir, &self.config.wordlist)?,
            None if self.tables.is_empty() => {
                return Err(FreqError::InvalidConfig(
                    "A data directory or at least one table is required".to_string(),
                ))
            }
            None => TableStore::from_tables(Vec::new()),
        };
        for table in self.tables {
            store.insert(table);
        }

        let resolver = LanguageResolver::new(store.available_languages().iter().cloned());
        Ok(Lexicon {
            store,
            resolver,
            tokenizer: self.tokenizer.build(),
        })
    }
}

/// Word frequency lookups over one wordlist.
///
/// # Example
///
/// ```rust
/// use compact_str::CompactString;
/// use lexfreq_tokenizer::{FrequencyTable, Lexicon};
///
/// let table = FrequencyTable::from_buckets(
///     "en".parse()?,
///     vec![
///         (-130, vec![CompactString::new("the")]),
///         (-250, vec![CompactString::new("plan"), CompactString::new("t")]),
///     ],
/// )?;
/// let lexicon = Lexicon::builder().table(table).build()?;
///
/// assert_eq!(lexicon.word_frequency("The", "en-US", 0.0)?, 10f64.powf(-1.3));
/// assert!(lexicon.word_frequency("plan.t", "en", 0.0)? < lexicon.word_frequency("plan", "en", 0.0)?);
/// assert_eq!(lexicon.random_words("en", 3, 0)?, "the the the");
/// # Ok::<(), lexfreq_tokenizer::FreqError>(())
/// ```
#[derive(Debug)]
pub struct Lexicon {
    store: TableStore,
    resolver: LanguageResolver,
    tokenizer: Tokenizer,
}

impl Lexicon {
    /// Create a lexicon builder.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Open the default wordlist in `dir` with the built-in profiles.
    pub fn open(dir: &Path) -> Result<Self> {
        Self::builder().data_dir(dir).build()
    }

    /// Resolve a raw locale tag to the identity of an available table.
    pub fn resolve(&self, tag: &str) -> Result<LanguageIdentity> {
        self.resolver.resolve(tag)
    }

    /// Languages with a table in this wordlist.
    pub fn available_languages(&self) -> &BTreeSet<LanguageIdentity> {
        self.store.available_languages()
    }

    /// Frequency of a word or phrase, or `default` when it is unknown.
    ///
    /// The text is normalized the way the table was built. A phrase that is
    /// not tabulated as a whole is estimated from its tokens with
    /// [`combine_frequencies`]; if any token is unknown the result is
    /// `default`.
    pub fn word_frequency(&self, word: &str, tag: &str, default: f64) -> Result<f64> {
        let language = self.resolve(tag)?;
        let table = self.store.load(&language)?;

        let normalized = self.tokenizer.normalize(word, &language);
        if let Some(freq) = table.get_freq(&normalized) {
            return Ok(freq);
        }

        let tokens = self.tokenizer.tokenize_normalized(&normalized, &language);
        let freqs: Option<Vec<f64>> = tokens.iter().map(|t| table.get_freq(t)).collect();
        Ok(freqs
            .and_then(|freqs| combine_frequencies(&freqs))
            .unwrap_or(default))
    }

    /// The `n` most frequent tokens, highest first.
    ///
    /// With `ascii_only`, tokens containing characters above `~` are skipped.
    pub fn top_n_list(&self, tag: &str, n: usize, ascii_only: bool) -> Result<Vec<String>> {
        let table = self.iter_wordlist(tag)?;
        let charset = if ascii_only { Charset::Ascii } else { Charset::Any };
        Ok(table
            .iter()
            .map(|(token, _)| token)
            .filter(|token| charset.allows(token))
            .take(n)
            .map(str::to_string)
            .collect())
    }

    /// The whole table for a language; its `iter()` yields
    /// `(token, frequency)` in rank order.
    pub fn iter_wordlist(&self, tag: &str) -> Result<Arc<FrequencyTable>> {
        let language = self.resolve(tag)?;
        self.store.load(&language)
    }

    /// Split text into the units the tables are keyed by.
    ///
    /// Tokenizing needs no table, so a well-formed tag without one is
    /// tokenized with the profile of its base language.
    pub fn tokenize(&self, text: &str, tag: &str) -> Result<Vec<String>> {
        let language = match self.resolve(tag) {
            Ok(language) => language,
            Err(_) => Tokenizer::base_language(tag)?,
        };
        Ok(self.tokenizer.tokenize(text, &language))
    }

    /// Draw `word_count` words carrying `bits_per_word` bits each.
    pub fn random_words(&self, tag: &str, word_count: usize, bits_per_word: u32) -> Result<String> {
        let request = SampleRequest::new(word_count, bits_per_word);
        self.sample(tag, &request, &mut rand::rng())
    }

    /// Like [`Lexicon::random_words`], restricted to ASCII tokens.
    pub fn random_ascii_words(
        &self,
        tag: &str,
        word_count: usize,
        bits_per_word: u32,
    ) -> Result<String> {
        let request = SampleRequest::new(word_count, bits_per_word).charset(Charset::Ascii);
        self.sample(tag, &request, &mut rand::rng())
    }

    /// Sample with an explicit request and random number generator.
    pub fn sample<R: Rng>(&self, tag: &str, request: &SampleRequest, rng: &mut R) -> Result<String> {
        let table = self.iter_wordlist(tag)?;
        sampler::sample_words_with_rng(&table, request, rng)
    }

    /// Underlying table store.
    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// Tokenizer used for normalization and segmentation.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;
    use pretty_assertions::assert_eq;

    fn table(code: &str, buckets: Vec<(i32, Vec<&str>)>) -> FrequencyTable {
        FrequencyTable::from_buckets(
            code.parse().unwrap(),
            buckets
                .into_iter()
                .map(|(cb, tokens)| (cb, tokens.into_iter().map(CompactString::new).collect())),
        )
        .unwrap()
    }

    fn lexicon() -> Lexicon {
        Lexicon::builder()
            .table(table(
                "en",
                vec![
                    (-130, vec!["the"]),
                    (-200, vec!["can't", "t"]),
                    (-300, vec!["plan", "café", "lol"]),
                ],
            ))
            .table(table("zh", vec![(-120, vec!["的"]), (-250, vec!["猫"])]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_requires_a_source() {
        assert!(matches!(
            Lexicon::builder().build(),
            Err(FreqError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_word_frequency_normalizes() {
        let lexicon = lexicon();
        let the = lexicon.word_frequency("the", "en", 0.0).unwrap();
        assert_eq!(lexicon.word_frequency("THE", "en", 0.0).unwrap(), the);
        // Decomposed "café" matches the NFC table entry
        assert_eq!(
            lexicon.word_frequency("cafe\u{301}", "en", 0.0).unwrap(),
            lexicon.word_frequency("café", "en", 0.0).unwrap()
        );
    }

    #[test]
    fn test_unknown_word_returns_default() {
        let lexicon = lexicon();
        assert_eq!(lexicon.word_frequency("esquivalience", "en", 0.0).unwrap(), 0.0);
        assert_eq!(lexicon.word_frequency("esquivalience", "en", 1e-6).unwrap(), 1e-6);
        assert_eq!(lexicon.word_frequency("the esquivalience", "en", 0.5).unwrap(), 0.5);
        assert_eq!(lexicon.word_frequency("...", "en", 0.25).unwrap(), 0.25);
    }

    #[test]
    fn test_phrase_frequency() {
        let lexicon = lexicon();
        let phrase = lexicon.word_frequency("plan.t", "en", 0.0).unwrap();
        let plan = lexicon.word_frequency("plan", "en", 0.0).unwrap();
        let t = lexicon.word_frequency("t", "en", 0.0).unwrap();
        assert!(phrase > 0.0);
        assert!(phrase < plan);
        assert!(phrase < t);
        // Tabulated as a whole
        assert_eq!(lexicon.word_frequency("can't", "en", 0.0).unwrap(), t);
    }

    #[test]
    fn test_unsupported_language() {
        let lexicon = lexicon();
        assert!(matches!(
            lexicon.word_frequency("the", "xx", 0.0),
            Err(FreqError::UnsupportedLanguage(_))
        ));
        assert!(matches!(
            lexicon.top_n_list("not a tag!", 1, false),
            Err(FreqError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_tables_named_by_alias_are_reachable() {
        for code in ["no", "cmn", "iw"] {
            let lexicon = Lexicon::builder()
                .table(table(code, vec![(-300, vec!["lol"])]))
                .build()
                .unwrap();
            let listed: Vec<&str> = lexicon
                .available_languages()
                .iter()
                .map(|l| l.as_str())
                .collect();
            assert_eq!(listed, vec![code]);
            assert_eq!(lexicon.resolve(code).unwrap().as_str(), code);
            assert!(lexicon.word_frequency("lol", code, 0.0).unwrap() > 0.0);
        }
    }

    #[test]
    fn test_top_n_list() {
        let lexicon = lexicon();
        assert_eq!(
            lexicon.top_n_list("en", 4, false).unwrap(),
            vec!["the", "can't", "t", "plan"]
        );
        assert_eq!(
            lexicon.top_n_list("en", 10, true).unwrap(),
            vec!["the", "can't", "t", "plan", "lol"]
        );
        assert_eq!(lexicon.top_n_list("zh-TW", 1, false).unwrap(), vec!["的"]);
    }

    #[test]
    fn test_tokenize_without_table() {
        let lexicon = lexicon();
        assert_eq!(
            lexicon.tokenize("IRMAK", "tr").unwrap(),
            vec!["ırmak"]
        );
        assert_eq!(lexicon.tokenize("😂test", "en").unwrap(), vec!["😂", "test"]);
    }

    #[test]
    fn test_random_words() {
        let lexicon = lexicon();
        assert_eq!(lexicon.random_words("en", 4, 0).unwrap(), "the the the the");
        assert_eq!(lexicon.random_words("zh", 2, 1).unwrap().split(' ').count(), 2);
        assert!(matches!(
            lexicon.random_ascii_words("zh", 5, 12),
            Err(FreqError::InsufficientEntropySource { .. })
        ));
    }
}
