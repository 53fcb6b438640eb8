//! Lexfreq-tokenizer - word frequency lookup engine
//!
//! This crate provides the runtime side of lexfreq: it loads per-language
//! frequency tables, resolves locale tags to them, tokenizes text into the
//! units the tables were built from, and samples random words.
//!
//! # Features
//!
//! - `Lexicon` facade: `word_frequency`, `top_n_list`, `iter_wordlist`,
//!   `tokenize`, `random_words`, `random_ascii_words`
//! - Per-language profiles (normalization, case folding, segmentation) with
//!   pluggable external segmenters
//! - Gzip-compressed table files, loaded lazily and cached once per language
//! - Phrase frequency estimates for text not tabulated as a whole
//!
//! # Example
//!
//! ```rust,no_run
//! use lexfreq_tokenizer::Lexicon;
//! use std::path::Path;
//!
//! let lexicon = Lexicon::open(Path::new("data"))?;
//! let freq = lexicon.word_frequency("café", "fr-CA", 0.0)?;
//! println!("{} {:?}", freq, lexicon.tokenize("can't stop 😂", "en")?);
//! println!("{}", lexicon.random_ascii_words("en", 5, 12)?);
//! # Ok::<(), lexfreq_tokenizer::FreqError>(())
//! ```

// Re-export core types
pub use lexfreq_core::{
    cb_to_freq, freq_to_cb, Bucket, FreqError, FrequencyTable, LanguageIdentity,
    LanguageResolver, LanguageTag, Quantizer, Result, DEFAULT_CUTOFF_CB,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{
    combine_frequencies, LanguageProfile, ProfileRegistry, Segmentation, Tokenizer,
    TokenizerBuilder,
};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{
    CaseMapping, NormalizationForm, Normalizer, PresegmentedText, Segmenter, Splitter,
};

// IO/Serialization
pub mod io;
pub use io::{TableLoader, TableSaver, DEFAULT_WORDLIST};

// Table storage
pub mod store;
pub use store::TableStore;

// Sampling
pub mod sampler;
pub use sampler::{Charset, SampleRequest};

// Lookup facade
pub mod lexicon;
pub use lexicon::{Lexicon, LexiconBuilder, LexiconConfig};

// Utilities
pub mod utils;
pub use utils::{CacheStats, TableCache};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
