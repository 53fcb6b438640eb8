//! Lexfreq-builder - frequency table building
//!
//! This crate provides the build-time direction of lexfreq: turning corpus
//! count files into quantized, bucketed frequency tables that the lookup
//! engine loads.
//!
//! # Features
//!
//! - Count files re-tokenized with the runtime tokenizer, so build-time and
//!   lookup-time units agree
//! - Parallel merging of counts from several corpora
//! - Per-corpus normalization and averaging of frequencies
//! - Configurable cB cutoff
//!
//! # Example
//!
//! ```rust
//! use lexfreq_builder::{BuildConfig, TableBuilder, WordCounter};
//!
//! let mut counter = WordCounter::new("en".parse()?);
//! counter.add_raw_count("The", 900);
//! counter.add_raw_count("can't", 100);
//!
//! let builder = TableBuilder::new(BuildConfig::default())?;
//! let table = builder.build_from_counts("en".parse()?, counter.counts())?;
//! assert_eq!(table.most_common(), Some("the"));
//! # Ok::<(), lexfreq_builder::FreqError>(())
//! ```

pub use lexfreq_core::{FreqError, Result};

// Build pipeline
pub mod pipeline;
pub use pipeline::{
    build_from_count_files, merge_counts, merge_freqs, BuildConfig, TableBuilder, TokenCounts,
    WordCounter,
};
