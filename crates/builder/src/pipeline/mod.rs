//! Build-time pipeline from corpus counts to frequency tables.
//!
//! Count files are read and re-tokenized per corpus, normalized to
//! frequencies, averaged across corpora and quantized into cB buckets.

pub mod counter;
pub mod merge;
pub mod table;

pub use counter::{TokenCounts, WordCounter};
pub use merge::{merge_counts, merge_freqs};
pub use table::{BuildConfig, TableBuilder};

use compact_str::CompactString;
use lexfreq_core::{FrequencyTable, LanguageIdentity, Result};
use lexfreq_tokenizer::Tokenizer;
use rayon::prelude::*;
use std::path::PathBuf;

/// Build one language's table from count files, one file per corpus.
///
/// Files are read in parallel. Each corpus is normalized on its own and the
/// results averaged with [`merge_freqs`].
pub fn build_from_count_files(
    language: &LanguageIdentity,
    paths: &[PathBuf],
    tokenizer: &Tokenizer,
    config: BuildConfig,
) -> Result<FrequencyTable> {
    let builder = TableBuilder::new(config)?;

    let per_corpus: Vec<Vec<(CompactString, f64)>> = paths
        .par_iter()
        .map(|path| -> Result<Vec<(CompactString, f64)>> {
            let mut counter = WordCounter::with_tokenizer(language.clone(), tokenizer.clone());
            counter.read_counts(path)?;
            let mut counts = counter.into_counts();
            counts.retain_min_count(config.min_count);
            Ok(counts.frequencies())
        })
        .collect::<Result<_>>()?;

    builder.build(language.clone(), merge_freqs(&per_corpus))
}
