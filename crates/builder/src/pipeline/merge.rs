//! Combining counts and frequencies from several corpora.

use super::counter::TokenCounts;
use ahash::AHashMap;
use compact_str::CompactString;
use rayon::prelude::*;

/// Sum raw counts across sources.
///
/// Tokens keep the order they are first seen in, scanning sources in order.
pub fn merge_counts(sources: Vec<TokenCounts>) -> TokenCounts {
    sources
        .into_par_iter()
        .reduce(TokenCounts::new, |mut acc, counts| {
            acc.merge(counts);
            acc
        })
}

/// Average normalized frequencies across sources.
///
/// A token missing from a source counts as frequency 0 there, so one large
/// corpus cannot dominate the result. Order is first-seen, as in
/// [`merge_counts`].
pub fn merge_freqs(sources: &[Vec<(CompactString, f64)>]) -> Vec<(CompactString, f64)> {
    if sources.is_empty() {
        return Vec::new();
    }
    let n = sources.len() as f64;

    let mut merged: Vec<(CompactString, f64)> = Vec::new();
    let mut index: AHashMap<CompactString, usize> = AHashMap::new();
    for source in sources {
        for (token, freq) in source {
            match index.get(token) {
                Some(&pos) => merged[pos].1 += freq / n,
                None => {
                    index.insert(token.clone(), merged.len());
                    merged.push((token.clone(), freq / n));
                }
            }
        }
    }
    merged
}
