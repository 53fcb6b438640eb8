//! Bucketed frequency table storage and lookup.
//!
//! Tokens are grouped into buckets sharing one centibel level. Buckets are
//! kept in strictly decreasing cB order, and an `AHashMap` indexes each token
//! to its bucket for fast lookups. Frequencies are decoded once per bucket
//! when the table is built.

use crate::codec::cb_to_freq;
use crate::error::{FreqError, Result};
use crate::language::LanguageIdentity;
use ahash::AHashMap;
use compact_str::CompactString;

/// Tokens sharing one quantized frequency level.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Centibel level (always <= 0)
    cb: i32,
    /// Decoded frequency for `cb`
    freq: f64,
    /// Tokens in build-time rank order
    tokens: Vec<CompactString>,
}

impl Bucket {
    /// Create a bucket, decoding its level.
    pub fn new(cb: i32, tokens: Vec<CompactString>) -> Result<Self> {
        let freq = cb_to_freq(cb)?;
        Ok(Self { cb, freq, tokens })
    }

    /// Centibel level of every token in this bucket.
    #[inline]
    pub fn cb(&self) -> i32 {
        self.cb
    }

    /// Decoded frequency of every token in this bucket.
    #[inline]
    pub fn freq(&self) -> f64 {
        self.freq
    }

    /// Tokens in rank order.
    #[inline]
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }
}

/// Immutable per-language table of token frequencies.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Language this table was built for
    language: LanguageIdentity,
    /// Buckets in strictly decreasing cB order
    buckets: Vec<Bucket>,
    /// Token -> bucket index
    index: AHashMap<CompactString, u32>,
}

impl FrequencyTable {
    /// Build a table from `(cB, tokens)` buckets.
    ///
    /// Empty buckets are dropped. Fails with [`FreqError::InvalidFrequencyLevel`]
    /// for a positive level and [`FreqError::InvalidTable`] when levels are not
    /// strictly decreasing or a token appears twice.
    pub fn from_buckets<I>(language: LanguageIdentity, buckets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, Vec<CompactString>)>,
    {
        let mut table = Self {
            language,
            buckets: Vec::new(),
            index: AHashMap::new(),
        };

        let mut previous: Option<i32> = None;
        for (cb, tokens) in buckets {
            if let Some(prev) = previous {
                if cb >= prev {
                    return Err(FreqError::InvalidTable(format!(
                        "bucket levels must strictly decrease, found {} cB after {} cB",
                        cb, prev
                    )));
                }
            }
            previous = Some(cb);

            let bucket = Bucket::new(cb, tokens)?;
            if bucket.tokens.is_empty() {
                continue;
            }

            let bucket_id = table.buckets.len() as u32;
            table.index.reserve(bucket.tokens.len());
            for token in &bucket.tokens {
                if table.index.insert(token.clone(), bucket_id).is_some() {
                    return Err(FreqError::InvalidTable(format!(
                        "token {:?} appears in more than one bucket",
                        token.as_str()
                    )));
                }
            }
            table.buckets.push(bucket);
        }

        Ok(table)
    }

    /// Language this table was built for.
    #[inline]
    pub fn language(&self) -> &LanguageIdentity {
        &self.language
    }

    /// Buckets in decreasing frequency order.
    #[inline]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Centibel level of an already-normalized token.
    #[inline]
    pub fn get_cb(&self, token: &str) -> Option<i32> {
        self.bucket_of(token).map(Bucket::cb)
    }

    /// Frequency of an already-normalized token.
    #[inline]
    pub fn get_freq(&self, token: &str) -> Option<f64> {
        self.bucket_of(token).map(Bucket::freq)
    }

    /// Whether the table contains the token.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The most frequent token, if any.
    pub fn most_common(&self) -> Option<&str> {
        self.iter().next().map(|(token, _)| token)
    }

    /// Iterate over `(token, frequency)` from most to least frequent.
    ///
    /// Ties keep build-time order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.buckets.iter().flat_map(|bucket| {
            bucket
                .tokens
                .iter()
                .map(move |token| (token.as_str(), bucket.freq))
        })
    }

    /// Iterate over `(token, cB)` from most to least frequent.
    pub fn iter_cb(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.buckets.iter().flat_map(|bucket| {
            bucket
                .tokens
                .iter()
                .map(move |token| (token.as_str(), bucket.cb))
        })
    }

    /// Up to `n` tokens, most frequent first.
    pub fn top_n(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).map(|(token, _)| token).collect()
    }

    fn bucket_of(&self, token: &str) -> Option<&Bucket> {
        self.index
            .get(token)
            .and_then(|&id| self.buckets.get(id as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(tokens: &[&str]) -> Vec<CompactString> {
        tokens.iter().map(|t| CompactString::new(t)).collect()
    }

    fn sample_table() -> FrequencyTable {
        FrequencyTable::from_buckets(
            "en".parse().unwrap(),
            vec![
                (-100, words(&["the"])),
                (-150, words(&["of", "and"])),
                (-180, vec![]),
                (-300, words(&["lol"])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = sample_table();
        assert_eq!(table.get_cb("the"), Some(-100));
        assert_eq!(table.get_cb("and"), Some(-150));
        assert!((table.get_freq("the").unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(table.get_freq("missing"), None);
        assert!(table.contains("lol"));
        assert_eq!(table.len(), 4);
        assert_eq!(table.language().as_str(), "en");
    }

    #[test]
    fn test_empty_buckets_dropped() {
        let table = sample_table();
        assert_eq!(table.buckets().len(), 3);
        assert_eq!(table.get_cb("lol"), Some(-300));
    }

    #[test]
    fn test_rank_order_is_stable() {
        let table = sample_table();
        assert_eq!(table.top_n(3), vec!["the", "of", "and"]);
        assert_eq!(table.top_n(100).len(), 4);
        assert_eq!(table.top_n(0), Vec::<&str>::new());
        assert_eq!(table.most_common(), Some("the"));
        let levels: Vec<i32> = table.iter_cb().map(|(_, cb)| cb).collect();
        assert_eq!(levels, vec![-100, -150, -150, -300]);
    }

    #[test]
    fn test_rejects_non_decreasing_levels() {
        let result = FrequencyTable::from_buckets(
            "en".parse().unwrap(),
            vec![(-200, words(&["a"])), (-200, words(&["b"]))],
        );
        assert!(matches!(result, Err(FreqError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_positive_level() {
        let result =
            FrequencyTable::from_buckets("en".parse().unwrap(), vec![(10, words(&["a"]))]);
        assert!(matches!(result, Err(FreqError::InvalidFrequencyLevel(10))));
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let result = FrequencyTable::from_buckets(
            "en".parse().unwrap(),
            vec![(-100, words(&["a"])), (-200, words(&["a"]))],
        );
        assert!(matches!(result, Err(FreqError::InvalidTable(_))));
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_buckets("en".parse().unwrap(), Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.most_common(), None);
    }
}
