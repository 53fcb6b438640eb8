//! Token counting for table building.
//!
//! Raw corpus counts are re-tokenized with the runtime [`Tokenizer`], so the
//! units counted here are exactly the units looked up later.

use ahash::AHashMap;
use compact_str::CompactString;
use lexfreq_core::{FreqError, LanguageIdentity, Result};
use lexfreq_tokenizer::Tokenizer;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Token counts in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
    /// Tokens in first-seen order
    tokens: Vec<CompactString>,
    /// Count per token, parallel to `tokens`
    counts: Vec<u64>,
    /// Token -> position
    index: AHashMap<CompactString, usize>,
}

impl TokenCounts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of a token.
    pub fn add(&mut self, token: &str, count: u64) {
        match self.index.get(token) {
            Some(&pos) => self.counts[pos] += count,
            None => {
                let token = CompactString::new(token);
                self.index.insert(token.clone(), self.tokens.len());
                self.tokens.push(token);
                self.counts.push(count);
            }
        }
    }

    /// Fold another set of counts into this one.
    ///
    /// Tokens new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: TokenCounts) {
        for (token, count) in other.tokens.into_iter().zip(other.counts) {
            match self.index.get(&token) {
                Some(&pos) => self.counts[pos] += count,
                None => {
                    self.index.insert(token.clone(), self.tokens.len());
                    self.tokens.push(token);
                    self.counts.push(count);
                }
            }
        }
    }

    /// Count for a token.
    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&pos| self.counts[pos])
    }

    /// Get the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no token was counted.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the total count of all token occurrences.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.tokens
            .iter()
            .map(|t| t.as_str())
            .zip(self.counts.iter().copied())
    }

    /// Drop tokens seen fewer than `min_count` times.
    pub fn retain_min_count(&mut self, min_count: u64) {
        if min_count <= 1 {
            return;
        }
        let kept: TokenCounts = self
            .iter()
            .filter(|&(_, count)| count >= min_count)
            .fold(TokenCounts::new(), |mut acc, (token, count)| {
                acc.add(token, count);
                acc
            });
        *self = kept;
    }

    /// Normalize counts to frequencies summing to 1, in first-seen order.
    pub fn frequencies(&self) -> Vec<(CompactString, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let total = total as f64;
        self.tokens
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, count)| **count > 0)
            .map(|(token, count)| (token.clone(), *count as f64 / total))
            .collect()
    }
}

/// Counter that tokenizes its input for one language.
pub struct WordCounter {
    /// Target language
    language: LanguageIdentity,
    /// Runtime tokenizer
    tokenizer: Tokenizer,
    /// Accumulated counts
    counts: TokenCounts,
}

impl WordCounter {
    /// Create a counter using the built-in language profiles.
    pub fn new(language: LanguageIdentity) -> Self {
        Self::with_tokenizer(language, Tokenizer::new())
    }

    /// Create a counter using a configured tokenizer.
    pub fn with_tokenizer(language: LanguageIdentity, tokenizer: Tokenizer) -> Self {
        Self {
            language,
            tokenizer,
            counts: TokenCounts::new(),
        }
    }

    /// Target language.
    pub fn language(&self) -> &LanguageIdentity {
        &self.language
    }

    /// Add a raw corpus entry; its count goes to every token it splits into.
    pub fn add_raw_count(&mut self, raw: &str, count: u64) {
        for token in self.tokenizer.tokenize(raw, &self.language) {
            self.counts.add(&token, count);
        }
    }

    /// Tokenize running text and count each token once per occurrence.
    pub fn add_text(&mut self, text: &str) {
        for token in self.tokenizer.tokenize(text, &self.language) {
            self.counts.add(&token, 1);
        }
    }

    /// Read a count file of `token,count` or `token<TAB>count` lines.
    ///
    /// Blank lines are ignored and malformed lines skipped with a warning.
    /// Returns the number of lines used.
    pub fn read_counts(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|e| FreqError::io(path, e))?;
        let reader = BufReader::new(file);

        let mut used = 0;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| FreqError::io(path, e))?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            match parse_count_line(line) {
                Some((raw, count)) => {
                    self.add_raw_count(raw, count);
                    used += 1;
                }
                None => log::warn!(
                    "{}:{}: skipping malformed count line {:?}",
                    path.display(),
                    line_no + 1,
                    line
                ),
            }
        }

        log::info!(
            "Read {} entries for {} from {}",
            used,
            self.language,
            path.display()
        );
        Ok(used)
    }

    /// Counts so far.
    pub fn counts(&self) -> &TokenCounts {
        &self.counts
    }

    /// Consume the counter, returning its counts.
    pub fn into_counts(self) -> TokenCounts {
        self.counts
    }
}

/// Split a count line at its last tab, or else its last comma.
///
/// Counts written as floats (`12.0`) are accepted and rounded.
fn parse_count_line(line: &str) -> Option<(&str, u64)> {
    let (raw, count) = line.rsplit_once('\t').or_else(|| line.rsplit_once(','))?;
    let count = count.trim();
    let count = match count.parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            let value = count.parse::<f64>().ok()?;
            if !value.is_finite() || value < 0.0 {
                return None;
            }
            value.round() as u64
        }
    };
    (!raw.is_empty()).then_some((raw, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn id(code: &str) -> LanguageIdentity {
        code.parse().unwrap()
    }

    #[test]
    fn test_token_counts_keep_first_seen_order() {
        let mut counts = TokenCounts::new();
        counts.add("b", 1);
        counts.add("a", 2);
        counts.add("b", 3);

        let entries: Vec<_> = counts.iter().collect();
        assert_eq!(entries, vec![("b", 4), ("a", 2)]);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.get("a"), Some(2));
        assert_eq!(counts.get("c"), None);
    }

    #[test]
    fn test_merge() {
        let mut first = TokenCounts::new();
        first.add("x", 1);
        let mut second = TokenCounts::new();
        second.add("y", 5);
        second.add("x", 2);

        first.merge(second);
        let entries: Vec<_> = first.iter().collect();
        assert_eq!(entries, vec![("x", 3), ("y", 5)]);
    }

    #[test]
    fn test_frequencies_and_min_count() {
        let mut counts = TokenCounts::new();
        counts.add("a", 3);
        counts.add("b", 1);

        let freqs = counts.frequencies();
        assert_eq!(freqs[0], (CompactString::new("a"), 0.75));
        assert_eq!(freqs[1], (CompactString::new("b"), 0.25));

        counts.retain_min_count(2);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("a"), Some(3));
        assert!(TokenCounts::new().frequencies().is_empty());
    }

    #[test]
    fn test_raw_counts_are_retokenized() {
        let mut counter = WordCounter::new(id("en"));
        counter.add_raw_count("Can't", 10);
        counter.add_raw_count("can.t", 4);
        counter.add_raw_count("😂test", 1);

        let counts = counter.counts();
        assert_eq!(counts.get("can't"), Some(10));
        assert_eq!(counts.get("can"), Some(4));
        assert_eq!(counts.get("t"), Some(4));
        assert_eq!(counts.get("😂"), Some(1));
        assert_eq!(counts.get("test"), Some(1));
    }

    #[test]
    fn test_add_text() {
        let mut counter = WordCounter::new(id("en"));
        counter.add_text("The cat and the hat.");
        assert_eq!(counter.counts().get("the"), Some(2));
        assert_eq!(counter.counts().get("."), None);
    }

    #[test]
    fn test_parse_count_line() {
        assert_eq!(parse_count_line("the,100"), Some(("the", 100)));
        assert_eq!(parse_count_line("a,b\t7"), Some(("a,b", 7)));
        assert_eq!(parse_count_line("lol,12.0"), Some(("lol", 12)));
        assert_eq!(parse_count_line("no count"), None);
        assert_eq!(parse_count_line("x,-1"), None);
        assert_eq!(parse_count_line(",5"), None);
    }

    #[test]
    fn test_read_counts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the,500").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "garbage").unwrap();
        writeln!(file, "Of\t300").unwrap();

        let mut counter = WordCounter::new(id("en"));
        let used = counter.read_counts(file.path()).unwrap();
        assert_eq!(used, 2);
        assert_eq!(counter.counts().get("the"), Some(500));
        assert_eq!(counter.counts().get("of"), Some(300));
    }
}
