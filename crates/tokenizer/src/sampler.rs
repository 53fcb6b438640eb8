//! Random word sampling for passphrase-style output.
//!
//! Words are drawn uniformly, with replacement, from the `2^bits` most
//! frequent tokens a charset allows, so each word carries exactly
//! `bits_per_word` bits of entropy.

use lexfreq_core::{FreqError, FrequencyTable, Result};
use rand::Rng;

/// Characters a sampled word may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Any token
    #[default]
    Any,
    /// Tokens made only of characters up to `~` (U+007E)
    Ascii,
}

impl Charset {
    /// Check whether a token is allowed.
    #[inline]
    pub fn allows(&self, token: &str) -> bool {
        match self {
            Charset::Any => true,
            Charset::Ascii => token.chars().all(|c| c <= '~'),
        }
    }
}

/// Parameters of one sampling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    /// Number of words to draw
    pub word_count: usize,
    /// Entropy per word; `0` always yields the top token
    pub bits_per_word: u32,
    /// Charset restriction
    pub charset: Charset,
}

impl Default for SampleRequest {
    fn default() -> Self {
        Self {
            word_count: 5,
            bits_per_word: 12,
            charset: Charset::Any,
        }
    }
}

impl SampleRequest {
    /// Request `word_count` words of `bits_per_word` bits each.
    pub fn new(word_count: usize, bits_per_word: u32) -> Self {
        Self {
            word_count,
            bits_per_word,
            charset: Charset::Any,
        }
    }

    /// Restrict the charset.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Number of equally likely candidates the request needs.
    ///
    /// `None` when `2^bits_per_word` does not fit in a `u64`.
    pub fn n_choices(&self) -> Option<u64> {
        1u64.checked_shl(self.bits_per_word)
    }
}

/// The candidates a request draws from, most frequent first.
///
/// Fails with [`FreqError::InsufficientEntropySource`] when the charset
/// leaves fewer than `2^bits_per_word` tokens.
pub fn candidates<'t>(table: &'t FrequencyTable, request: &SampleRequest) -> Result<Vec<&'t str>> {
    let insufficient = |available: usize| FreqError::InsufficientEntropySource {
        bits_per_word: request.bits_per_word,
        available,
        required: request.n_choices().unwrap_or(u64::MAX),
    };

    let n_choices = request
        .n_choices()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| insufficient(table.len()))?;

    let picked: Vec<&str> = table
        .iter()
        .map(|(token, _)| token)
        .filter(|token| request.charset.allows(token))
        .take(n_choices)
        .collect();

    if picked.len() < n_choices {
        return Err(insufficient(picked.len()));
    }
    Ok(picked)
}

/// Draw words using the thread-local CSPRNG and join them with spaces.
pub fn sample_words(table: &FrequencyTable, request: &SampleRequest) -> Result<String> {
    sample_words_with_rng(table, request, &mut rand::rng())
}

/// Draw words using `rng` and join them with spaces.
pub fn sample_words_with_rng<R: Rng>(
    table: &FrequencyTable,
    request: &SampleRequest,
    rng: &mut R,
) -> Result<String> {
    let choices = candidates(table, request)?;
    let words: Vec<&str> = (0..request.word_count)
        .map(|_| choices[rng.random_range(0..choices.len())])
        .collect();
    Ok(words.join(" "))
}
