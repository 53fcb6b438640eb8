//! Quantizing frequencies into a bucketed table.

use super::counter::TokenCounts;
use compact_str::CompactString;
use lexfreq_core::{
    FreqError, FrequencyTable, LanguageIdentity, Quantizer, Result, DEFAULT_CUTOFF_CB,
};

/// Configuration for table building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Lowest cB level kept; rarer tokens are dropped
    pub cutoff_cb: i32,
    /// Minimum raw count for a token to be considered
    pub min_count: u64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            cutoff_cb: DEFAULT_CUTOFF_CB,
            min_count: 0,
        }
    }
}

impl BuildConfig {
    /// Set the cutoff as a number of centibel buckets below 0 cB.
    pub fn with_buckets(buckets: u32) -> Result<Self> {
        let cutoff_cb = i32::try_from(buckets)
            .map(|b| -b)
            .map_err(|_| FreqError::InvalidConfig(format!("Too many buckets: {}", buckets)))?;
        Ok(Self {
            cutoff_cb,
            ..Self::default()
        })
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.cutoff_cb > 0 {
            return Err(FreqError::InvalidConfig(format!(
                "cutoff_cb must be <= 0, got {}",
                self.cutoff_cb
            )));
        }
        Ok(())
    }
}

/// Turns frequencies into a [`FrequencyTable`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    config: BuildConfig,
    quantizer: Quantizer,
}

impl TableBuilder {
    /// Create a builder from a validated configuration.
    pub fn new(config: BuildConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            quantizer: Quantizer::new(config.cutoff_cb)?,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a table from raw counts, applying `min_count` first.
    pub fn build_from_counts(
        &self,
        language: LanguageIdentity,
        counts: &TokenCounts,
    ) -> Result<FrequencyTable> {
        let mut counts = counts.clone();
        counts.retain_min_count(self.config.min_count);
        self.build(language, counts.frequencies())
    }

    /// Build a table from `(token, frequency)` pairs.
    ///
    /// Tokens are ranked by descending frequency, ties kept in input order,
    /// then quantized. Tokens below the cutoff or with no positive frequency
    /// are dropped. Fails with [`FreqError::InvalidFrequency`] for a
    /// frequency above 1.
    pub fn build(
        &self,
        language: LanguageIdentity,
        mut freqs: Vec<(CompactString, f64)>,
    ) -> Result<FrequencyTable> {
        freqs.retain(|(_, freq)| *freq > 0.0);
        freqs.sort_by(|a, b| b.1.total_cmp(&a.1));

        let total = freqs.len();
        let mut buckets: Vec<(i32, Vec<CompactString>)> = Vec::new();
        for (token, freq) in freqs {
            let Some(cb) = self.quantizer.quantize(freq)? else {
                // Sorted, so everything after is below the cutoff too
                break;
            };
            match buckets.last_mut() {
                Some((last_cb, tokens)) if *last_cb == cb => tokens.push(token),
                _ => buckets.push((cb, vec![token])),
            }
        }

        let table = FrequencyTable::from_buckets(language, buckets)?;
        log::info!(
            "Built {} table: {} of {} tokens in {} buckets (cutoff {} cB)",
            table.language(),
            table.len(),
            total,
            table.buckets().len(),
            self.quantizer.cutoff_cb()
        );
        Ok(table)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            config: BuildConfig::default(),
            quantizer: Quantizer::default(),
        }
    }
}
