//! Logarithmic frequency codec.
//!
//! Frequencies are stored as integer centibels (cB): `cB = round(100 * log10(freq))`.
//! A frequency of 1.0 is 0 cB, 0.1 is -100 cB and one-in-a-million is -600 cB,
//! so every valid level is `<= 0`.

use crate::error::{FreqError, Result};

/// Default lowest level kept in a table (one occurrence per million tokens).
pub const DEFAULT_CUTOFF_CB: i32 = -600;

/// Decode a centibel level into a frequency.
///
/// Returns [`FreqError::InvalidFrequencyLevel`] for positive levels.
pub fn cb_to_freq(cb: i32) -> Result<f64> {
    if cb > 0 {
        return Err(FreqError::InvalidFrequencyLevel(cb));
    }
    Ok(10f64.powf(cb as f64 / 100.0))
}

/// Encode a frequency as the nearest centibel level.
///
/// Only the build-time direction needs this. The frequency must be in `(0, 1]`.
pub fn freq_to_cb(freq: f64) -> Result<i32> {
    if !(freq > 0.0 && freq <= 1.0) {
        return Err(FreqError::InvalidFrequency(freq));
    }
    Ok((100.0 * freq.log10()).round() as i32)
}

/// Build-time quantization policy: encode, then drop anything below the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantizer {
    cutoff_cb: i32,
}

impl Quantizer {
    /// Create a quantizer keeping levels `>= cutoff_cb`.
    ///
    /// Returns an error if the cutoff is positive.
    pub fn new(cutoff_cb: i32) -> Result<Self> {
        if cutoff_cb > 0 {
            return Err(FreqError::InvalidFrequencyLevel(cutoff_cb));
        }
        Ok(Self { cutoff_cb })
    }

    /// The lowest level this quantizer keeps.
    #[inline]
    pub fn cutoff_cb(&self) -> i32 {
        self.cutoff_cb
    }

    /// Quantize a frequency, returning `None` when it falls below the cutoff.
    pub fn quantize(&self, freq: f64) -> Result<Option<i32>> {
        let cb = freq_to_cb(freq)?;
        Ok((cb >= self.cutoff_cb).then_some(cb))
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self {
            cutoff_cb: DEFAULT_CUTOFF_CB,
        }
    }
}
