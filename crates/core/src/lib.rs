//! Lexfreq-core - frequency codec, tables and language resolution
//!
//! This crate provides the data structures shared by the lookup engine and
//! the table builder.
//!
//! # Features
//!
//! - Logarithmic centibel codec (`cb_to_freq`, `freq_to_cb`) and quantization
//! - Immutable bucketed `FrequencyTable` with `AHashMap` token index
//! - Locale tag grammar and a `LanguageResolver` with macrolanguage, script
//!   and region fallback
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use lexfreq_core::{cb_to_freq, FrequencyTable, LanguageResolver};
//! use compact_str::CompactString;
//!
//! let table = FrequencyTable::from_buckets(
//!     "en".parse()?,
//!     vec![(-130, vec![CompactString::new("the")])],
//! )?;
//! assert_eq!(table.get_cb("the"), Some(-130));
//! assert_eq!(cb_to_freq(0)?, 1.0);
//!
//! let resolver = LanguageResolver::new(vec![table.language().clone()]);
//! assert_eq!(resolver.resolve("en-GB")?.as_str(), "en");
//! # Ok::<(), lexfreq_core::FreqError>(())
//! ```

pub mod error;
pub use error::{FreqError, Result};

pub mod codec;
pub use codec::{cb_to_freq, freq_to_cb, Quantizer, DEFAULT_CUTOFF_CB};

// Table storage
pub mod core;
pub use core::{Bucket, FrequencyTable};

// Language identities and resolution
pub mod language;
pub use language::{LanguageIdentity, LanguageResolver, LanguageTag};
