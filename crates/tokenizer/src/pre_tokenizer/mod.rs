//! Pre-tokenization pipeline.
//!
//! This module provides the operations applied to raw text before table
//! lookup: normalization and case folding, structural splitting, and the
//! hook for external segmenters.

pub mod normalize;
pub mod segmenter;
pub mod split;

pub use normalize::{CaseMapping, NormalizationForm, Normalizer};
pub use segmenter::{PresegmentedText, Segmenter};
pub use split::Splitter;
