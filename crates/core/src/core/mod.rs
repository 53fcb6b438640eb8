//! Frequency table data structures.
//!
//! This module contains the in-memory form of a per-language frequency table,
//! independent of how it is stored on disk.

pub mod table;

pub use table::{Bucket, FrequencyTable};
