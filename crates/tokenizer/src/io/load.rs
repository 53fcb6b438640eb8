//! Load functionality for frequency table files.

use super::format::{SerializedTable, FORMAT_NAME, FORMAT_VERSION};
use compact_str::CompactString;
use flate2::read::GzDecoder;
use lexfreq_core::{FreqError, FrequencyTable, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Table loader - reads and validates table files.
pub struct TableLoader;

impl TableLoader {
    /// Load a table from a gzip-compressed table file.
    ///
    /// # Arguments
    /// * `path` - Path of the `.cbpack.gz` file
    pub fn load(path: &Path) -> Result<FrequencyTable> {
        let file = File::open(path).map_err(|e| FreqError::io(path, e))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            FreqError::Load(msg) => FreqError::Load(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Load a table from a gzip-compressed stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<FrequencyTable> {
        let decoder = GzDecoder::new(reader);
        let serialized: SerializedTable = serde_json::from_reader(decoder)
            .map_err(|e| FreqError::Load(format!("Failed to deserialize table: {}", e)))?;
        Self::deserialize(serialized)
    }

    /// Build the in-memory table from its serialized form.
    pub fn deserialize(data: SerializedTable) -> Result<FrequencyTable> {
        if data.format != FORMAT_NAME {
            return Err(FreqError::Load(format!(
                "Unknown table format {:?}",
                data.format
            )));
        }
        if data.version != FORMAT_VERSION {
            return Err(FreqError::Load(format!(
                "Unsupported table version {} (expected {})",
                data.version, FORMAT_VERSION
            )));
        }

        let buckets = data.buckets.into_iter().map(|bucket| {
            let tokens = bucket.tokens.into_iter().map(CompactString::from).collect();
            (bucket.cb, tokens)
        });
        FrequencyTable::from_buckets(data.language, buckets)
    }
}
