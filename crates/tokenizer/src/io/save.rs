//! Save functionality for frequency tables.
//!
//! Tables are written as gzip-compressed JSON, see [`super::format`].

use super::format::{
    table_filename, SerializedBucket, SerializedTable, FORMAT_NAME, FORMAT_VERSION,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use lexfreq_core::{FreqError, FrequencyTable, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Table saver - writes a built table to disk.
pub struct TableSaver<'a> {
    /// Table reference
    table: &'a FrequencyTable,
}

impl<'a> TableSaver<'a> {
    /// Create a new table saver.
    pub fn new(table: &'a FrequencyTable) -> Self {
        Self { table }
    }

    /// Save the table to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                FreqError::Save(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(path).map_err(|e| {
            FreqError::Save(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        self.write_to(BufWriter::new(file))?;

        log::debug!(
            "Saved {} table ({} tokens) to {}",
            self.table.language(),
            self.table.len(),
            path.display()
        );
        Ok(())
    }

    /// Save the table into `dir` under its wordlist file name.
    ///
    /// Returns the path written.
    pub fn save_to_dir(&self, dir: &Path, wordlist: &str) -> Result<PathBuf> {
        let path = dir.join(table_filename(wordlist, self.table.language()));
        self.save(&path)?;
        Ok(path)
    }

    /// Write the compressed table to a stream.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = GzEncoder::new(writer, Compression::best());
        serde_json::to_writer(&mut encoder, &self.serialize())
            .map_err(|e| FreqError::Save(format!("Failed to serialize table: {}", e)))?;
        let mut inner = encoder
            .finish()
            .map_err(|e| FreqError::Save(format!("Failed to compress table: {}", e)))?;
        inner
            .flush()
            .map_err(|e| FreqError::Save(format!("Failed to flush table: {}", e)))
    }

    /// Serialize the table to a structure.
    pub fn serialize(&self) -> SerializedTable {
        let buckets = self
            .table
            .buckets()
            .iter()
            .map(|bucket| SerializedBucket {
                cb: bucket.cb(),
                tokens: bucket.tokens().iter().map(|t| t.to_string()).collect(),
            })
            .collect();

        SerializedTable {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            language: self.table.language().clone(),
            buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load::TableLoader;
    use compact_str::CompactString;

    fn sample_table() -> FrequencyTable {
        FrequencyTable::from_buckets(
            "de".parse().unwrap(),
            vec![
                (-140, vec![CompactString::from("der")]),
                (-165, vec![CompactString::from("die"), CompactString::from("und")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_serialize() {
        let table = sample_table();
        let serialized = TableSaver::new(&table).serialize();

        assert_eq!(serialized.format, "cB");
        assert_eq!(serialized.language.as_str(), "de");
        assert_eq!(serialized.buckets.len(), 2);
        assert_eq!(serialized.buckets[1].tokens, vec!["die", "und"]);
    }

    #[test]
    fn test_save_to_dir_uses_wordlist_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let table = sample_table();

        let path = TableSaver::new(&table)
            .save_to_dir(&temp_dir.path().join("nested"), "small")
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "small_de.cbpack.gz");

        let loaded = TableLoader::load(&path).unwrap();
        assert_eq!(loaded.get_cb("und"), Some(-165));
        assert_eq!(loaded.language(), table.language());
    }
}
