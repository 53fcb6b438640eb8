//! Format definitions for frequency table files.
//!
//! A table file is gzip-compressed JSON:
//!
//! ```json
//! {"format": "cB", "version": 1, "language": "en",
//!  "buckets": [{"cb": -130, "tokens": ["the"]}, {"cb": -151, "tokens": ["of", "and"]}]}
//! ```
//!
//! Buckets are ordered by strictly decreasing `cb`, and every `cb` is `<= 0`.

use lexfreq_core::LanguageIdentity;
use serde::{Deserialize, Serialize};

/// Value of the `format` field.
pub const FORMAT_NAME: &str = "cB";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// File extension of table files.
pub const TABLE_EXTENSION: &str = "cbpack.gz";

/// Wordlist used when none is named.
pub const DEFAULT_WORDLIST: &str = "combined";

/// One serialized bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedBucket {
    /// Centibel level shared by the tokens
    pub cb: i32,
    /// Tokens in rank order
    pub tokens: Vec<String>,
}

/// Complete table file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedTable {
    /// Format marker, always `"cB"`
    pub format: String,
    /// Format version
    pub version: u32,
    /// Language the table was built for
    pub language: LanguageIdentity,
    /// Buckets in strictly decreasing cB order
    pub buckets: Vec<SerializedBucket>,
}

/// File name for a wordlist/language pair, e.g. `combined_en.cbpack.gz`.
pub fn table_filename(wordlist: &str, language: &LanguageIdentity) -> String {
    format!("{}_{}.{}", wordlist, language, TABLE_EXTENSION)
}

/// Language named by a table file name, if it belongs to `wordlist`.
pub fn parse_table_filename(filename: &str, wordlist: &str) -> Option<LanguageIdentity> {
    let stem = filename.strip_suffix(TABLE_EXTENSION)?.strip_suffix('.')?;
    let language = stem.strip_prefix(wordlist)?.strip_prefix('_')?;
    let id: LanguageIdentity = language.parse().ok()?;
    // Reject names that only parse after normalization ("EN", "en_GB")
    (id.as_str() == language).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let table = SerializedTable {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            language: "en".parse().unwrap(),
            buckets: vec![SerializedBucket {
                cb: -130,
                tokens: vec!["the".to_string()],
            }],
        };

        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"format\":\"cB\""));
        let deserialized: SerializedTable = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, table);
    }

    #[test]
    fn test_table_filename() {
        let zh_hant: LanguageIdentity = "zh-Hant".parse().unwrap();
        let name = table_filename("twitter", &zh_hant);
        assert_eq!(name, "twitter_zh-Hant.cbpack.gz");
        assert_eq!(parse_table_filename(&name, "twitter"), Some(zh_hant));
        assert_eq!(parse_table_filename(&name, "combined"), None);
    }

    #[test]
    fn test_parse_table_filename_rejects_noise() {
        assert_eq!(parse_table_filename("combined_en.json", "combined"), None);
        assert_eq!(parse_table_filename("combined_EN.cbpack.gz", "combined"), None);
        assert_eq!(parse_table_filename("combined_.cbpack.gz", "combined"), None);
    }
}
