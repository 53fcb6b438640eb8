//! Frequency table store.
//!
//! A store is bound to one wordlist. It lists the tables present for that
//! wordlist when opened and loads each one lazily through a [`TableCache`].

use crate::io::{parse_table_filename, TableLoader, DEFAULT_WORDLIST};
use crate::utils::TableCache;
use compact_str::CompactString;
use lexfreq_core::{FreqError, FrequencyTable, LanguageIdentity, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lazily loading, caching table store.
#[derive(Debug)]
pub struct TableStore {
    /// Wordlist the store serves
    wordlist: CompactString,
    /// Table files found on disk
    files: BTreeMap<LanguageIdentity, PathBuf>,
    /// Every language with a table, on disk or in memory
    available: BTreeSet<LanguageIdentity>,
    /// Loaded tables
    cache: TableCache,
}

impl TableStore {
    /// Open the tables of `wordlist` found in `dir`.
    ///
    /// Only the directory listing is read; tables are loaded on first use.
    pub fn open(dir: &Path, wordlist: &str) -> Result<Self> {
        if wordlist.is_empty() || wordlist.contains(['_', '/', '\\']) {
            return Err(FreqError::InvalidConfig(format!(
                "Invalid wordlist name {:?}",
                wordlist
            )));
        }

        let entries = std::fs::read_dir(dir).map_err(|e| FreqError::io(dir, e))?;
        let mut files = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| FreqError::io(dir, e))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(language) = parse_table_filename(name, wordlist) {
                files.insert(language, entry.path());
            }
        }

        log::info!(
            "Found {} {} tables in {}",
            files.len(),
            wordlist,
            dir.display()
        );

        let available = files.keys().cloned().collect();
        Ok(Self {
            wordlist: CompactString::new(wordlist),
            files,
            available,
            cache: TableCache::new(),
        })
    }

    /// Store serving already built tables, with no backing directory.
    pub fn from_tables(tables: impl IntoIterator<Item = FrequencyTable>) -> Self {
        let cache = TableCache::new();
        let mut available = BTreeSet::new();
        for table in tables {
            available.insert(table.language().clone());
            cache.insert(table);
        }
        Self {
            wordlist: CompactString::new(DEFAULT_WORDLIST),
            files: BTreeMap::new(),
            available,
            cache,
        }
    }

    /// Add an in-memory table, replacing any table for the same language.
    pub fn insert(&mut self, table: FrequencyTable) {
        self.available.insert(table.language().clone());
        self.cache.insert(table);
    }

    /// Wordlist this store serves.
    pub fn wordlist(&self) -> &str {
        &self.wordlist
    }

    /// Languages with a table.
    pub fn available_languages(&self) -> &BTreeSet<LanguageIdentity> {
        &self.available
    }

    /// Load the table for a resolved identity.
    ///
    /// The first call per language reads the file; later calls return the
    /// same cached `Arc`. Fails with [`FreqError::UnsupportedLanguage`] if
    /// no table exists for `language`.
    pub fn load(&self, language: &LanguageIdentity) -> Result<Arc<FrequencyTable>> {
        if !self.available.contains(language) {
            return Err(FreqError::UnsupportedLanguage(language.to_string()));
        }
        self.cache.get_or_load(language, || self.read_table(language))
    }

    /// Table cache backing this store.
    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    fn read_table(&self, language: &LanguageIdentity) -> Result<FrequencyTable> {
        let path = self
            .files
            .get(language)
            .ok_or_else(|| FreqError::UnsupportedLanguage(language.to_string()))?;

        let table = TableLoader::load(path)?;
        if table.language() != language {
            return Err(FreqError::InvalidTable(format!(
                "{} holds a {} table, expected {}",
                path.display(),
                table.language(),
                language
            )));
        }

        log::info!("Loaded {} table from {}", language, path.display());
        Ok(table)
    }
}
