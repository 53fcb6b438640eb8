//! Shared cache of loaded frequency tables.
//!
//! Each language gets one slot holding a `OnceCell`. The first caller for a
//! language runs the loader while concurrent callers for the same language
//! wait on the cell, so a table is loaded at most once per successful load.
//! A failed load leaves the cell empty and the next caller retries.

use dashmap::DashMap;
use lexfreq_core::{FrequencyTable, LanguageIdentity, Result};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

type Slot = Arc<OnceCell<Arc<FrequencyTable>>>;

/// Concurrent, load-once table cache.
#[derive(Debug, Default)]
pub struct TableCache {
    /// Language -> table slot
    slots: DashMap<LanguageIdentity, Slot>,
    /// Loader invocations that produced a table
    loads: AtomicU64,
    /// Lookups served from an initialized slot
    hits: AtomicU64,
}

impl TableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached table or load it using the provided function.
    ///
    /// # Arguments
    /// * `language` - Identity the table is keyed by
    /// * `loader` - Function to produce the table if not cached
    pub fn get_or_load<F>(&self, language: &LanguageIdentity, loader: F) -> Result<Arc<FrequencyTable>>
    where
        F: FnOnce() -> Result<FrequencyTable>,
    {
        // Clone the slot out so the shard lock is not held while loading
        let slot = self.slot(language);

        if let Some(table) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(table));
        }

        let mut loaded = false;
        let table = slot.get_or_try_init(|| {
            loaded = true;
            loader().map(Arc::new)
        })?;

        if loaded {
            self.loads.fetch_add(1, Ordering::Relaxed);
            log::debug!("Loaded {} table ({} tokens)", language, table.len());
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        Ok(Arc::clone(table))
    }

    /// Insert an already built table, replacing any cached one.
    pub fn insert(&self, table: FrequencyTable) -> Arc<FrequencyTable> {
        let table = Arc::new(table);
        let cell = OnceCell::with_value(Arc::clone(&table));
        self.slots
            .insert(table.language().clone(), Arc::new(cell));
        table
    }

    /// Cached table for a language, without loading.
    pub fn get(&self, language: &LanguageIdentity) -> Option<Arc<FrequencyTable>> {
        self.slots
            .get(language)
            .and_then(|slot| slot.get().cloned())
    }

    /// Check whether a table for the language has been loaded.
    pub fn contains(&self, language: &LanguageIdentity) -> bool {
        self.get(language).is_some()
    }

    /// Get the number of loaded tables.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Check if the cache holds no loaded table.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            loads: self.loads.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }

    fn slot(&self, language: &LanguageIdentity) -> Slot {
        if let Some(slot) = self.slots.get(language) {
            return Arc::clone(slot.value());
        }
        Arc::clone(
            self.slots
                .entry(language.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .value(),
        )
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of loaded tables
    pub entries: usize,
    /// Number of successful loads
    pub loads: u64,
    /// Number of lookups answered from the cache
    pub hits: u64,
}
