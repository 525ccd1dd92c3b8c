//! Catalog snapshots and the store that swaps them
//!
//! A `CatalogSnapshot` is one immutable catalog together with the artifacts
//! derived from it. The option vocabulary and the analysis are computed on
//! first use and then reused for as long as the snapshot lives, so a cache
//! entry can never outlive the catalog it was computed from.
//!
//! `CatalogStore` hands out `Arc<CatalogSnapshot>`s. Replacing the catalog
//! installs a fresh snapshot with empty caches; readers that already hold
//! the previous one keep using it until they drop it.

use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use analytics::{analyze, build_options, CatalogAnalysis, OptionVocabulary};
use data_loader::Catalog;
use tracing::{debug, info, instrument};

/// One immutable catalog plus its memoized derived artifacts
#[derive(Debug)]
pub struct CatalogSnapshot {
    generation: u64,
    catalog: Catalog,
    options: OnceLock<OptionVocabulary>,
    analysis: OnceLock<CatalogAnalysis>,
}

impl CatalogSnapshot {
    fn new(generation: u64, catalog: Catalog) -> Self {
        Self {
            generation,
            catalog,
            options: OnceLock::new(),
            analysis: OnceLock::new(),
        }
    }

    /// Sequence number of this snapshot within its store (first load is 0)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Option vocabulary, built on first call
    pub fn options(&self) -> &OptionVocabulary {
        self.options.get_or_init(|| {
            debug!(generation = self.generation, "Building option vocabulary");
            build_options(&self.catalog)
        })
    }

    /// Aggregate analysis, computed on first call
    pub fn analysis(&self) -> &CatalogAnalysis {
        self.analysis.get_or_init(|| {
            debug!(generation = self.generation, "Analyzing catalog");
            analyze(&self.catalog)
        })
    }

    pub fn has_cached_options(&self) -> bool {
        self.options.get().is_some()
    }

    pub fn has_cached_analysis(&self) -> bool {
        self.analysis.get().is_some()
    }
}

/// Holder of the current catalog snapshot
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::new(0, catalog))),
        }
    }

    /// Load a catalog export from disk into a new store
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> data_loader::Result<Self> {
        Ok(Self::new(Catalog::load_from_file(path)?))
    }

    /// The snapshot current at the time of the call
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        // A panicking writer cannot leave a half-built snapshot behind,
        // so a poisoned lock still holds a valid Arc
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install `catalog` as the new current snapshot and return its generation
    pub fn replace(&self, catalog: Catalog) -> u64 {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = current.generation + 1;
        *current = Arc::new(CatalogSnapshot::new(generation, catalog));
        info!(
            generation,
            titles = current.catalog.len(),
            "Replaced catalog snapshot"
        );
        generation
    }
}
