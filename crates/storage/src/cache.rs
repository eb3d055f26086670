//! Memoized dataset loading keyed by input paths.
//!
//! An entry is reused until either file's modification time or length
//! changes, or until it is invalidated explicitly.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use crate::dataset::{Dataset, DatasetSources};
use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: u64,
}

impl Fingerprint {
    fn of(path: &Path) -> Result<Self, LoadError> {
        let meta = fs::metadata(path).map_err(|e| LoadError::io(path, e))?;
        Ok(Self { modified: meta.modified().ok(), len: meta.len() })
    }
}

struct CacheEntry {
    fingerprints: (Fingerprint, Fingerprint),
    dataset: Arc<Dataset>,
}

/// Process-wide dataset memo. Owned explicitly by whoever serves queries.
#[derive(Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<DatasetSources, CacheEntry>>,
}

impl DatasetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset for `sources`, loading it on first use or
    /// when an input file changed since the last load.
    pub fn get_or_load(&self, sources: &DatasetSources) -> Result<Arc<Dataset>, LoadError> {
        let fingerprints = (Fingerprint::of(&sources.movies)?, Fingerprint::of(&sources.awards)?);
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(entry) = entries.get(sources) {
            if entry.fingerprints == fingerprints {
                return Ok(Arc::clone(&entry.dataset));
            }
            tracing::info!(
                movies = %sources.movies.display(),
                awards = %sources.awards.display(),
                "input files changed, reloading dataset"
            );
        }

        let dataset = Arc::new(Dataset::load(sources)?);
        entries.insert(sources.clone(), CacheEntry { fingerprints, dataset: Arc::clone(&dataset) });
        Ok(dataset)
    }

    /// Drops the entry for `sources`. Returns whether one was cached.
    pub fn invalidate(&self, sources: &DatasetSources) -> bool {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).remove(sources).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
