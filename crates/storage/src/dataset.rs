use std::path::PathBuf;

use chrono::{DateTime, Utc};
use filmiq_core::{AwardRecord, JoinStats, JoinedRecord, MovieRecord, left_join};
use serde::Serialize;

use crate::error::LoadError;
use crate::loader::{load_awards, load_movies};

/// Paths of the two input tables. Identifies a dataset in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DatasetSources {
    pub movies: PathBuf,
    pub awards: PathBuf,
}

impl DatasetSources {
    pub fn new(movies: impl Into<PathBuf>, awards: impl Into<PathBuf>) -> Self {
        Self { movies: movies.into(), awards: awards.into() }
    }
}

/// Both base tables plus their join, immutable after construction.
#[derive(Debug)]
pub struct Dataset {
    pub movies: Vec<MovieRecord>,
    pub awards: Vec<AwardRecord>,
    pub joined: Vec<JoinedRecord>,
    pub stats: JoinStats,
    pub sources: DatasetSources,
    pub loaded_at: DateTime<Utc>,
}

/// Serializable description of a loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub movies_path: PathBuf,
    pub awards_path: PathBuf,
    pub loaded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub stats: JoinStats,
}

impl Dataset {
    /// Reads both inputs and joins them.
    ///
    /// Records that cannot take part in the join (no title, no or repeated
    /// identifier) are dropped with a warning; missing files, bad CSV and
    /// missing required columns fail the whole load.
    pub fn load(sources: &DatasetSources) -> Result<Self, LoadError> {
        let movies = load_movies(&sources.movies)?;
        let awards = load_awards(&sources.awards)?;
        for rejected in movies.rejected.iter().chain(&awards.rejected) {
            tracing::warn!(error = %rejected, "skipping record");
        }

        let mut dataset = Self::from_records(movies.records, awards.records, sources.clone());
        dataset.stats.skipped_movies = movies.rejected.len();
        dataset.stats.skipped_awards = awards.rejected.len();
        tracing::info!(
            movies = dataset.stats.movies,
            awards = dataset.stats.awards,
            joined_rows = dataset.stats.joined_rows,
            matched_movies = dataset.stats.matched_movies,
            skipped_movies = dataset.stats.skipped_movies,
            skipped_awards = dataset.stats.skipped_awards,
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Builds a dataset from records already in memory.
    pub fn from_records(
        movies: Vec<MovieRecord>,
        awards: Vec<AwardRecord>,
        sources: DatasetSources,
    ) -> Self {
        let (joined, stats) = left_join(&movies, &awards);
        Self { movies, awards, joined, stats, sources, loaded_at: Utc::now() }
    }

    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            movies_path: self.sources.movies.clone(),
            awards_path: self.sources.awards.clone(),
            loaded_at: self.loaded_at,
            stats: self.stats,
        }
    }
}
