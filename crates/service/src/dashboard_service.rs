use std::sync::Arc;

use filmiq_core::{FilterSpec, JoinedRecord, MAX_SEARCH_RESULTS, YearBounds};
use filmiq_storage::{Dataset, DatasetCache, DatasetInfo, DatasetSources};
use serde::Serialize;
use tracing::debug;

use crate::ServiceError;
use crate::aggregate::{
    self, ActorStats, DensityCurve, DirectorStats, GenreSuccess, MovieDetail, MovieSummary,
    SearchHit, SummaryMetrics, YearWins,
};
use crate::query::{apply_filter, full_view};

/// Sidebar choices derived from the full table.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub year_bounds: Option<YearBounds>,
    pub genres: Vec<String>,
    pub default_filter: FilterSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewPage {
    pub filter: FilterSpec,
    pub summary: SummaryMetrics,
    pub rating_distribution: Vec<DensityCurve>,
    pub wins_per_year: Vec<YearWins>,
    pub genre_success: Vec<GenreSuccess>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectorsPage {
    pub filter: FilterSpec,
    pub directors: Vec<DirectorStats>,
    pub top_directors: Vec<DirectorStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorsPage {
    pub filter: FilterSpec,
    pub actors: Vec<ActorStats>,
    pub top_actors: Vec<ActorStats>,
}

enum Source {
    Fixed(Arc<Dataset>),
    Cached { cache: Arc<DatasetCache>, sources: DatasetSources },
}

/// Entry point of the dashboard pages.
///
/// Every call works on one immutable dataset snapshot. A cache-backed
/// service picks up a new snapshot once the input files change.
pub struct DashboardService {
    source: Source,
}

impl DashboardService {
    /// Serves a dataset that never reloads.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { source: Source::Fixed(dataset) }
    }

    /// Serves `sources` through `cache`, loading them once up front so bad
    /// inputs fail here rather than on the first request.
    pub fn from_cache(
        cache: Arc<DatasetCache>,
        sources: DatasetSources,
    ) -> Result<Self, ServiceError> {
        cache.get_or_load(&sources)?;
        Ok(Self { source: Source::Cached { cache, sources } })
    }

    /// Current dataset snapshot.
    pub fn dataset(&self) -> Result<Arc<Dataset>, ServiceError> {
        match &self.source {
            Source::Fixed(dataset) => Ok(Arc::clone(dataset)),
            Source::Cached { cache, sources } => Ok(cache.get_or_load(sources)?),
        }
    }

    pub fn dataset_info(&self) -> Result<DatasetInfo, ServiceError> {
        Ok(self.dataset()?.info())
    }

    /// Initial filter of a fresh session.
    pub fn default_filter(&self) -> Result<FilterSpec, ServiceError> {
        let dataset = self.dataset()?;
        Ok(FilterSpec::default_for(aggregate::year_bounds(&full_view(&dataset.joined))))
    }

    pub fn filter_options(&self) -> Result<FilterOptions, ServiceError> {
        let dataset = self.dataset()?;
        let full = full_view(&dataset.joined);
        let year_bounds = aggregate::year_bounds(&full);
        Ok(FilterOptions {
            year_bounds,
            genres: aggregate::genre_options(&full),
            default_filter: FilterSpec::default_for(year_bounds),
        })
    }

    pub fn overview(&self, spec: &FilterSpec) -> Result<OverviewPage, ServiceError> {
        let dataset = self.dataset()?;
        let full = full_view(&dataset.joined);
        let filtered = filtered_view(&dataset.joined, spec)?;
        Ok(OverviewPage {
            filter: spec.clone(),
            summary: aggregate::summary_metrics(&filtered),
            rating_distribution: aggregate::rating_distribution(&filtered),
            wins_per_year: aggregate::wins_per_year(&filtered),
            genre_success: aggregate::genre_success(&filtered, &full, spec),
        })
    }

    pub fn directors(&self, spec: &FilterSpec) -> Result<DirectorsPage, ServiceError> {
        let dataset = self.dataset()?;
        let filtered = filtered_view(&dataset.joined, spec)?;
        let directors = aggregate::director_stats(&filtered);
        let top_directors = aggregate::top_directors(&directors);
        Ok(DirectorsPage { filter: spec.clone(), directors, top_directors })
    }

    pub fn actors(&self, spec: &FilterSpec) -> Result<ActorsPage, ServiceError> {
        let dataset = self.dataset()?;
        let filtered = filtered_view(&dataset.joined, spec)?;
        let actors = aggregate::actor_stats(&filtered);
        let top_actors = aggregate::top_actors(&actors);
        Ok(ActorsPage { filter: spec.clone(), actors, top_actors })
    }

    pub fn movies_by_director(
        &self,
        spec: &FilterSpec,
        director: &str,
    ) -> Result<Vec<MovieSummary>, ServiceError> {
        let director = required(director, "director")?;
        let dataset = self.dataset()?;
        Ok(aggregate::movies_by_director(&filtered_view(&dataset.joined, spec)?, director))
    }

    pub fn movies_by_actor(
        &self,
        spec: &FilterSpec,
        actor: &str,
    ) -> Result<Vec<MovieSummary>, ServiceError> {
        let actor = required(actor, "actor")?;
        let dataset = self.dataset()?;
        Ok(aggregate::movies_by_actor(&filtered_view(&dataset.joined, spec)?, actor))
    }

    /// Title search over the whole table; the filter does not apply.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, ServiceError> {
        let dataset = self.dataset()?;
        let limit = limit.min(MAX_SEARCH_RESULTS);
        let hits = aggregate::search_movies(&full_view(&dataset.joined), query, limit);
        debug!(query, hits = hits.len(), "movie search");
        Ok(hits)
    }

    pub fn movie_detail(&self, movie_id: &str) -> Result<Option<MovieDetail>, ServiceError> {
        let dataset = self.dataset()?;
        Ok(aggregate::movie_detail(&full_view(&dataset.joined), movie_id.trim()))
    }
}

fn filtered_view<'a>(
    table: &'a [JoinedRecord],
    spec: &FilterSpec,
) -> Result<Vec<&'a JoinedRecord>, ServiceError> {
    spec.validate().map_err(ServiceError::InvalidInput)?;
    let view = apply_filter(table, spec);
    debug!(rows = view.len(), total = table.len(), ?spec, "applied filter");
    Ok(view)
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{what} name must not be empty")));
    }
    Ok(value)
}
