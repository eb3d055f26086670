//! Fixed aggregations behind the dashboard pages.
//!
//! Every function takes borrowed rows and returns owned, serializable
//! results. Empty input yields empty or zeroed output, never an error.

mod distribution;
mod genre;
mod kde;
mod lookup;
mod options;
mod people;
mod summary;
mod wins;

pub use distribution::{DensityCurve, Outcome, rating_distribution};
pub use genre::{GenreSuccess, genre_success};
pub use kde::{GaussianKde, linspace};
pub use lookup::{
    AwardWin, MovieDetail, MovieSummary, SearchHit, movie_detail, movies_by_actor,
    movies_by_director, search_movies,
};
pub use options::{genre_options, year_bounds};
pub use people::{
    ActorStats, DirectorStats, actor_stats, director_stats, top_actors, top_directors,
};
pub use summary::{SummaryMetrics, summary_metrics};
pub use wins::{YearWins, wins_per_year};

/// Rounds to two decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running mean that ignores missing values.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub(crate) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    #[expect(clippy::cast_precision_loss, reason = "row counts stay far below 2^53")]
    pub(crate) fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    pub(crate) fn rounded(&self) -> Option<f64> {
        self.value().map(round2)
    }
}

/// Descending order for optional floats with missing values last.
pub(crate) fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
