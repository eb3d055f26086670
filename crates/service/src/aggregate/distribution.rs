use std::collections::HashSet;

use filmiq_core::{JoinedRecord, KDE_MIN_OBSERVATIONS, KDE_RESOLUTION};
use serde::Serialize;
use tracing::debug;

use super::kde::{GaussianKde, linspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner,
    NonWinner,
}

impl Outcome {
    fn of(row: &JoinedRecord) -> Self {
        if row.won() { Self::Winner } else { Self::NonWinner }
    }
}

/// Rating density of one outcome, sampled on an even grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub outcome: Outcome,
    pub observations: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Density curves of ratings for winning and non-winning rows, winners first.
///
/// Observations are distinct `(movie_id, rating)` pairs per outcome. An
/// outcome with too few observations, or with identical ratings, is left out.
pub fn rating_distribution(view: &[&JoinedRecord]) -> Vec<DensityCurve> {
    [Outcome::Winner, Outcome::NonWinner]
        .into_iter()
        .filter_map(|outcome| density_for(view, outcome))
        .collect()
}

fn density_for(view: &[&JoinedRecord], outcome: Outcome) -> Option<DensityCurve> {
    let mut seen = HashSet::new();
    let ratings: Vec<f64> = view
        .iter()
        .filter(|row| Outcome::of(row) == outcome)
        .filter_map(|row| row.movie.rating.map(|r| (row.movie.movie_id.as_str(), r)))
        .filter(|(id, r)| seen.insert((*id, r.to_bits())))
        .map(|(_, r)| r)
        .collect();

    let observations = ratings.len();
    if observations <= KDE_MIN_OBSERVATIONS {
        return None;
    }
    let (lo, hi) = ratings
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| (lo.min(r), hi.max(r)));
    let Some(kde) = GaussianKde::fit(ratings) else {
        debug!(?outcome, observations, "ratings have no spread; no density curve");
        return None;
    };
    let x = linspace(lo, hi, KDE_RESOLUTION);
    let y = x.iter().map(|&v| kde.density(v)).collect();
    Some(DensityCurve { outcome, observations, x, y })
}
