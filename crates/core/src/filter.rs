use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MIN_RATING, DEFAULT_MIN_RATING_ENV, DEFAULT_YEAR_START, DEFAULT_YEAR_START_ENV,
};
use crate::env_config::{env_parse_checked, env_parse_with_default};

/// Dashboard filter. All active predicates must hold for a row to pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Inclusive
    pub year_min: i32,
    /// Inclusive
    pub year_max: i32,
    /// Inclusive lower bound
    pub min_rating: f64,
    /// Empty means no genre constraint
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub winners_only: bool,
}

/// Smallest and largest release year present in the movie table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl FilterSpec {
    /// Filter that lets every row with a year and a rating through.
    pub fn unrestricted() -> Self {
        Self {
            year_min: i32::MIN,
            year_max: i32::MAX,
            min_rating: f64::MIN,
            genres: Vec::new(),
            winners_only: false,
        }
    }

    /// Initial filter of a fresh session.
    ///
    /// Years run from the configured start year (clamped into `bounds`) to
    /// the last year of the data.
    pub fn default_for(bounds: Option<YearBounds>) -> Self {
        let start = env_parse_with_default(DEFAULT_YEAR_START_ENV, DEFAULT_YEAR_START);
        let min_rating =
            env_parse_checked(DEFAULT_MIN_RATING_ENV, DEFAULT_MIN_RATING, |r: &f64| r.is_finite());
        let (year_min, year_max) = match bounds {
            Some(b) => (start.clamp(b.min, b.max), b.max),
            None => (start, i32::MAX),
        };
        Self { year_min, year_max, min_rating, genres: Vec::new(), winners_only: false }
    }

    pub fn has_genre_filter(&self) -> bool {
        !self.genres.is_empty()
    }

    /// Checks the bounds are usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.year_min > self.year_max {
            return Err(format!(
                "year_min ({}) must not exceed year_max ({})",
                self.year_min, self.year_max
            ));
        }
        if !self.min_rating.is_finite() {
            return Err(format!("min_rating must be a finite number, got {}", self.min_rating));
        }
        Ok(())
    }
}
