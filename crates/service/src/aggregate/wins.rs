use std::collections::{BTreeMap, HashSet};

use filmiq_core::JoinedRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearWins {
    pub year: i32,
    /// Distinct winning movies released that year
    pub oscar_wins: usize,
}

/// Winning movies per release year, ascending by year.
pub fn wins_per_year(view: &[&JoinedRecord]) -> Vec<YearWins> {
    let mut by_year: BTreeMap<i32, HashSet<&str>> = BTreeMap::new();
    for row in view.iter().filter(|row| row.won()) {
        if let Some(year) = row.movie.year {
            by_year.entry(year).or_default().insert(row.movie.movie_id.as_str());
        }
    }
    by_year.into_iter().map(|(year, ids)| YearWins { year, oscar_wins: ids.len() }).collect()
}
