//! Search, detail and per-person movie lists.

use std::cmp::Ordering;
use std::collections::HashSet;

use filmiq_core::{JoinedRecord, MovieRecord, split_list};
use serde::Serialize;

use super::desc_nulls_last;

/// An Oscar won by a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardWin {
    /// Canonical category when the source has one
    pub category: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: MovieRecord,
    pub oscars_won: Vec<AwardWin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub movie_id: String,
    pub movie_name: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub movie_name: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

/// Movie with `movie_id` and the awards it won, or `None` when unknown.
pub fn movie_detail(table: &[&JoinedRecord], movie_id: &str) -> Option<MovieDetail> {
    let mut rows = table.iter().filter(|row| row.movie.movie_id == movie_id).peekable();
    let movie = rows.peek()?.movie.clone();
    let oscars_won = rows
        .filter(|row| row.won())
        .filter_map(|row| row.award.as_ref())
        .map(|award| AwardWin {
            category: award.display_category().map(str::to_owned),
            year: award.year.clone(),
        })
        .collect();
    Some(MovieDetail { movie, oscars_won })
}

/// Movies whose title contains `query`, ignoring case, best rated first.
///
/// A blank query matches nothing.
pub fn search_movies(table: &[&JoinedRecord], query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut hits: Vec<SearchHit> = table
        .iter()
        .map(|row| &row.movie)
        .filter(|movie| movie.movie_name.to_lowercase().contains(&needle))
        .filter(|movie| seen.insert(movie.movie_id.as_str()))
        .map(|movie| SearchHit {
            movie_id: movie.movie_id.clone(),
            movie_name: movie.movie_name.clone(),
            year: movie.year,
            rating: movie.rating,
            votes: movie.votes,
        })
        .collect();
    hits.sort_by(|a, b| desc_nulls_last(a.rating, b.rating));
    hits.truncate(limit);
    hits
}

/// Movies directed by exactly `name`, newest first.
pub fn movies_by_director(view: &[&JoinedRecord], name: &str) -> Vec<MovieSummary> {
    let name = name.trim();
    distinct_newest_first(view.iter().map(|row| &row.movie).filter(|movie| {
        movie.director.as_deref().is_some_and(|d| d.trim() == name)
    }))
}

/// Movies whose cast lists exactly `name`, newest first.
pub fn movies_by_actor(view: &[&JoinedRecord], name: &str) -> Vec<MovieSummary> {
    let name = name.trim();
    distinct_newest_first(view.iter().map(|row| &row.movie).filter(|movie| {
        movie.star.as_deref().is_some_and(|cast| split_list(cast).any(|actor| actor == name))
    }))
}

fn distinct_newest_first<'a>(movies: impl Iterator<Item = &'a MovieRecord>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    let mut rows: Vec<MovieSummary> = movies
        .filter(|m| seen.insert((m.movie_name.as_str(), m.year, m.rating.map(f64::to_bits))))
        .map(|m| MovieSummary { movie_name: m.movie_name.clone(), year: m.year, rating: m.rating })
        .collect();
    rows.sort_by(|a, b| match (a.year, b.year) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rows
}
