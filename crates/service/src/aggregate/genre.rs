use std::collections::{HashMap, HashSet};

use filmiq_core::{DEFAULT_GENRE_LIMIT, FilterSpec, JoinedRecord, explode};
use serde::Serialize;

use super::round2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreSuccess {
    pub genre: String,
    pub total_movies: usize,
    pub oscar_winners: usize,
    /// Percentage in `[0, 100]`, two decimals
    pub success_rate: f64,
}

#[derive(Default)]
struct Tally<'a> {
    movies: HashSet<&'a str>,
    winners: HashSet<&'a str>,
}

/// Share of movies per genre that won at least one Oscar.
///
/// Counts run over `full` instead of `filtered` when `spec.winners_only` is
/// set; over winners alone every genre would score 100%. With a genre
/// selection only the exact selected genres are reported.
pub fn genre_success(
    filtered: &[&JoinedRecord],
    full: &[&JoinedRecord],
    spec: &FilterSpec,
) -> Vec<GenreSuccess> {
    let base = if spec.winners_only { full } else { filtered };
    let selected: Option<HashSet<&str>> =
        spec.has_genre_filter().then(|| spec.genres.iter().map(String::as_str).collect());
    let limit = if spec.has_genre_filter() { spec.genres.len() } else { DEFAULT_GENRE_LIMIT };

    let mut tallies: HashMap<&str, Tally<'_>> = HashMap::new();
    for item in explode(base.iter().copied(), |row| row.movie.genre.as_deref()) {
        if selected.as_ref().is_some_and(|s| !s.contains(item.token)) {
            continue;
        }
        let tally = tallies.entry(item.token).or_default();
        let id = item.parent.movie.movie_id.as_str();
        tally.movies.insert(id);
        if item.parent.won() {
            tally.winners.insert(id);
        }
    }

    let mut rows: Vec<GenreSuccess> = tallies
        .into_iter()
        .map(|(genre, tally)| {
            let total_movies = tally.movies.len();
            let oscar_winners = tally.winners.len();
            GenreSuccess {
                genre: genre.to_owned(),
                total_movies,
                oscar_winners,
                success_rate: success_rate(oscar_winners, total_movies),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.success_rate.total_cmp(&a.success_rate).then_with(|| a.genre.cmp(&b.genre)));
    rows.truncate(limit);
    rows
}

#[expect(clippy::cast_precision_loss, reason = "movie counts stay far below 2^53")]
fn success_rate(winners: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(100.0 * winners as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{award, joined, movie};
    use crate::query::{apply_filter, full_view};

    fn open_filter() -> FilterSpec {
        FilterSpec { year_min: 1900, year_max: 2100, min_rating: 0.0, genres: vec![], winners_only: false }
    }

    fn fixture() -> Vec<JoinedRecord> {
        joined(
            vec![
                movie("tt1", "Gladiator", 2000, 8.5, "Action, Drama"),
                movie("tt2", "Heat", 1995, 8.2, "Action, Crime"),
                movie("tt3", "Up", 2009, 8.3, "Animation, Drama"),
                movie("tt4", "Cars", 2006, 7.2, "Animation"),
            ],
            vec![
                award("Gladiator", "Best Picture", "yes"),
                award("Gladiator", "Sound", "yes"),
                award("Up", "Animated Feature", "True"),
            ],
        )
    }

    fn rate(rows: &[GenreSuccess], genre: &str) -> Option<f64> {
        rows.iter().find(|r| r.genre == genre).map(|r| r.success_rate)
    }

    #[test]
    fn rates_distinct_movies_per_genre() {
        let table = fixture();
        let view = full_view(&table);
        let rows = genre_success(&view, &view, &open_filter());
        assert_eq!(rate(&rows, "Drama"), Some(100.0));
        assert_eq!(rate(&rows, "Action"), Some(50.0));
        assert_eq!(rate(&rows, "Animation"), Some(50.0));
        assert_eq!(rate(&rows, "Crime"), Some(0.0));
        let drama = rows.iter().find(|r| r.genre == "Drama").unwrap();
        assert_eq!((drama.total_movies, drama.oscar_winners), (2, 2));
        // ties broken by name
        let order: Vec<&str> = rows.iter().map(|r| r.genre.as_str()).collect();
        assert_eq!(order, vec!["Drama", "Action", "Animation", "Crime"]);
    }

    #[test]
    fn genre_selection_is_exact_and_caps_rows() {
        let table = fixture();
        let view = full_view(&table);
        let mut filter = open_filter();
        filter.genres = vec!["Drama".to_owned(), "Crime".to_owned()];
        let rows = genre_success(&view, &view, &filter);
        let genres: Vec<&str> = rows.iter().map(|r| r.genre.as_str()).collect();
        assert_eq!(genres, vec!["Drama", "Crime"]);
    }

    #[test]
    fn winners_only_uses_full_table() {
        let table = fixture();
        let mut filter = open_filter();
        filter.winners_only = true;
        let filtered = apply_filter(&table, &filter);
        let rows = genre_success(&filtered, &full_view(&table), &filter);
        assert_eq!(rate(&rows, "Action"), Some(50.0), "not the 100% of a winners-only base");
        assert_eq!(rate(&rows, "Crime"), Some(0.0));
    }

    #[test]
    fn default_limit_is_ten() {
        let movies = (0..15)
            .map(|i| movie(&format!("tt{i}"), &format!("M{i}"), 2000, 7.0, &format!("G{i:02}")))
            .collect();
        let table = joined(movies, vec![]);
        let view = full_view(&table);
        assert_eq!(genre_success(&view, &view, &open_filter()).len(), DEFAULT_GENRE_LIMIT);
    }

    #[test]
    fn rates_stay_within_percent_range() {
        let table = fixture();
        let view = full_view(&table);
        for row in genre_success(&view, &view, &open_filter()) {
            assert!((0.0..=100.0).contains(&row.success_rate), "{row:?}");
        }
        assert!(genre_success(&[], &[], &open_filter()).is_empty());
    }
}
