//! Left join of award records onto movie records by normalized title.

use std::collections::HashMap;

use serde::Serialize;

use crate::movie::{AwardRecord, JoinedRecord, MovieRecord};
use crate::normalize::win_flag;

/// Row counts of one join, reported after every load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub movies: usize,
    pub awards: usize,
    pub joined_rows: usize,
    /// Movies with at least one matching award record
    pub matched_movies: usize,
    pub skipped_movies: usize,
    pub skipped_awards: usize,
}

/// Left-joins `awards` onto `movies`.
///
/// Output keeps movie order; a movie with several matching awards yields one
/// row per award in award-table order, a movie with none yields a single row
/// with no award and `is_winner == 0`.
pub fn left_join(movies: &[MovieRecord], awards: &[AwardRecord]) -> (Vec<JoinedRecord>, JoinStats) {
    let mut by_key: HashMap<&str, Vec<&AwardRecord>> = HashMap::new();
    for award in awards {
        by_key.entry(award.join_key()).or_default().push(award);
    }

    let mut rows = Vec::with_capacity(movies.len());
    let mut matched_movies = 0usize;
    for movie in movies {
        match by_key.get(movie.join_key()) {
            Some(matches) => {
                matched_movies += 1;
                for award in matches {
                    let flag = win_flag(award.winner_raw.as_deref());
                    rows.push(JoinedRecord::new(movie.clone(), Some((*award).clone()), flag));
                }
            },
            None => rows.push(JoinedRecord::new(movie.clone(), None, 0)),
        }
    }

    let stats = JoinStats {
        movies: movies.len(),
        awards: awards.len(),
        joined_rows: rows.len(),
        matched_movies,
        ..JoinStats::default()
    };
    (rows, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str) -> MovieRecord {
        MovieRecord::builder(id, title).year(1999).rating(8.5).build().unwrap()
    }

    fn award(film: &str, category: &str, winner: Option<&str>) -> AwardRecord {
        AwardRecord::new(
            Some(film.to_owned()),
            Some(category.to_owned()),
            None,
            Some("1999".to_owned()),
            winner.map(str::to_owned),
            film,
        )
        .unwrap()
    }

    #[test]
    fn joins_across_case_and_outer_whitespace() {
        let movies = vec![movie("tt0133093", " The Matrix ")];
        let awards = vec![award("THE MATRIX", "Film Editing", Some("True"))];
        let (rows, stats) = left_join(&movies, &awards);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].award.as_ref().map(|a| a.film.as_str()), Some("THE MATRIX"));
        assert_eq!(rows[0].is_winner(), 1);
        assert_eq!(stats.matched_movies, 1);
    }

    #[test]
    fn unmatched_movie_kept_once_as_non_winner() {
        let movies = vec![movie("tt1", "Heat"), movie("tt2", "Alien")];
        let awards = vec![award("Aliens", "Sound Editing", Some("1"))];
        let (rows, stats) = left_join(&movies, &awards);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert!(row.award.is_none());
            assert_eq!(row.is_winner(), 0);
        }
        assert_eq!(stats, JoinStats { movies: 2, awards: 1, joined_rows: 2, ..JoinStats::default() });
    }

    #[test]
    fn one_row_per_matching_award() {
        let movies = vec![movie("tt0133093", "The Matrix"), movie("tt2", "Heat")];
        let awards = vec![
            award("The Matrix", "Film Editing", Some("yes")),
            award("Heat", "Sound", Some("no")),
            award("the matrix", "Visual Effects", Some("Lost")),
        ];
        let (rows, _) = left_join(&movies, &awards);
        let summary: Vec<(&str, Option<&str>, u8)> = rows
            .iter()
            .map(|r| {
                (
                    r.movie.movie_id.as_str(),
                    r.award.as_ref().and_then(|a| a.category.as_deref()),
                    r.is_winner(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("tt0133093", Some("Film Editing"), 1),
                ("tt0133093", Some("Visual Effects"), 0),
                ("tt2", Some("Sound"), 0),
            ]
        );
    }

    #[test]
    fn every_movie_appears_at_least_once() {
        let movies: Vec<MovieRecord> =
            (0..20).map(|i| movie(&format!("tt{i}"), &format!("Film {}", i % 7))).collect();
        let awards = vec![award("film 3", "Score", Some("WIN")), award("FILM 5 ", "Score", None)];
        let (rows, _) = left_join(&movies, &awards);
        for m in &movies {
            let hits: Vec<&JoinedRecord> =
                rows.iter().filter(|r| r.movie.movie_id == m.movie_id).collect();
            assert!(!hits.is_empty(), "{} missing from join", m.movie_id);
            if hits.iter().all(|r| r.award.is_none()) {
                assert!(hits.iter().all(|r| r.is_winner() == 0));
            }
        }
    }
}
