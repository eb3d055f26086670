//! Filter evaluation over the joined table.

use filmiq_core::{FilterSpec, JoinedRecord};

/// Whether `row` satisfies every active predicate of `spec`.
///
/// Rows without a year or rating never pass. Genres match when any selected
/// genre is a case-sensitive substring of the row's genre field.
pub fn row_matches(row: &JoinedRecord, spec: &FilterSpec) -> bool {
    let movie = &row.movie;
    let in_years = movie.year.is_some_and(|y| y >= spec.year_min && y <= spec.year_max);
    let rated = movie.rating.is_some_and(|r| r >= spec.min_rating);
    let genre_ok = !spec.has_genre_filter()
        || movie
            .genre
            .as_deref()
            .is_some_and(|field| spec.genres.iter().any(|g| field.contains(g.as_str())));
    let winner_ok = !spec.winners_only || row.won();
    in_years && rated && genre_ok && winner_ok
}

/// Rows of `table` passing `spec`, in table order.
pub fn apply_filter<'a>(table: &'a [JoinedRecord], spec: &FilterSpec) -> Vec<&'a JoinedRecord> {
    table.iter().filter(|row| row_matches(row, spec)).collect()
}

/// The whole table as a view, for aggregations that ignore the filter.
pub fn full_view(table: &[JoinedRecord]) -> Vec<&JoinedRecord> {
    table.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{award, joined, movie};

    fn spec(year_min: i32, year_max: i32, min_rating: f64) -> FilterSpec {
        FilterSpec { year_min, year_max, min_rating, genres: Vec::new(), winners_only: false }
    }

    #[test]
    fn year_and_rating_bounds_are_inclusive() {
        let table = joined(
            vec![
                movie("tt1", "Magnolia", 1999, 8.5, "Drama"),
                movie("tt2", "Memento", 2005, 8.5, "Mystery, Thriller"),
                movie("tt3", "Edge Low", 2000, 8.0, "Drama"),
                movie("tt4", "Edge High", 2010, 8.0, "Drama"),
                movie("tt5", "Too Low", 2005, 7.99, "Drama"),
            ],
            vec![],
        );
        let ids: Vec<&str> = apply_filter(&table, &spec(2000, 2010, 8.0))
            .iter()
            .map(|r| r.movie.movie_id.as_str())
            .collect();
        assert_eq!(ids, vec!["tt2", "tt3", "tt4"]);
    }

    #[test]
    fn genre_match_is_substring_and_any_of() {
        let table = joined(
            vec![
                movie("tt1", "A", 2001, 8.0, "Action, Drama"),
                movie("tt2", "B", 2001, 8.0, "Sci-Fi"),
                movie("tt3", "C", 2001, 8.0, "Comedy"),
                movie("tt4", "D", 2001, 8.0, "drama"),
            ],
            vec![],
        );
        let mut filter = spec(2000, 2010, 0.0);
        filter.genres = vec!["Drama".to_owned(), "Fi".to_owned()];
        let ids: Vec<&str> =
            apply_filter(&table, &filter).iter().map(|r| r.movie.movie_id.as_str()).collect();
        assert_eq!(ids, vec!["tt1", "tt2"], "case-sensitive substring over the whole field");
    }

    #[test]
    fn winners_only_keeps_winning_rows() {
        let table = joined(
            vec![movie("tt1", "Heat", 2001, 8.0, "Crime"), movie("tt2", "Up", 2009, 8.3, "Animation")],
            vec![award("Up", "Animated Feature", "True"), award("Up", "Sound", "False")],
        );
        let mut filter = spec(2000, 2010, 0.0);
        filter.winners_only = true;
        let rows = apply_filter(&table, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].award.as_ref().and_then(|a| a.category.as_deref()), Some("Animated Feature"));
    }

    #[test]
    fn conjunction_matches_independent_predicates() {
        let genres = ["Drama", "Action, Drama", "Comedy", "Horror, Comedy"];
        let mut movies = Vec::new();
        for i in 0..40 {
            movies.push(movie(
                &format!("tt{i}"),
                &format!("Film {i}"),
                1995 + (i % 20),
                5.0 + f64::from(i % 9) * 0.5,
                genres[(i % 4) as usize],
            ));
        }
        let awards = vec![award("Film 3", "Score", "yes"), award("Film 17", "Score", "no")];
        let table = joined(movies, awards);

        let filters = [
            FilterSpec { year_min: 2000, year_max: 2005, min_rating: 6.5, genres: vec![], winners_only: false },
            FilterSpec {
                year_min: 1990,
                year_max: 2020,
                min_rating: 0.0,
                genres: vec!["Comedy".into(), "Action".into()],
                winners_only: false,
            },
            FilterSpec { year_min: 1990, year_max: 2020, min_rating: 0.0, genres: vec![], winners_only: true },
        ];
        for filter in &filters {
            let selected = apply_filter(&table, filter);
            for row in &table {
                let m = &row.movie;
                let expected = m.year.is_some_and(|y| (filter.year_min..=filter.year_max).contains(&y))
                    && m.rating.is_some_and(|r| r >= filter.min_rating)
                    && (filter.genres.is_empty()
                        || filter.genres.iter().any(|g| m.genre.as_deref().unwrap_or("").contains(g.as_str())))
                    && (!filter.winners_only || row.is_winner() == 1);
                let present = selected.iter().any(|s| std::ptr::eq(*s, row));
                assert_eq!(present, expected, "row {} under {filter:?}", m.movie_id);
            }
        }
    }

    #[test]
    fn rows_without_year_or_rating_never_pass() {
        let bare = filmiq_core::MovieRecord::builder("tt9", "Unknown").build().unwrap();
        let table = joined(vec![bare], vec![]);
        assert!(apply_filter(&table, &FilterSpec::unrestricted()).is_empty());
    }

    #[test]
    fn filtering_is_deterministic() {
        let table = joined(
            vec![movie("tt1", "A", 2001, 8.0, "Drama"), movie("tt2", "B", 2002, 9.0, "Drama")],
            vec![],
        );
        let filter = spec(2000, 2010, 7.0);
        assert_eq!(apply_filter(&table, &filter), apply_filter(&table, &filter));
    }
}
