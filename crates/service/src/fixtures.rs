//! Record builders shared by the unit tests.

use filmiq_core::{AwardRecord, JoinedRecord, MovieRecord, left_join};

pub(crate) fn movie(id: &str, title: &str, year: i32, rating: f64, genre: &str) -> MovieRecord {
    MovieRecord::builder(id, title).year(year).rating(rating).votes(1000).genre(genre).build().unwrap()
}

pub(crate) fn credited(
    id: &str,
    title: &str,
    year: i32,
    rating: f64,
    director: &str,
    star: &str,
) -> MovieRecord {
    MovieRecord::builder(id, title)
        .year(year)
        .rating(rating)
        .votes(1000)
        .genre("Drama")
        .director(director)
        .star(star)
        .build()
        .unwrap()
}

pub(crate) fn award(film: &str, category: &str, winner: &str) -> AwardRecord {
    AwardRecord::new(
        Some(film.to_owned()),
        Some(category.to_owned()),
        None,
        Some("2000".to_owned()),
        Some(winner.to_owned()),
        film,
    )
    .unwrap()
}

pub(crate) fn joined(movies: Vec<MovieRecord>, awards: Vec<AwardRecord>) -> Vec<JoinedRecord> {
    left_join(&movies, &awards).0
}
