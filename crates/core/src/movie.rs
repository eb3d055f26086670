//! Movie and award records and their builders.

use serde::Serialize;

use crate::error::DataResult;
use crate::normalize::join_key;

/// One row of the movie table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    /// Unique identifier (e.g. `tt0133093`)
    pub movie_id: String,
    pub movie_name: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
    /// Comma-delimited genres
    pub genre: Option<String>,
    pub director: Option<String>,
    /// Comma-delimited cast
    pub star: Option<String>,
    #[serde(skip)]
    join_key: String,
}

impl MovieRecord {
    /// Returns a new builder with the required fields set.
    #[must_use]
    pub fn builder(movie_id: impl Into<String>, movie_name: impl Into<String>) -> MovieBuilder {
        MovieBuilder::new(movie_id.into(), movie_name.into())
    }

    /// Normalized title used to match award records.
    pub fn join_key(&self) -> &str {
        &self.join_key
    }
}

/// Builder for [`MovieRecord`]; `build` derives the join key.
#[derive(Debug, Clone)]
pub struct MovieBuilder {
    movie_id: String,
    movie_name: String,
    year: Option<i32>,
    rating: Option<f64>,
    votes: Option<u64>,
    genre: Option<String>,
    director: Option<String>,
    star: Option<String>,
}

impl MovieBuilder {
    fn new(movie_id: String, movie_name: String) -> Self {
        Self {
            movie_id,
            movie_name,
            year: None,
            rating: None,
            votes: None,
            genre: None,
            director: None,
            star: None,
        }
    }

    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn maybe_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn maybe_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn votes(mut self, votes: u64) -> Self {
        self.votes = Some(votes);
        self
    }

    #[must_use]
    pub fn maybe_votes(mut self, votes: Option<u64>) -> Self {
        self.votes = votes;
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn maybe_genre(mut self, genre: Option<String>) -> Self {
        self.genre = genre;
        self
    }

    #[must_use]
    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    #[must_use]
    pub fn maybe_director(mut self, director: Option<String>) -> Self {
        self.director = director;
        self
    }

    #[must_use]
    pub fn star(mut self, star: impl Into<String>) -> Self {
        self.star = Some(star.into());
        self
    }

    #[must_use]
    pub fn maybe_star(mut self, star: Option<String>) -> Self {
        self.star = star;
        self
    }

    /// Fails with [`DataError::MissingTitle`](crate::DataError) when the title is blank.
    pub fn build(self) -> DataResult<MovieRecord> {
        let join_key = join_key(Some(&self.movie_name), "movies", &self.movie_id)?;
        Ok(MovieRecord {
            movie_id: self.movie_id,
            movie_name: self.movie_name,
            year: self.year,
            rating: self.rating,
            votes: self.votes,
            genre: self.genre,
            director: self.director,
            star: self.star,
            join_key,
        })
    }
}

/// One row of the award table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardRecord {
    pub film: String,
    pub category: Option<String>,
    pub canonical_category: Option<String>,
    /// Ceremony year as written in the source (`1994`, `1927/28`)
    pub year: Option<String>,
    /// Win indicator before normalization
    pub winner_raw: Option<String>,
    #[serde(skip)]
    join_key: String,
}

impl AwardRecord {
    /// `record` names the row in the error when `film` is blank.
    pub fn new(
        film: Option<String>,
        category: Option<String>,
        canonical_category: Option<String>,
        year: Option<String>,
        winner_raw: Option<String>,
        record: &str,
    ) -> DataResult<Self> {
        let join_key = join_key(film.as_deref(), "awards", record)?;
        Ok(Self {
            film: film.unwrap_or_default(),
            category,
            canonical_category,
            year,
            winner_raw,
            join_key,
        })
    }

    pub fn join_key(&self) -> &str {
        &self.join_key
    }

    /// Canonical category when present, else the raw category.
    pub fn display_category(&self) -> Option<&str> {
        self.canonical_category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(self.category.as_deref())
    }
}

/// A movie left-joined with at most one of its award records.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub movie: MovieRecord,
    pub award: Option<AwardRecord>,
    is_winner: u8,
}

impl JoinedRecord {
    pub(crate) fn new(movie: MovieRecord, award: Option<AwardRecord>, is_winner: u8) -> Self {
        Self { movie, award, is_winner }
    }

    /// Normalized win flag, always `0` or `1`.
    pub fn is_winner(&self) -> u8 {
        self.is_winner
    }

    pub fn won(&self) -> bool {
        self.is_winner == 1
    }
}
