//! CSV readers for the movie and award tables.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use filmiq_core::{AwardRecord, DataError, MovieRecord};

use crate::error::LoadError;

/// Cell spellings that mean "no value" in dataframe exports.
const MISSING_MARKERS: [&str; 7] = ["nan", "NaN", "null", "NULL", "None", "NA", "N/A"];

pub(crate) mod columns {
    pub const MOVIE_ID: &str = "movie_id";
    pub const MOVIE_NAME: &str = "movie_name";
    pub const YEAR: &str = "year";
    pub const RATING: &str = "rating";
    pub const VOTES: &str = "votes";
    pub const GENRE: &str = "genre";
    pub const DIRECTOR: &str = "director";
    pub const STAR: &str = "star";

    pub const FILM: &str = "Film";
    pub const CATEGORY: &str = "Category";
    pub const CANONICAL_CATEGORY: &str = "CanonicalCategory";
    pub const AWARD_YEAR: &str = "Year";
    pub const WINNER: &str = "Winner";
}

/// A raw CSV table with trimmed header names and trimmed cells.
pub(crate) struct RawTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl RawTable {
    pub(crate) fn read(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let mut reader =
            ReaderBuilder::new().has_headers(true).flexible(true).trim(Trim::All).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| LoadError::csv(path, e))?
            .iter()
            .map(|h| h.trim().to_owned())
            .collect();
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LoadError::csv(path, e))?;
        Ok(Self { headers, rows })
    }

    pub(crate) fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub(crate) fn require(&self, name: &'static str, path: &Path) -> Result<usize, LoadError> {
        self.column(name)
            .ok_or_else(|| LoadError::MissingColumn { path: path.to_path_buf(), column: name })
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Records that made it through parsing plus the ones that were dropped.
pub(crate) struct Parsed<T> {
    pub records: Vec<T>,
    pub rejected: Vec<DataError>,
}

pub(crate) fn load_movies(path: &Path) -> Result<Parsed<MovieRecord>, LoadError> {
    let table = RawTable::read(path)?;
    let id_col = table.require(columns::MOVIE_ID, path)?;
    let name_col = table.require(columns::MOVIE_NAME, path)?;
    let year_col = table.column(columns::YEAR);
    let rating_col = table.column(columns::RATING);
    let votes_col = table.column(columns::VOTES);
    let genre_col = table.column(columns::GENRE);
    let director_col = table.column(columns::DIRECTOR);
    let star_col = table.column(columns::STAR);

    let mut seen: HashSet<String> = HashSet::with_capacity(table.len());
    let mut records = Vec::with_capacity(table.len());
    let mut rejected = Vec::new();

    for (index, row) in table.rows.iter().enumerate() {
        let line = row_label(index);
        let Some(movie_id) = cell(row, Some(id_col)) else {
            rejected.push(DataError::MissingIdentifier { source_table: "movies", record: line });
            continue;
        };
        if seen.contains(movie_id) {
            rejected.push(DataError::DuplicateIdentifier {
                source_table: "movies",
                id: movie_id.to_owned(),
            });
            continue;
        }

        let built = MovieRecord::builder(movie_id, cell(row, Some(name_col)).unwrap_or_default())
            .maybe_year(cell(row, year_col).and_then(|v| parse_int(v, columns::YEAR, &line)))
            .maybe_rating(cell(row, rating_col).and_then(|v| parse_float(v, columns::RATING, &line)))
            .maybe_votes(cell(row, votes_col).and_then(|v| parse_count(v, columns::VOTES, &line)))
            .maybe_genre(owned(row, genre_col))
            .maybe_director(owned(row, director_col))
            .maybe_star(owned(row, star_col))
            .build();
        match built {
            Ok(movie) => {
                seen.insert(movie.movie_id.clone());
                records.push(movie);
            },
            Err(err) => rejected.push(err),
        }
    }

    Ok(Parsed { records, rejected })
}

pub(crate) fn load_awards(path: &Path) -> Result<Parsed<AwardRecord>, LoadError> {
    let table = RawTable::read(path)?;
    let film_col = table.require(columns::FILM, path)?;
    let category_col = table.column(columns::CATEGORY);
    let canonical_col = table.column(columns::CANONICAL_CATEGORY);
    let year_col = table.column(columns::AWARD_YEAR);
    let winner_col = table.column(columns::WINNER);

    let mut records = Vec::with_capacity(table.len());
    let mut rejected = Vec::new();

    for (index, row) in table.rows.iter().enumerate() {
        let award = AwardRecord::new(
            owned(row, Some(film_col)),
            owned(row, category_col),
            owned(row, canonical_col),
            owned(row, year_col),
            owned(row, winner_col),
            &row_label(index),
        );
        match award {
            Ok(award) => records.push(award),
            Err(err) => rejected.push(err),
        }
    }

    Ok(Parsed { records, rejected })
}

/// 1-based data line, counting the header as line 1.
fn row_label(index: usize) -> String {
    format!("line {}", index.saturating_add(2))
}

fn cell(row: &StringRecord, col: Option<usize>) -> Option<&str> {
    let value = row.get(col?)?.trim();
    if value.is_empty() || MISSING_MARKERS.contains(&value) { None } else { Some(value) }
}

fn owned(row: &StringRecord, col: Option<usize>) -> Option<String> {
    cell(row, col).map(str::to_owned)
}

/// Integer cell; accepts float spellings with no fractional part (`2005.0`).
pub(crate) fn parse_int(value: &str, column: &str, line: &str) -> Option<i32> {
    if let Ok(n) = value.parse::<i32>() {
        return Some(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => {
            Some(f as i32)
        },
        _ => {
            tracing::debug!(column, line, value, "unparseable integer cell treated as missing");
            None
        },
    }
}

pub(crate) fn parse_float(value: &str, column: &str, line: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f),
        _ => {
            tracing::debug!(column, line, value, "unparseable number cell treated as missing");
            None
        },
    }
}

/// Non-negative count; thousands separators are ignored (`1,234,567`).
pub(crate) fn parse_count(value: &str, column: &str, line: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| *c != ',').collect();
    if let Ok(n) = digits.parse::<u64>() {
        return Some(n);
    }
    match digits.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= 0.0 && f < 1.8e19 => Some(f as u64),
        _ => {
            tracing::debug!(column, line, value, "unparseable count cell treated as missing");
            None
        },
    }
}
