use std::collections::BTreeSet;

use filmiq_core::{JoinedRecord, LIST_DELIMITER, YearBounds};

/// First and last release year in `table`, `None` when no row has a year.
pub fn year_bounds(table: &[&JoinedRecord]) -> Option<YearBounds> {
    table.iter().filter_map(|row| row.movie.year).fold(None, |acc, year| {
        Some(match acc {
            None => YearBounds { min: year, max: year },
            Some(b) => YearBounds { min: b.min.min(year), max: b.max.max(year) },
        })
    })
}

/// Sorted distinct genres offered for selection.
///
/// Spaces are removed from the whole field before splitting, so
/// `"Sci Fi, Drama"` offers `SciFi` and `Drama`.
pub fn genre_options(table: &[&JoinedRecord]) -> Vec<String> {
    let mut genres = BTreeSet::new();
    for field in table.iter().filter_map(|row| row.movie.genre.as_deref()) {
        let squeezed: String = field.chars().filter(|c| *c != ' ').collect();
        genres.extend(
            squeezed.split(LIST_DELIMITER).filter(|g| !g.is_empty()).map(str::to_owned),
        );
    }
    genres.into_iter().collect()
}
