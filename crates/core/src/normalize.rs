//! Field normalization shared by both sides of the movie/award join.

use crate::error::{DataError, DataResult};

const TRUTHY: [&str; 4] = ["true", "1", "yes", "y"];
const FALSY: [&str; 5] = ["false", "0", "no", "n", ""];

/// Join key of a title: lower-cased with outer whitespace stripped.
///
/// Internal whitespace is kept as is, so `"The  Matrix"` and `"The Matrix"`
/// are different films.
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Join key for a record whose title may be missing.
///
/// A blank title counts as missing.
pub fn join_key(
    title: Option<&str>,
    source_table: &'static str,
    record: &str,
) -> DataResult<String> {
    match title.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(title_key(t)),
        _ => Err(DataError::MissingTitle { source_table, record: record.to_owned() }),
    }
}

/// Collapses a raw win indicator to `0` or `1`.
///
/// Rules apply in order to the trimmed, lower-cased value: exact truthy
/// token, exact falsy token, then substring fallbacks (`true`, `win`, `1`).
/// Missing values are `0`. Never fails.
pub fn win_flag(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.trim().to_lowercase();
    if TRUTHY.contains(&s.as_str()) {
        return 1;
    }
    if FALSY.contains(&s.as_str()) {
        return 0;
    }
    if s.contains("true") || s.contains("win") || s.contains('1') {
        return 1;
    }
    0
}
