//! Shared constants for FilmIQ.
//!
//! Centralizes the fixed knobs of the aggregation queries so the HTTP and
//! CLI layers agree with the service layer.

/// Number of evenly spaced points a rating density curve is sampled at.
pub const KDE_RESOLUTION: usize = 200;

/// A rating partition needs strictly more observations than this to get a curve.
pub const KDE_MIN_OBSERVATIONS: usize = 2;

/// Genre success rows returned when no genre filter is active.
pub const DEFAULT_GENRE_LIMIT: usize = 10;

/// Length of the "top directors" and "top actors" rankings.
pub const TOP_RANKING_LIMIT: usize = 10;

/// Minimum distinct movies for a director to enter the top ranking.
pub const TOP_DIRECTOR_MIN_MOVIES: usize = 2;

/// First year of the default year range.
pub const DEFAULT_YEAR_START: i32 = 2000;

/// Default minimum rating filter.
pub const DEFAULT_MIN_RATING: f64 = 7.0;

/// Delimiter of the multi-valued genre and cast fields.
pub const LIST_DELIMITER: char = ',';

/// Env var overriding [`DEFAULT_YEAR_START`].
pub const DEFAULT_YEAR_START_ENV: &str = "FILMIQ_DEFAULT_YEAR_START";

/// Env var overriding [`DEFAULT_MIN_RATING`].
pub const DEFAULT_MIN_RATING_ENV: &str = "FILMIQ_DEFAULT_MIN_RATING";

/// Maximum number of search results for any query (DoS protection).
pub const MAX_SEARCH_RESULTS: usize = 1000;
