//! Request/query types (Deserialize)

use filmiq_core::{FilterSpec, MAX_SEARCH_RESULTS, split_list};
use serde::Deserialize;

const fn default_search_limit() -> usize {
    50
}

/// Dashboard filter as query parameters. Omitted fields take the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub min_rating: Option<f64>,
    /// Comma-separated genre names
    pub genres: Option<String>,
    pub winners_only: Option<bool>,
}

impl FilterQuery {
    pub fn into_spec(self, defaults: FilterSpec) -> FilterSpec {
        FilterSpec {
            year_min: self.year_min.unwrap_or(defaults.year_min),
            year_max: self.year_max.unwrap_or(defaults.year_max),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
            genres: self
                .genres
                .as_deref()
                .map(|list| split_list(list).map(str::to_owned).collect())
                .unwrap_or(defaults.genres),
            winners_only: self.winners_only.unwrap_or(defaults.winners_only),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Rows,
    Columns,
}

#[derive(Debug, Default, Deserialize)]
pub struct FormatQuery {
    #[serde(default)]
    pub format: TableFormat,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

impl SearchQuery {
    /// Cap limit to prevent DoS via unbounded queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_SEARCH_RESULTS)
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}
