//! Record loading for FilmIQ.
//!
//! Reads the movie and award CSV tables, joins them once and memoizes the
//! result per input path pair.

mod cache;
mod dataset;
pub mod error;
mod loader;

pub use cache::DatasetCache;
pub use dataset::{Dataset, DatasetInfo, DatasetSources};
pub use error::LoadError;
