//! Core types and rules for FilmIQ
//!
//! Movie and award records, the title join, win-indicator normalization and
//! the dashboard filter. Everything here is pure; loading lives in
//! `filmiq-storage` and the queries in `filmiq-service`.

mod columns;
pub mod constants;
mod env_config;
mod error;
mod explode;
mod filter;
mod join;
mod movie;
mod normalize;

pub use columns::{Columns, to_columns};
pub use constants::*;
pub use env_config::{env_parse_checked, env_parse_with_default};
pub use error::*;
pub use explode::{Exploded, explode, split_list};
pub use filter::{FilterSpec, YearBounds};
pub use join::{JoinStats, left_join};
pub use movie::{AwardRecord, JoinedRecord, MovieBuilder, MovieRecord};
pub use normalize::{join_key, title_key, win_flag};
