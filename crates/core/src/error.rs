use std::result::Result as StdResult;

use thiserror::Error;

/// Record-level data problems found while building the joined table.
///
/// These never abort a load: the offending record is skipped and the rest
/// of the table is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("{source_table} record {record} has no title to derive a join key from")]
    MissingTitle { source_table: &'static str, record: String },

    #[error("{source_table} record {record} has no identifier")]
    MissingIdentifier { source_table: &'static str, record: String },

    #[error("{source_table} identifier {id} appears more than once")]
    DuplicateIdentifier { source_table: &'static str, id: String },
}

pub type DataResult<T> = StdResult<T, DataError>;
