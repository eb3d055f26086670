//! Typed error enum for the loader.
//!
//! Every variant is fatal for the load that produced it: callers cannot build
//! a dataset without both tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why an input table could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input path does not exist.
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be opened or stat'ed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Contents are not parseable CSV.
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row lacks a column the join depends on.
    #[error("{} is missing required column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }

    /// Whether the input is simply absent (as opposed to unreadable or malformed).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
