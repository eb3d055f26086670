//! Typed error enum for the service layer.

use filmiq_storage::LoadError;
use thiserror::Error;

/// Service-layer error unifying load failures and rejected requests.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Base tables could not be loaded.
    #[error("load: {0}")]
    Load(#[from] LoadError),

    /// Caller provided an unusable filter or lookup value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the caller, not the data, is at fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
