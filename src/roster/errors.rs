use thiserror::Error;

use crate::domain::repositories::StorageError;
use crate::domain::ValidationError;

/// Failures of a roster action, classified for the user
#[derive(Debug, Error)]
pub enum RosterError {
    /// Rejected locally before reaching storage
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Rejected by storage for a domain reason; the message is user-facing
    #[error("{0}")]
    Domain(StorageError),

    /// Any other storage failure
    #[error("Storage failure: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        if err.is_domain() {
            RosterError::Domain(err)
        } else {
            RosterError::Storage(err)
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
