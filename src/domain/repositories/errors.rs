use thiserror::Error;

/// Failures reported by a storage collaborator
///
/// Duplicate variants are domain rejections: the store refused a write that
/// would break a uniqueness rule, and the message is meant for the user.
/// Everything else is a generic storage failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{name} is already on a team in this group")]
    DuplicateName { name: String },

    #[error("A group named {name} already exists")]
    DuplicateGroup { name: String },

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Stored roster document is malformed: {0}")]
    Corrupt(String),
}

impl StorageError {
    /// Returns true for domain-level rejections whose message is user-facing
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            StorageError::DuplicateName { .. } | StorageError::DuplicateGroup { .. }
        )
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupt(err.to_string())
    }
}
