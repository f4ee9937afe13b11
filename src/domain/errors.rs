use thiserror::Error;

/// Errors raised when user input violates a domain invariant
///
/// These are detected locally, before anything is submitted to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("group name required")]
    GroupNameRequired,
}
