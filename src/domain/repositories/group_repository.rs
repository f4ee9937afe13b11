use async_trait::async_trait;

use super::errors::StorageError;
use crate::domain::group::Group;

/// Repository trait for the group registry
///
/// Groups are removed through `RosterRepository::remove_group`, which
/// cascades to the roster document.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Register a new group; fails with `DuplicateGroup` if the name is taken
    async fn create(&self, group: &Group) -> Result<(), StorageError>;

    /// List all groups in creation order
    async fn list_all(&self) -> Result<Vec<Group>, StorageError>;
}
