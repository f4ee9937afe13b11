use async_trait::async_trait;

use super::errors::StorageError;
use crate::domain::group::GroupName;
use crate::domain::person::{Person, PersonName, Team};

/// Repository trait for group rosters
///
/// Every operation is scoped to one group, whose name addresses the roster
/// document. Implementations own uniqueness: adding a person whose name is
/// already in the group must fail with `StorageError::DuplicateName`.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Add a person to a group's roster
    async fn add_person(&self, group: &GroupName, person: &Person) -> Result<(), StorageError>;

    /// List everyone in a group, across both teams, in insertion order
    async fn list_by_group(&self, group: &GroupName) -> Result<Vec<Person>, StorageError>;

    /// List the people on one team of a group, in insertion order
    async fn list_by_group_and_team(
        &self,
        group: &GroupName,
        team: Team,
    ) -> Result<Vec<Person>, StorageError>;

    /// Remove a person from a group; removing an absent name is a no-op
    async fn remove_person(&self, group: &GroupName, name: &PersonName)
        -> Result<(), StorageError>;

    /// Remove a group together with its whole roster
    async fn remove_group(&self, group: &GroupName) -> Result<(), StorageError>;
}
