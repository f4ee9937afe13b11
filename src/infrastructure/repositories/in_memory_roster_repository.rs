use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::group::{Group, GroupName};
use crate::domain::person::{Person, PersonName, Team};
use crate::domain::repositories::{GroupRepository, RosterRepository, StorageError};

/// In-process implementation of the roster and group repositories
///
/// Keeps one roster document per group name plus the group registry.
/// Used for local development and as the substitute store in tests.
#[derive(Debug, Default)]
pub struct InMemoryRosterRepository {
    documents: RwLock<Documents>,
}

#[derive(Debug, Default)]
struct Documents {
    groups: Vec<Group>,
    rosters: HashMap<GroupName, Vec<Person>>,
}

impl InMemoryRosterRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn add_person(&self, group: &GroupName, person: &Person) -> Result<(), StorageError> {
        let mut documents = self.documents.write().await;
        let roster = documents.rosters.entry(group.clone()).or_default();

        if roster.iter().any(|existing| existing.name == person.name) {
            return Err(StorageError::DuplicateName {
                name: person.name.to_string(),
            });
        }

        roster.push(person.clone());
        Ok(())
    }

    async fn list_by_group(&self, group: &GroupName) -> Result<Vec<Person>, StorageError> {
        let documents = self.documents.read().await;
        Ok(documents.rosters.get(group).cloned().unwrap_or_default())
    }

    async fn list_by_group_and_team(
        &self,
        group: &GroupName,
        team: Team,
    ) -> Result<Vec<Person>, StorageError> {
        let documents = self.documents.read().await;
        Ok(documents
            .rosters
            .get(group)
            .map(|roster| roster.iter().filter(|p| p.is_on(team)).cloned().collect())
            .unwrap_or_default())
    }

    async fn remove_person(
        &self,
        group: &GroupName,
        name: &PersonName,
    ) -> Result<(), StorageError> {
        let mut documents = self.documents.write().await;
        if let Some(roster) = documents.rosters.get_mut(group) {
            roster.retain(|person| &person.name != name);
        }
        Ok(())
    }

    async fn remove_group(&self, group: &GroupName) -> Result<(), StorageError> {
        let mut documents = self.documents.write().await;
        documents.groups.retain(|g| g.name() != group);
        documents.rosters.remove(group);
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for InMemoryRosterRepository {
    async fn create(&self, group: &Group) -> Result<(), StorageError> {
        let mut documents = self.documents.write().await;
        if documents.groups.iter().any(|g| g.name() == group.name()) {
            return Err(StorageError::DuplicateGroup {
                name: group.name().to_string(),
            });
        }

        documents.groups.push(group.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Group>, StorageError> {
        Ok(self.documents.read().await.groups.clone())
    }
}
