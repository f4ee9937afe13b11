use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::GroupName;
use crate::domain::errors::ValidationError;

/// A registered group
///
/// A group is a named collection of people split across two teams. Its
/// people are not held here; they live in the group's roster document.
///
/// # Example
/// ```
/// use pickup_roster::domain::group::Group;
///
/// let group = Group::new("Pickup Tuesday").expect("valid group");
/// assert_eq!(group.name().as_str(), "Pickup Tuesday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: GroupName,
    created_at: DateTime<Utc>,
}

impl Group {
    /// Creates a new group stamped with the current time
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: GroupName::new(name)?,
            created_at: Utc::now(),
        })
    }

    /// Returns the group's name
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Group from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(name: GroupName, created_at: DateTime<Utc>) -> Self {
        Self { name, created_at }
    }
}
