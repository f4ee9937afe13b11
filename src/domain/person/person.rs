use serde::{Deserialize, Serialize};

use super::value_objects::{PersonName, Team};
use crate::domain::errors::ValidationError;

/// A person on a group's roster
///
/// The owning group is not stored on the person; people always live inside
/// the roster document of exactly one group.
///
/// # Invariants
/// - Name is non-empty and trimmed
/// - Team is one of the two fixed teams
///
/// # Example
/// ```
/// use pickup_roster::domain::person::{Person, Team};
///
/// let person = Person::new("Ana", Team::TeamA).expect("valid person");
/// assert_eq!(person.name.as_str(), "Ana");
/// assert_eq!(person.team, Team::TeamA);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: PersonName,
    pub team: Team,
}

impl Person {
    /// Creates a person from raw input, trimming and validating the name
    pub fn new(name: impl AsRef<str>, team: Team) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PersonName::new(name)?,
            team,
        })
    }

    /// Returns true if this person is on the given team
    pub fn is_on(&self, team: Team) -> bool {
        self.team == team
    }
}
