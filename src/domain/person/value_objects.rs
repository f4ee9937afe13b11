use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::ValidationError;

/// One of the two fixed partitions of a group
///
/// Every person in a group is on exactly one of these. There is no third
/// team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// First team, selected when a roster view opens
    #[default]
    TeamA,
    /// Second team
    TeamB,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::TeamA => write!(f, "Team A"),
            Team::TeamB => write!(f, "Team B"),
        }
    }
}

/// Person name value object
///
/// # Invariants
/// - Never empty
/// - Never carries leading or trailing whitespace
/// - Compared case-sensitively
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Creates a new PersonName from raw user input
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Example
    /// ```
    /// use pickup_roster::domain::person::PersonName;
    ///
    /// let name = PersonName::new("  Ana ").expect("valid name");
    /// assert_eq!(name.as_str(), "Ana");
    /// assert!(PersonName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(PersonName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PersonName::new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
