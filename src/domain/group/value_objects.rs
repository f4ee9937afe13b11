use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::ValidationError;

/// Group name value object
///
/// The group name is both the display name and the storage key of the
/// group's roster document.
///
/// # Invariants
/// - Never empty
/// - Trimmed
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Creates a new GroupName
    ///
    /// # Example
    /// ```
    /// use pickup_roster::domain::group::GroupName;
    ///
    /// let group = GroupName::new(" Thursday futsal ").expect("valid group");
    /// assert_eq!(group.as_str(), "Thursday futsal");
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::GroupNameRequired);
        }
        Ok(GroupName(trimmed.to_string()))
    }

    /// Returns the group name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupName::new(value)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
