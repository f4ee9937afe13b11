// User-facing texts for the roster view
//
// Every notice the coordinator emits is built here so front ends show the
// same wording for the same failure.

use super::errors::RosterError;
use super::events::{ConfirmationPrompt, Notice};

/// Shown in place of the roster when the selected team has nobody on it
pub const EMPTY_TEAM: &str = "There is nobody on this team yet.";

/// User actions that can fail with a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    AddPerson,
    LoadRoster,
    RemovePerson,
    RemoveGroup,
}

impl RosterAction {
    /// Notice title for this action
    pub fn title(&self) -> &'static str {
        match self {
            RosterAction::AddPerson => "New person",
            RosterAction::LoadRoster => "People",
            RosterAction::RemovePerson => "Remove person",
            RosterAction::RemoveGroup => "Remove group",
        }
    }

    /// Generic message shown when storage fails during this action
    pub fn failure_message(&self) -> &'static str {
        match self {
            RosterAction::AddPerson => "Could not add this person.",
            RosterAction::LoadRoster => "Could not load the people on the selected team.",
            RosterAction::RemovePerson => "Could not remove this person.",
            RosterAction::RemoveGroup => "Could not remove the group.",
        }
    }

    /// Builds the notice to surface for a failed action
    ///
    /// Validation and domain errors keep their own message; storage errors
    /// collapse to the generic message of the action.
    pub fn notice(&self, err: &RosterError) -> Notice {
        let message = match err {
            RosterError::Validation(_) => "Enter the name of the person to add.".to_string(),
            RosterError::Domain(inner) => inner.to_string(),
            RosterError::Storage(_) => self.failure_message().to_string(),
        };
        Notice::new(self.title(), message)
    }
}

impl std::fmt::Display for RosterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterAction::AddPerson => write!(f, "add_person"),
            RosterAction::LoadRoster => write!(f, "load_roster"),
            RosterAction::RemovePerson => write!(f, "remove_person"),
            RosterAction::RemoveGroup => write!(f, "remove_group"),
        }
    }
}

/// Prompt shown before a group is removed
pub fn group_removal_prompt() -> ConfirmationPrompt {
    ConfirmationPrompt {
        title: "Remove".to_string(),
        message: "Do you want to remove the group?".to_string(),
        confirm_label: "Yes".to_string(),
        cancel_label: "No".to_string(),
    }
}
