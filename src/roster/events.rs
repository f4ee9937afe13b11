use serde::Serialize;

use super::state::RosterState;

/// A user-facing message, surfaced instead of an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A two-button confirmation the front end should display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Events published by a roster coordinator to its subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RosterEvent {
    /// The observable state changed; carries the new snapshot
    StateChanged(RosterState),
    /// Something failed and the user should be told
    Notice(Notice),
    /// The add-person input should give up focus
    InputFocusReleased,
    /// Ask the user to confirm a destructive action
    ConfirmationRequested(ConfirmationPrompt),
    /// The group is gone; leave for the groups list
    NavigateToGroups,
}

impl RosterEvent {
    /// Returns the notice carried by this event, if any
    pub fn as_notice(&self) -> Option<&Notice> {
        match self {
            RosterEvent::Notice(notice) => Some(notice),
            _ => None,
        }
    }
}
