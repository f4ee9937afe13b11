use serde::Serialize;

use super::messages::EMPTY_TEAM;
use crate::domain::person::{Person, Team};

/// Observable state of a roster view
///
/// `roster` holds the people of `selected_team` as returned by the last
/// applied fetch. It is only ever replaced wholesale from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterState {
    pub selected_team: Team,
    pub pending_name: String,
    pub is_loading: bool,
    pub roster: Vec<Person>,
}

impl RosterState {
    /// Number of people currently shown
    pub fn headcount(&self) -> usize {
        self.roster.len()
    }

    /// Message to show in place of an empty, fully loaded roster
    pub fn empty_message(&self) -> Option<&'static str> {
        (!self.is_loading && self.roster.is_empty()).then_some(EMPTY_TEAM)
    }

    /// Returns true if someone with this exact name is shown
    pub fn contains(&self, name: &str) -> bool {
        self.roster.iter().any(|p| p.name.as_str() == name)
    }
}
