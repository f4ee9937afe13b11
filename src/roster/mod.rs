// Roster coordination
//
// This module contains the coordinator that drives a single group's roster
// view: team selection, the add-person input, roster refreshes and the
// confirmed removal of the group. Front ends observe it through events.

pub mod coordinator;
pub mod errors;
pub mod events;
pub mod messages;
pub mod policy;
pub mod state;

// Re-export main types
pub use coordinator::{GroupRemovalRequest, RosterCoordinator};
pub use errors::{RosterError, RosterResult};
pub use events::{ConfirmationPrompt, Notice, RosterEvent};
pub use messages::RosterAction;
pub use policy::{CoordinatorConfig, RefreshPolicy};
pub use state::RosterState;
