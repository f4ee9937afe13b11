// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::domain::repositories::{GroupRepository, RosterRepository};
use handlers::{groups, players};

/// Shared handler state: the storage ports the API talks to
#[derive(Clone)]
pub struct AppState {
    pub groups: Arc<dyn GroupRepository>,
    pub rosters: Arc<dyn RosterRepository>,
}

impl AppState {
    /// Builds state from a single store implementing both ports
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: GroupRepository + RosterRepository + 'static,
    {
        Self {
            groups: store.clone(),
            rosters: store,
        }
    }
}

/// Builds the API router without transport middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Group routes
        .route("/api/groups", get(groups::list_groups).post(groups::create_group))
        .route("/api/groups/:group", delete(groups::delete_group))
        // Player routes
        .route(
            "/api/groups/:group/players",
            get(players::list_players).post(players::add_player),
        )
        .route(
            "/api/groups/:group/players/:name",
            delete(players::remove_player),
        )
        .with_state(state)
}
