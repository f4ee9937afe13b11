// HTTP handlers for the roster API

pub mod groups;
pub mod players;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
