use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pickup_roster::api::{self, AppState};
use pickup_roster::config::{AppConfig, StoreBackend};
use pickup_roster::infrastructure::repositories::{
    InMemoryRosterRepository, PostgresRosterRepository,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let state = match config.store {
        StoreBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await
                .expect("Failed to connect to database");

            let store = PostgresRosterRepository::new(pool);
            store
                .ensure_schema()
                .await
                .expect("Failed to prepare roster schema");

            tracing::info!("Database connected successfully");
            AppState::from_store(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory roster store; data is lost on exit");
            AppState::from_store(Arc::new(InMemoryRosterRepository::new()))
        }
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
