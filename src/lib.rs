pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod views;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use services::{SeatAllocator, SeatCatalog};
use store::{PgSeatStore, SeatStore};

// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SeatStore>,
    pub allocator: SeatAllocator,
}

impl AppState {
    pub fn new(store: Arc<dyn SeatStore>) -> Self {
        let allocator = SeatAllocator::new(store.clone());
        Self { store, allocator }
    }

    /// Connects to Postgres, applies migrations and seeds the car layout.
    /// The returned [`database::Database`] is kept by the caller so the pool
    /// can be closed on shutdown.
    pub async fn bootstrap(
        config: &config::Config,
    ) -> anyhow::Result<(Arc<Self>, database::Database)> {
        let db = database::Database::connect(&config.database).await?;
        info!("Database connected");

        db.run_migrations().await?;

        let store: Arc<dyn SeatStore> = Arc::new(PgSeatStore::new(db.clone()));
        SeatCatalog::new(store.clone(), config.layout)
            .initialize()
            .await?;

        Ok((Arc::new(Self::new(store)), db))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
