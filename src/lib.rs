pub mod booking;
pub mod catalog;
pub mod config;
pub mod controllers;
pub mod demo;
pub mod models;
pub mod schedule;

use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub store: catalog::MovieStore,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            store: catalog::MovieStore::seeded(),
            config,
        })
    }

    // Для тестов: состояние с произвольной афишей.
    pub fn with_store(config: config::Config, store: catalog::MovieStore) -> Arc<Self> {
        Arc::new(Self { store, config })
    }
}

/// Главный роутер приложения. Живёт в библиотеке, чтобы интеграционные
/// тесты гоняли ровно тот же стек, что и main.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "NotFlix Cinema API v1.0" }))
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({"status": "ok"})) }),
        )
        // Mount the routes from the controllers module
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
