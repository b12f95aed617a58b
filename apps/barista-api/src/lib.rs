//! # Barista API
//!
//! HTTP layer for the coffee shop backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barista API Server                               │
//! │                                                                         │
//! │  Client ──► axum Router ──► handlers ──► barista-core services         │
//! │               │  CorsLayer                        │                     │
//! │               │  TraceLayer                       ▼                     │
//! │               │                          barista-db (SQLite)            │
//! │               ▼                                                         │
//! │            ApiError ──► {"detail": ...} with 400 / 422 / 500           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Builds the application router.
pub fn router(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/menu", get(routes::menu::list_menu))
        .route("/menu/", get(routes::menu::list_menu))
        .route("/menu/all", get(routes::menu::list_all))
        .route("/orders", post(routes::orders::create_order))
        .route("/orders/", post(routes::orders::create_order))
        .route("/orders/pending", get(routes::orders::pending_orders))
        .route("/orders/consumption", get(routes::orders::consumption))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
