//! HTTP routes.
//!
//! | Method | Path                  | Handler                      |
//! |--------|-----------------------|------------------------------|
//! | GET    | `/`                   | [`root`]                     |
//! | GET    | `/health`             | [`health`]                   |
//! | GET    | `/menu/`              | [`menu::list_menu`]          |
//! | GET    | `/menu/all`           | [`menu::list_all`]           |
//! | POST   | `/orders/`            | [`orders::create_order`]     |
//! | GET    | `/orders/pending`     | [`orders::pending_orders`]   |
//! | GET    | `/orders/consumption` | [`orders::consumption`]      |

pub mod menu;
pub mod orders;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::config::{API_TITLE, API_VERSION};
use crate::state::AppState;

/// `GET /`
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": API_TITLE,
        "version": API_VERSION,
    }))
}

/// `GET /health` - 503 when the database stops answering.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if state.db.health_check().await {
        (StatusCode::OK, Json(json!({ "status": "healthy" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unhealthy" })),
        )
    }
}
