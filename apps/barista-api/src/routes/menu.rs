//! Menu endpoints.

use axum::extract::State;
use axum::Json;
use barista_core::{CoffeeProduct, MenuItem};

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /menu/` - display menu, prices in major units.
pub async fn list_menu(State(state): State<AppState>) -> ApiResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.menu().menu().await?))
}

/// `GET /menu/all` - administrative listing, prices in minor units.
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Json<Vec<CoffeeProduct>>> {
    Ok(Json(state.menu().catalog().await?))
}
