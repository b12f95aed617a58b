//! Order and consumption endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use barista_core::{validation, ConsumptionReport, OrderRequest, OrderView};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `POST /orders/` - place an order.
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> ApiResult<Json<OrderView>> {
    let Json(request) = body?;
    Ok(Json(state.orders().create_order(&request).await?))
}

/// `GET /orders/pending` - every pending order, oldest first.
pub async fn pending_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderView>>> {
    Ok(Json(state.orders().pending_orders().await?))
}

#[derive(Debug, Deserialize)]
pub struct ConsumptionQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    1
}

/// `GET /orders/consumption?days=N` - ingredient usage over the last N days.
pub async fn consumption(
    State(state): State<AppState>,
    query: Result<Query<ConsumptionQuery>, QueryRejection>,
) -> ApiResult<Json<ConsumptionReport>> {
    let Query(query) = query?;
    validation::validate_window_days(query.days)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    Ok(Json(state.consumption().analyze(query.days).await?))
}
