use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{
    db::{entities::order, order_repo},
    error::ApiError,
    state::AppState,
    validate::SortDirection,
};

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub amount: Option<f64>,
    pub sorting: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/{amt}", get(find_by_amount))
        .with_state(state)
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<order::Model>>, ApiError> {
    // The sort token is validated before any connection is acquired.
    let sort = query
        .sorting
        .as_deref()
        .map(SortDirection::parse)
        .transpose()?;
    Ok(Json(order_repo::search(&state.db, query.amount, sort).await?))
}

async fn find_by_amount(
    State(state): State<Arc<AppState>>,
    Path(amt): Path<f64>,
) -> Result<Json<Vec<order::Model>>, ApiError> {
    Ok(Json(order_repo::find_by_amount(&state.db, amt).await?))
}
