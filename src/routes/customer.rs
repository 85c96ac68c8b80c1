use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{
    db::{customer_repo, entities::customer},
    error::ApiError,
    state::AppState,
    validate::require_text,
};

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customer", get(find_by_name))
        .route("/customer/{id}", get(find_by_code))
        .with_state(state)
}

async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<customer::Model>>, ApiError> {
    Ok(Json(customer_repo::list_all(&state.db).await?))
}

async fn find_by_code(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<customer::Model>>, ApiError> {
    Ok(Json(customer_repo::find_by_code(&state.db, &id).await?))
}

async fn find_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<customer::Model>>, ApiError> {
    let mut errors = Vec::new();
    let Some(name) = require_text(&mut errors, "name", query.name) else {
        return Err(ApiError::validation(errors));
    };
    Ok(Json(customer_repo::find_by_name(&state.db, &name).await?))
}
