//! Read-only enumeration endpoints. Each table is served by the same generic
//! handler, parameterized by its entity.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use sea_orm::EntityTrait;
use serde::Serialize;

use crate::{
    db::{
        catalog_repo,
        entities::{days_order, despatch, food, student_report},
    },
    error::ApiError,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/daysorder", get(enumerate::<days_order::Entity>))
        .route("/despatch", get(enumerate::<despatch::Entity>))
        .route("/foods", get(enumerate::<food::Entity>))
        .route("/studentreport", get(enumerate::<student_report::Entity>))
        .route("/item/{id}", get(find_food))
        .with_state(state)
}

async fn enumerate<E>(State(state): State<Arc<AppState>>) -> Result<Json<Vec<E::Model>>, ApiError>
where
    E: EntityTrait + 'static,
    E::Model: Serialize + Send + Sync + 'static,
{
    Ok(Json(catalog_repo::list_all::<E>(&state.db).await?))
}

async fn find_food(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<food::Model>>, ApiError> {
    Ok(Json(catalog_repo::find_food_by_item(&state.db, &id).await?))
}
