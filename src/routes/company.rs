use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::Deserialize;

use crate::{
    db::{company_repo, entities::company},
    error::ApiError,
    routes::ExecResponse,
    state::AppState,
    validate::{require, require_text},
};

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(rename = "COMPANY_ID")]
    pub company_id: Option<i32>,
    #[serde(rename = "COMPANY_NAME")]
    pub company_name: Option<String>,
    #[serde(rename = "COMPANY_CITY")]
    pub company_city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCityRequest {
    #[serde(rename = "COMPANY_ID")]
    pub company_id: Option<i32>,
    #[serde(rename = "COMPANY_CITY")]
    pub company_city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameByCityRequest {
    #[serde(rename = "COMPANY_NAME")]
    pub company_name: Option<String>,
    #[serde(rename = "COMPANY_CITY")]
    pub company_city: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/company",
            post(create_company)
                .get(list_companies)
                .put(update_city)
                .patch(rename_by_city),
        )
        .route("/companies", get(list_companies))
        .route("/company/{id}", delete(delete_company))
        .with_state(state)
}

async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<company::Model>), ApiError> {
    let mut errors = Vec::new();
    let id = require(&mut errors, "COMPANY_ID", body.company_id);
    let name = require_text(&mut errors, "COMPANY_NAME", body.company_name);
    let city = require_text(&mut errors, "COMPANY_CITY", body.company_city);
    let (Some(id), Some(name), Some(city)) = (id, name, city) else {
        return Err(ApiError::validation(errors));
    };

    let created = company_repo::create(&state.db, id, &name, &city).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<company::Model>>, ApiError> {
    Ok(Json(company_repo::list_all(&state.db).await?))
}

async fn update_city(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateCityRequest>,
) -> Result<Json<ExecResponse>, ApiError> {
    let mut errors = Vec::new();
    let id = require(&mut errors, "COMPANY_ID", body.company_id);
    let city = require_text(&mut errors, "COMPANY_CITY", body.company_city);
    let (Some(id), Some(city)) = (id, city) else {
        return Err(ApiError::validation(errors));
    };

    let rows_affected = company_repo::update_city(&state.db, id, &city).await?;
    Ok(Json(ExecResponse { rows_affected }))
}

async fn rename_by_city(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RenameByCityRequest>,
) -> Result<Json<ExecResponse>, ApiError> {
    let mut errors = Vec::new();
    let name = require_text(&mut errors, "COMPANY_NAME", body.company_name);
    let city = require_text(&mut errors, "COMPANY_CITY", body.company_city);
    let (Some(name), Some(city)) = (name, city) else {
        return Err(ApiError::validation(errors));
    };

    let rows_affected = company_repo::rename_by_city(&state.db, &name, &city).await?;
    Ok(Json(ExecResponse { rows_affected }))
}

// Deleting an id that is already gone is a no-op, not an error.
async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ExecResponse>, ApiError> {
    let rows_affected = company_repo::delete(&state.db, id).await?;
    Ok(Json(ExecResponse { rows_affected }))
}
