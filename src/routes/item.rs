use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    db::{entities::item, item_repo},
    error::ApiError,
    routes::ExecResponse,
    state::AppState,
    validate::require_text,
};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "ITEMCODE")]
    pub itemcode: Option<String>,
    #[serde(rename = "ITEMNAME")]
    pub itemname: Option<String>,
    #[serde(rename = "BATCHCODE")]
    pub batchcode: Option<String>,
    #[serde(rename = "CONAME")]
    pub coname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameItemRequest {
    #[serde(rename = "ITEMCODE")]
    pub itemcode: Option<String>,
    #[serde(rename = "ITEMNAME")]
    pub itemname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetCompanyRequest {
    #[serde(rename = "ITEMCODE")]
    pub itemcode: Option<String>,
    #[serde(rename = "CONAME")]
    pub coname: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/list",
            post(create_item)
                .get(list_items)
                .put(rename_item)
                .patch(set_company),
        )
        .route("/list/{id}", get(find_item).delete(delete_item))
        .with_state(state)
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<item::Model>), ApiError> {
    let mut errors = Vec::new();
    let code = require_text(&mut errors, "ITEMCODE", body.itemcode);
    let name = require_text(&mut errors, "ITEMNAME", body.itemname);
    let batch = require_text(&mut errors, "BATCHCODE", body.batchcode);
    let company = require_text(&mut errors, "CONAME", body.coname);
    let (Some(code), Some(name), Some(batch), Some(company)) = (code, name, batch, company) else {
        return Err(ApiError::validation(errors));
    };

    let created = item_repo::create(&state.db, &code, &name, &batch, &company).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<item::Model>>, ApiError> {
    Ok(Json(item_repo::list_all(&state.db).await?))
}

async fn find_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<item::Model>>, ApiError> {
    Ok(Json(item_repo::find_by_code(&state.db, &id).await?))
}

async fn rename_item(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RenameItemRequest>,
) -> Result<Json<ExecResponse>, ApiError> {
    let mut errors = Vec::new();
    let code = require_text(&mut errors, "ITEMCODE", body.itemcode);
    let name = require_text(&mut errors, "ITEMNAME", body.itemname);
    let (Some(code), Some(name)) = (code, name) else {
        return Err(ApiError::validation(errors));
    };

    let rows_affected = item_repo::rename(&state.db, &code, &name).await?;
    Ok(Json(ExecResponse { rows_affected }))
}

async fn set_company(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetCompanyRequest>,
) -> Result<Json<ExecResponse>, ApiError> {
    let mut errors = Vec::new();
    let code = require_text(&mut errors, "ITEMCODE", body.itemcode);
    let company = require_text(&mut errors, "CONAME", body.coname);
    let (Some(code), Some(company)) = (code, company) else {
        return Err(ApiError::validation(errors));
    };

    let rows_affected = item_repo::set_company(&state.db, &code, &company).await?;
    Ok(Json(ExecResponse { rows_affected }))
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ExecResponse>, ApiError> {
    let rows_affected = item_repo::delete(&state.db, &id).await?;
    Ok(Json(ExecResponse { rows_affected }))
}
