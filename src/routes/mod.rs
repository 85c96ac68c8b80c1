use std::sync::Arc;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

pub mod catalog;
pub mod company;
pub mod customer;
pub mod item;
pub mod order;

/// Statement result metadata returned by non-create write routes.
#[derive(Debug, Serialize)]
pub struct ExecResponse {
    pub rows_affected: u64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(company::router(state.clone()))
        .merge(customer::router(state.clone()))
        .merge(order::router(state.clone()))
        .merge(item::router(state.clone()))
        .merge(catalog::router(state))
}
