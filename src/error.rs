use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// One entry in the 422 `errors` list. Field names match the shape the
/// previous deployment's clients already parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: &'static str,
    pub param: &'static str,
}

impl FieldError {
    pub fn required(param: &'static str) -> Self {
        Self {
            msg: "is required",
            param,
        }
    }

    pub fn new(param: &'static str, msg: &'static str) -> Self {
        Self { msg, param }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database unavailable")]
    Unavailable(#[source] DbErr),
    #[error("query execution failed")]
    Query(#[source] DbErr),
}

impl ApiError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable(err),
            _ => Self::Query(err),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    kind: &'static str,
    message: &'static str,
}

fn envelope(status: StatusCode, kind: &'static str, message: &'static str) -> Response {
    let body = Json(ErrorBody {
        error: ErrorDetail { kind, message },
    });
    (status, body).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody { errors }),
            )
                .into_response(),
            Self::Unavailable(err) => {
                tracing::error!("connection acquisition failed: {err}");
                envelope(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "unavailable",
                    "database unavailable",
                )
            }
            Self::Query(err) => {
                tracing::error!("query failed: {err}");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "query",
                    "query execution failed",
                )
            }
        }
    }
}
