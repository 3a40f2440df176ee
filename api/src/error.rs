use crate::response::{ErrorsResponse, MessageResponse};
use crate::validation::FieldErrors;
use axum::{
    Json,
    http::{StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

/// Every failure a request can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer credential missing, malformed, or not the configured secret.
    #[error("missing or invalid bearer credential")]
    Unauthorized,
    #[error("request body failed validation")]
    Validation(FieldErrors),
    /// No student with the requested id.
    #[error("student not found")]
    NotFound,
    #[error("storage failure: {0}")]
    Storage(#[from] DbErr),
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, "Bearer realm=\"students\"")],
                Json(MessageResponse::new("Unauthorized")),
            )
                .into_response(),
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response()
            }
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not found"))).into_response()
            }
            Self::Storage(e) => {
                error!(error = %e, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}
