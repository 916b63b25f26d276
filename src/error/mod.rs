use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::assets::AssetStoreError;
use crate::content::ContentError;
use crate::notification::DeliveryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Unauthorized request")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    AssetStore(#[from] AssetStoreError),
}

/// Failure envelope shared by every route: `{success: false, error: ...}`
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_)
            | AppError::Content(_)
            | AppError::Delivery(_)
            | AppError::AssetStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Client mistakes are routine; only collaborator and server faults are errors.
        match &self {
            AppError::Unauthorized
            | AppError::Validation(_)
            | AppError::PayloadTooLarge
            | AppError::NotFound
            | AppError::MethodNotAllowed => {
                tracing::debug!(status = %status.as_u16(), message = %self, "Request rejected");
            }
            _ => {
                tracing::error!(status = %status.as_u16(), message = %self, "API error");
            }
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
