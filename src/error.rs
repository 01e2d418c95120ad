//! Application error type and its HTTP mapping.
//!
//! Every failure is a direct status translation with an empty body:
//!
//! | Error | Status |
//! |---|---|
//! | [`AppError::InvalidUrl`] | 400 Bad Request |
//! | [`AppError::NotFound`] | 404 Not Found |
//! | [`AppError::Store`] | 500 Internal Server Error |
//! | [`AppError::Hash`] | 500 Internal Server Error |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Short link not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to hash URL: {0}")]
    Hash(#[from] std::io::Error),
}

impl AppError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> Self {
        AppError::InvalidUrl
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => {
                tracing::error!(error = %e, "Store failure while handling request")
            }
            AppError::Hash(e) => tracing::error!(error = %e, "Failed to derive short id"),
            _ => {}
        }

        self.status_code().into_response()
    }
}
