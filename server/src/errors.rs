use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::ActionResponse;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Login required")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("Search index error: {0}")]
    Index(#[from] tantivy::TantivyError),

    #[error("Server error, please try again later.")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Index(err) => {
                error!("search index failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(detail) => {
                error!("internal error: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ActionResponse::failed(self.to_string()))).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
