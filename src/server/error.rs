use super::types::ErrorResponse;
use crate::Error;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;
use tracing::{error, warn};

pub const QUERY_REQUIRED: &str = "Query is required.";
pub const CSV_CONTENT_REQUIRED: &str = "CSV content is required.";
pub const INVALID_BODY: &str = "Invalid request body.";
pub const BODY_TOO_LARGE: &str = "Request body too large.";
pub const UPSTREAM_FAILED: &str = "Completion service request failed.";
pub const GENERATION_FAILED: &str = "Internal server error.";
pub const PACKAGE_FAILED: &str = "Error in generating SCORM package.";

/// Failure kinds surfaced over HTTP. Only the fixed messages reach the
/// client; sources are logged.
#[derive(ThisError, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("{0}")]
    PayloadTooLarge(&'static str),

    #[error("upstream failure: {0}")]
    Upstream(Error),

    #[error("{message} ({source})")]
    Internal {
        message: &'static str,
        source: Error,
    },
}

impl ApiError {
    /// Routes completion-service errors to `Upstream` and everything else to
    /// `Internal` with the given public message.
    pub fn classify(source: Error, message: &'static str) -> Self {
        if source.is_upstream() {
            Self::Upstream(source)
        } else {
            Self::Internal { message, source }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(message) | Self::PayloadTooLarge(message) => *message,
            Self::Upstream(_) => UPSTREAM_FAILED,
            Self::Internal { message, .. } => *message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(BODY_TOO_LARGE)
        } else {
            Self::InvalidInput(INVALID_BODY)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidInput(message) | Self::PayloadTooLarge(message) => {
                warn!("Invalid input: {}", message)
            }
            Self::Upstream(source) => error!("Completion service failure: {}", source),
            Self::Internal { message, source } => error!("{} Cause: {}", message, source),
        }

        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
