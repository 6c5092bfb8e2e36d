//! Error responses for the HTTP API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Returned for any failure that is not the caller's fault
pub const GENERIC_SERVER_ERROR: &str =
    "An unexpected error occurred on the server. Please try again later.";

/// The keyword-insertion route's variant of [`GENERIC_SERVER_ERROR`]
pub const INSERTION_SERVER_ERROR: &str =
    "An unexpected error occurred while inserting the keyword.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {error}")]
    Internal {
        error: seolens_core::Error,
        message: &'static str,
    },

    #[error("Handler panicked: {detail}")]
    Panic {
        detail: String,
        message: &'static str,
    },
}

impl ApiError {
    /// Same as `From`, but unexpected failures carry the insertion message
    pub fn during_insertion(err: seolens_core::Error) -> Self {
        match ApiError::from(err) {
            ApiError::Internal { error, .. } => ApiError::Internal {
                error,
                message: INSERTION_SERVER_ERROR,
            },
            other => other,
        }
    }
}

impl From<seolens_core::Error> for ApiError {
    fn from(err: seolens_core::Error) -> Self {
        match err {
            seolens_core::Error::Validation(message) => ApiError::InvalidRequest(message),
            error => ApiError::Internal {
                error,
                message: GENERIC_SERVER_ERROR,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Internal { error, message } => {
                tracing::error!("Internal error: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            ApiError::Panic { detail, message } => {
                tracing::error!("Handler panicked: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

type PanicPayload = Box<dyn std::any::Any + Send + 'static>;

fn panic_detail(err: PanicPayload) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Response for a panic caught by `CatchPanicLayer`
pub fn panic_response(err: PanicPayload) -> Response {
    ApiError::Panic {
        detail: panic_detail(err),
        message: GENERIC_SERVER_ERROR,
    }
    .into_response()
}

/// Panic response for the keyword-insertion route
pub fn insertion_panic_response(err: PanicPayload) -> Response {
    ApiError::Panic {
        detail: panic_detail(err),
        message: INSERTION_SERVER_ERROR,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_errors_keep_validation_as_bad_request() {
        let err = ApiError::during_insertion(seolens_core::Error::Validation("missing".into()));
        assert!(matches!(err, ApiError::InvalidRequest(ref m) if m == "missing"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_insertion_errors_use_the_insertion_message() {
        let err = ApiError::during_insertion(seolens_core::Error::Provider("down".into()));
        assert!(matches!(
            err,
            ApiError::Internal { message, .. } if message == INSERTION_SERVER_ERROR
        ));

        let err = ApiError::from(seolens_core::Error::Provider("down".into()));
        assert!(matches!(
            err,
            ApiError::Internal { message, .. } if message == GENERIC_SERVER_ERROR
        ));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
