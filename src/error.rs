use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Why a payload was rejected. Only used for logging, clients always see the same body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyBody,
    Malformed(String),
    Falsy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    InvalidPayload(RejectReason),
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::EmptyBody => write!(f, "empty body"),
            RejectReason::Malformed(e) => write!(f, "malformed json: {}", e),
            RejectReason::Falsy => write!(f, "payload is falsy"),
        }
    }
}

impl Display for CallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackError::InvalidPayload(reason) => write!(f, "InvalidPayload ({})", reason),
        }
    }
}

impl std::error::Error for CallbackError {}

impl From<serde_json::Error> for CallbackError {
    fn from(error: serde_json::Error) -> Self {
        CallbackError::InvalidPayload(RejectReason::Malformed(error.to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody { error: "Invalid JSON" }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_response_hides_reason() {
        let err: CallbackError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("InvalidPayload (malformed json"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Invalid JSON"}"#);
    }
}
