use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CallbackError, RejectReason};

pub fn callback_router() -> Router {
    Router::new()
        .route("/callbacks", post(receive_callback))
}

#[derive(Debug, Serialize)]
struct Ack {
    message: &'static str,
}

async fn receive_callback(body: Bytes) -> Result<impl IntoResponse, CallbackError> {
    // 解析请求体，失败时只在 debug 级别记录原因
    let payload = parse_payload(&body).inspect_err(|e| {
        debug!("Rejected callback: {}", e);
    })?;

    // 成功时输出一次 payload
    info!("Received callback: {}", payload);

    Ok((
        StatusCode::OK,
        Json(Ack { message: "Callback received" }),
    ))
}

/// Decodes a request body, accepting only truthy JSON values.
pub fn parse_payload(body: &[u8]) -> Result<Value, CallbackError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CallbackError::InvalidPayload(RejectReason::EmptyBody));
    }

    let payload: Value = serde_json::from_slice(body)?;
    if !is_truthy(&payload) {
        return Err(CallbackError::InvalidPayload(RejectReason::Falsy));
    }

    Ok(payload)
}

/// `null`, `false`, zero, and empty strings, arrays and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        // 超出 f64 范围的数（如 1e400）没有有限值，按非零处理
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
