use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use crate::serializers::api_error::ApiError;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Like `axum::Json`, but always answers with an explicit utf-8 charset.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonUtf8<T>(pub T);

/// Failure half of every handler's return type.
pub type ApiRejection = (StatusCode, JsonUtf8<ApiError>);

impl<T: Serialize> IntoResponse for JsonUtf8<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => json_bytes(StatusCode::OK, bytes),
            Err(e) => {
                error!("response serialization failed: {e}");
                json_bytes(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    br#"{"error":"internal_error","message":"failed to serialize response"}"#.to_vec(),
                )
            }
        }
    }
}

fn json_bytes(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
        bytes,
    )
        .into_response()
}

// ---------- small helpers ----------

/// Maps a body that failed to parse into a structured `invalid_request`, keeping axum's status
/// (400 syntax, 415 content type, 413 too large, 422 shape).
pub fn rejected(rejection: JsonRejection) -> ApiRejection {
    debug!("rejected request body: {}", rejection.body_text());
    (
        rejection.status(),
        JsonUtf8(ApiError::new("invalid_request", rejection.body_text())),
    )
}

pub fn bad_gateway(msg: impl Into<String>) -> ApiRejection {
    (StatusCode::BAD_GATEWAY, JsonUtf8(ApiError::new("upstream_error", msg)))
}

pub fn gateway_timeout(msg: impl Into<String>) -> ApiRejection {
    (
        StatusCode::GATEWAY_TIMEOUT,
        JsonUtf8(ApiError::new("upstream_timeout", msg)),
    )
}
