use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::response::{ApiRejection, JsonUtf8};
use crate::serializers::api_error::ApiError;
use crate::serializers::with_health::Health;

pub async fn health() -> JsonUtf8<Health> {
    JsonUtf8(Health { status: "WITH online" })
}

pub async fn not_found() -> ApiRejection {
    (
        StatusCode::NOT_FOUND,
        JsonUtf8(ApiError::new("not_found", "no such route")),
    )
}

/// Gives axum's bodiless 405 the same `{error, message}` body as every other failure.
/// The `Allow` header is carried over.
pub async fn method_not_allowed(resp: Response) -> Response {
    if resp.status() != StatusCode::METHOD_NOT_ALLOWED
        || resp.headers().contains_key(header::CONTENT_TYPE)
    {
        return resp;
    }

    let allow = resp.headers().get(header::ALLOW).cloned();
    let mut out = (
        StatusCode::METHOD_NOT_ALLOWED,
        JsonUtf8(ApiError::new("method_not_allowed", "method not allowed for this route")),
    )
        .into_response();
    if let Some(allow) = allow {
        out.headers_mut().insert(header::ALLOW, allow);
    }
    out
}
