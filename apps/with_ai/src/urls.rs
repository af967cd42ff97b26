use axum::{Router, extract::DefaultBodyLimit, middleware::map_response, routing::post};
use with_core::views::with_health::method_not_allowed;

use crate::views::{with_classify::classify, with_respond::respond};
use crate::AppState;

pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify))
        .route("/respond", post(respond))
        .layer(map_response(method_not_allowed))
        .with_state(state)
}

/// The whole service as the gateway serves it: WITH endpoints, health, 404 fallback, body limit.
pub fn app(state: AppState) -> Router {
    router(state)
        .merge(with_core::urls::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
