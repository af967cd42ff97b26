use axum::{Router, middleware::map_response, routing::get};
use crate::views::with_health::{health, method_not_allowed, not_found};

pub fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .layer(map_response(method_not_allowed))
        .fallback(not_found)
}
