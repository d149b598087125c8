use axum::{
    http::{header, Method},
    routing::post,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{config::CorsOrigins, handlers::keys as key_handlers, state::AppState};

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.cfg.cors_origins);

    Router::new()
        .route("/generate-key", post(key_handlers::generate_key))
        .route("/validate-key", post(key_handlers::validate_key))
        .layer(cors)
        .with_state(state)
}

/// Only the listed origins get CORS headers; an empty list allows none and `Any` allows all.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
