//! HTTP API server

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsSection;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState, cors: &CorsSection) -> Router {
    Router::new()
        .route("/", get(handlers::healthcheck))
        .route("/machines", get(handlers::list_machines))
        .route("/ask-ai", post(handlers::ask_ai))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Cross-origin policy applied uniformly to every response.
///
/// With the wildcard origin the layer mirrors the requesting origin rather
/// than sending a literal `*`: browsers reject `*` combined with
/// allow-credentials, and tower-http refuses the combination outright.
pub fn cors_layer(section: &CorsSection) -> CorsLayer {
    let origin = if section.is_wildcard() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = section
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(section.allow_credentials)
}
