// src/api/http/router.rs
// HTTP router composition for the proxy endpoints.

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{generate_artwork_handler, generate_prompt_handler, health_handler};
use crate::state::AppState;

/// Main HTTP router: health plus the two stateless AI proxy endpoints.
///
/// The CORS layer answers OPTIONS preflight requests with an empty 200
/// before any handler runs, mirroring the contract journaling clients
/// depend on.
pub fn app_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        // Health
        .route("/health", get(health_handler))
        // AI proxies
        .route("/functions/generate-prompt", post(generate_prompt_handler))
        .route("/functions/generate-artwork", post(generate_artwork_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
