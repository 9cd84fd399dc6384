//! API Routes
//!
//! Configures the Axum router with all file registry endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{download_handler, health_handler, upload_handler, AppState};

// == Public Constants ==
/// Common prefix for all registry endpoints
pub const URL_PATH_PREFIX: &str = "/temp-file-registry/api/v1";

/// Headroom added to the transport-level body limit so that multipart framing
/// never trips it before the handler's explicit payload-size check does.
const BODY_LIMIT_OVERHEAD: usize = 64 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST {URL_PATH_PREFIX}/upload` - Store a file under a key
/// - `GET {URL_PATH_PREFIX}/download?key=K&delete=true` - Retrieve a file
/// - `GET /health` - Health check endpoint
///
/// Requests with a mismatched method on a known path get 405 from the router.
///
/// # Middleware
/// - Body limit: caps request size at the configured maximum plus framing headroom
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes + BODY_LIMIT_OVERHEAD);

    // Build router with all endpoints
    Router::new()
        .route(&format!("{URL_PATH_PREFIX}/upload"), post(upload_handler))
        .route(
            &format!("{URL_PATH_PREFIX}/download"),
            get(download_handler),
        )
        .route("/health", get(health_handler))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
