//! API Module
//!
//! HTTP handlers and routing for the file registry REST API.
//!
//! # Endpoints
//! - `POST /temp-file-registry/api/v1/upload` - Store a file under a key
//! - `GET /temp-file-registry/api/v1/download?key=K&delete=true` - Retrieve a file
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, URL_PATH_PREFIX};
