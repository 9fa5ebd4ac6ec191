//! HTTP layer
//!
//! Axum server with permissive CORS, request tracing, JSON errors, and
//! graceful shutdown.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
