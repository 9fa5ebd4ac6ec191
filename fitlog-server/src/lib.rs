//! fitlog-server: the exercise-tracking HTTP API
//!
//! Everything the service does lives here: the store adapter ([`db`]),
//! the persisted and coerced shapes ([`models`]), and the axum surface
//! ([`http`]). The `fitlog` binary wires configuration and a lazy pool
//! into [`http::run_server`].

pub mod db;
pub mod http;
pub mod models;
