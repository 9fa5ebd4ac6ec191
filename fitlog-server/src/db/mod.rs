//! Database layer - connection pool, schema bootstrap, repositories
//!
//! # Design principles
//!
//! - One lazy pool per process, shared by every handler through state
//! - Constraints live in the store; no check-then-insert
//! - The append path is a single atomic UPDATE

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{bootstrap, connect_lazy};
pub use repos::{DbError, UserRecord, UserRepo};
