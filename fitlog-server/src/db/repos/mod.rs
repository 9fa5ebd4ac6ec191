//! Repository implementations for database access

pub mod users;

pub use users::{DbError, UserRecord, UserRepo};
