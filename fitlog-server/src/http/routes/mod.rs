//! Route handlers organized by resource

pub mod exercises;
pub mod health;
pub mod home;
pub mod logs;
pub mod users;
