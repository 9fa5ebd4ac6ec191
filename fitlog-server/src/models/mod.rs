//! Domain models with explicit input coercion.
//!
//! Raw request fields are coerced when these types are built; malformed
//! input becomes a [`ValidationError`], never a panic or a silently
//! mangled value.

pub mod date;
pub mod entry;
pub mod log;
pub mod validation;

pub use date::LogDate;
pub use entry::ExerciseEntry;
pub use log::{render_log, LogFilter, LogQueryParams};
pub use validation::ValidationError;
