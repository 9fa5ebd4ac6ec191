//! Exercise entry shape and form-field coercion.

use serde::{Deserialize, Serialize};

use super::{LogDate, ValidationError};

/// A single logged activity, as stored in a user's log and returned on
/// the wire. `date` stays a string end to end; it is parsed only when a
/// range filter needs to compare it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl ExerciseEntry {
    /// Build an entry from raw form fields, coercing each one explicitly.
    ///
    /// `description` is required and stored trimmed. `duration` is
    /// required and must parse as a whole number; `"30"` becomes `30`,
    /// `"banana"` is an error, not a null. `date` is optional: blank or
    /// absent means today, anything else must parse.
    pub fn from_form(
        description: Option<String>,
        duration: Option<String>,
        date: Option<String>,
    ) -> Result<Self, ValidationError> {
        let description = description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing {
                field: "description",
            })?
            .to_owned();

        let duration = duration
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing { field: "duration" })?
            .parse::<i32>()
            .map_err(|_| ValidationError::Invalid {
                field: "duration",
                reason: "must be a whole number",
            })?;

        let date = match date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => LogDate::parse(raw).ok_or(ValidationError::Invalid {
                field: "date",
                reason: "is not a recognized date",
            })?,
            None => LogDate::today(),
        };

        Ok(Self {
            description,
            duration,
            date: date.to_string(),
        })
    }
}
