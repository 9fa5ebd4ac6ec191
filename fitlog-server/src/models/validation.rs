//! Validation error types

use std::fmt;

/// Validation failure for a request field.
///
/// Raw form and query values are coerced explicitly when domain types are
/// built; anything that does not coerce surfaces here instead of being
/// silently passed through or mangled.
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field absent or blank
    Missing { field: &'static str },

    /// Field present but not coercible to its expected type
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::Invalid { field, reason } => write!(f, "{field} {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let missing = ValidationError::Missing {
            field: "description",
        };
        assert_eq!(missing.to_string(), "description is required");

        let invalid = ValidationError::Invalid {
            field: "duration",
            reason: "must be a whole number",
        };
        assert_eq!(invalid.to_string(), "duration must be a whole number");
    }
}
