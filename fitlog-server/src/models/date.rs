//! Canonical calendar-date handling.
//!
//! Entry dates travel as human-readable strings like `Sun Jan 15 2023`
//! and are compared date-only; time-of-day never enters the picture.

use std::fmt;

use chrono::{Local, NaiveDate};

/// Render format shared by responses, stored entries, and filtering.
const CANONICAL_FORMAT: &str = "%a %b %d %Y";

/// ISO input format accepted from callers.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date that renders in the canonical log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogDate(NaiveDate);

impl LogDate {
    /// Parse a caller-supplied date.
    ///
    /// Accepts ISO (`2023-01-15`) and the canonical form itself
    /// (`Sun Jan 15 2023`), so re-parsing a stored value is lossless.
    /// Anything else is rejected rather than guessed at.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, CANONICAL_FORMAT))
            .ok()
            .map(Self)
    }

    /// Today's date in local time.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Lower bound used when a range filter has no `from`: the Unix epoch.
    pub fn epoch_start() -> Self {
        Self(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}
