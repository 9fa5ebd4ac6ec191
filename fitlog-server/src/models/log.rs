//! Log retrieval shaping: canonical re-rendering, date-range filtering,
//! and head truncation.
//!
//! All of this runs on an already-fetched log, so it stays pure and
//! testable without a database.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{ExerciseEntry, LogDate, ValidationError};

/// Raw query parameters for log retrieval. Everything arrives as text;
/// blank values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Coerced log filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Coerce raw query parameters, rejecting anything malformed instead
    /// of letting it skew the result.
    pub fn from_params(params: LogQueryParams) -> Result<Self, ValidationError> {
        let from = parse_bound("from", params.from)?;
        let to = parse_bound("to", params.to)?;

        let limit = match params
            .limit
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n >= 1 => Some(n),
                _ => {
                    return Err(ValidationError::Invalid {
                        field: "limit",
                        reason: "must be a positive integer",
                    })
                }
            },
            None => None,
        };

        Ok(Self { from, to, limit })
    }

    /// Whether a date range is in play at all.
    fn is_ranged(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

fn parse_bound(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => LogDate::parse(s)
            .map(|date| Some(date.as_naive()))
            .ok_or(ValidationError::Invalid {
                field,
                reason: "is not a recognized date",
            }),
        None => Ok(None),
    }
}

/// Shape a stored log for retrieval.
///
/// Entry dates are re-rendered canonically (a no-op when already
/// canonical; a value that no longer parses passes through verbatim).
/// When either bound is present, entries outside `[from ?? epoch,
/// to ?? today]` are dropped, with inclusive date-only comparison; an
/// unparseable date never matches a range. The limit keeps the first
/// `limit` survivors in insertion order.
pub fn render_log(entries: Vec<ExerciseEntry>, filter: &LogFilter) -> Vec<ExerciseEntry> {
    let ranged = filter.is_ranged();
    let from = filter
        .from
        .unwrap_or_else(|| LogDate::epoch_start().as_naive());
    let to = filter.to.unwrap_or_else(|| LogDate::today().as_naive());

    let mut log: Vec<ExerciseEntry> = entries
        .into_iter()
        .filter_map(|mut entry| {
            let parsed = LogDate::parse(&entry.date);
            if let Some(date) = parsed {
                entry.date = date.to_string();
            }
            if !ranged {
                return Some(entry);
            }
            match parsed {
                Some(date) if from <= date.as_naive() && date.as_naive() <= to => Some(entry),
                _ => None,
            }
        })
        .collect();

    if let Some(limit) = filter.limit {
        log.truncate(limit);
    }

    log
}
