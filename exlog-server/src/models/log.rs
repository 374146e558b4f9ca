//! Exercise log query parameters

use serde::Deserialize;

use super::{ExerciseDate, ValidationError};

/// Raw query string for `GET /api/users/{id}/logs`.
///
/// Everything arrives as text so malformed values surface as
/// [`ValidationError`]s with a useful message instead of an opaque rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Parsed log filter.
///
/// Both date bounds are inclusive. `limit` keeps the first N matches in
/// stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Whether `date` falls inside the requested range.
    pub fn contains(&self, date: ExerciseDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

impl TryFrom<LogParams> for LogFilter {
    type Error = ValidationError;

    fn try_from(params: LogParams) -> Result<Self, Self::Error> {
        let from = present(params.from.as_deref())
            .map(|s| ExerciseDate::parse("from", s))
            .transpose()?;
        let to = present(params.to.as_deref())
            .map(|s| ExerciseDate::parse("to", s))
            .transpose()?;
        let limit = present(params.limit.as_deref())
            .map(|s| {
                s.parse::<usize>().map_err(|_| ValidationError::InvalidFormat {
                    field: "limit",
                    reason: "must be a non-negative whole number",
                })
            })
            .transpose()?;

        Ok(Self { from, to, limit })
    }
}

/// Empty query values (`?limit=`) count as not supplied.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
