//! Calendar dates for exercises
//!
//! Dates are accepted in a handful of common spellings and always rendered
//! in the short calendar form, e.g. `Sun Jan 15 2023`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

use super::ValidationError;

/// Output format: weekday, month, zero-padded day, year
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Date-only spellings tried in order after ISO and RFC 3339.
const DATE_FORMATS: &[&str] = &[DISPLAY_FORMAT, "%B %d, %Y", "%b %d, %Y", "%Y/%m/%d"];

/// Calendar date of an exercise (no time of day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Parse user input into a date.
    ///
    /// `field` names the input in the error message.
    ///
    /// # Example
    /// ```
    /// use exlog_server::models::ExerciseDate;
    ///
    /// let date = ExerciseDate::parse("date", "2023-01-15").unwrap();
    /// assert_eq!(date.to_string(), "Sun Jan 15 2023");
    /// assert!(ExerciseDate::parse("date", "not a date").is_err());
    /// ```
    pub fn parse(field: &'static str, input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(ts.with_timezone(&Utc).date_naive()));
        }

        if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Self(ts.date()));
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate {
                field,
                value: input.to_owned(),
            })
    }

    /// Current date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ExerciseDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for ExerciseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
