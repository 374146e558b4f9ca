//! Exercise field validation

use serde::{Deserialize, Serialize};

use super::validation::{required_text, ValidationError};

/// Maximum length for exercise descriptions
const MAX_DESCRIPTION_LEN: usize = 1024;

/// Validated exercise description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        required_text("description", s, MAX_DESCRIPTION_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Duration as it arrives on the wire.
///
/// JSON clients send a number (`30` or `30.0`); HTML forms send text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Whole(i64),
    Decimal(f64),
    Text(String),
}

/// Exercise duration in whole minutes (always positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExerciseDuration(i32);

impl ExerciseDuration {
    /// Coerce wire input into a duration.
    ///
    /// # Example
    /// ```
    /// use exlog_server::models::{DurationInput, ExerciseDuration};
    ///
    /// let d = ExerciseDuration::new(Some(DurationInput::Text("30".into()))).unwrap();
    /// assert_eq!(d.minutes(), 30);
    /// assert!(ExerciseDuration::new(Some(DurationInput::Whole(0))).is_err());
    /// ```
    pub fn new(input: Option<DurationInput>) -> Result<Self, ValidationError> {
        match input.ok_or(ValidationError::Missing { field: "duration" })? {
            DurationInput::Whole(n) => Self::from_minutes(n),
            DurationInput::Decimal(f) => Self::from_decimal(f),
            DurationInput::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::Empty { field: "duration" });
                }
                match s.parse::<i64>() {
                    Ok(n) => Self::from_minutes(n),
                    Err(_) => Self::from_decimal(s.parse::<f64>().map_err(|_| not_whole())?),
                }
            }
        }
    }

    /// Whole-valued decimals (`30.0`) are accepted; anything with a
    /// fractional part, NaN, or infinity is not.
    fn from_decimal(f: f64) -> Result<Self, ValidationError> {
        if !f.is_finite() || f.fract() != 0.0 {
            return Err(not_whole());
        }

        if f <= 0.0 {
            return Self::from_minutes(0);
        }

        if f > f64::from(i32::MAX) {
            return Err(too_large());
        }

        // In range and integral, so the cast is exact
        Self::from_minutes(f as i64)
    }

    /// Build from a raw minute count, rejecting zero, negatives, and overflow.
    pub fn from_minutes(minutes: i64) -> Result<Self, ValidationError> {
        if minutes <= 0 {
            return Err(ValidationError::InvalidFormat {
                field: "duration",
                reason: "must be greater than zero",
            });
        }

        i32::try_from(minutes).map(Self).map_err(|_| too_large())
    }

    pub fn minutes(&self) -> i32 {
        self.0
    }
}

fn too_large() -> ValidationError {
    ValidationError::InvalidFormat {
        field: "duration",
        reason: "is too large",
    }
}

fn not_whole() -> ValidationError {
    ValidationError::InvalidFormat {
        field: "duration",
        reason: "must be a whole number of minutes",
    }
}
