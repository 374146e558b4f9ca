//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod exercise;
pub mod date;
pub mod log;

pub use validation::ValidationError;
pub use user::{UserId, Username};
pub use exercise::{Description, DurationInput, ExerciseDuration};
pub use date::ExerciseDate;
pub use log::{LogFilter, LogParams};
