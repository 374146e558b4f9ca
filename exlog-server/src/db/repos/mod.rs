//! Repository implementations for database access
//!
//! One repository per table, each borrowing the shared pool.

pub mod users;
pub mod exercises;

pub use users::UserRepo;
pub use exercises::ExerciseRepo;
