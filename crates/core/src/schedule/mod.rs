//! Recurrence schedules - periodicity units and calendar stepping.

mod schedule_model;

mod schedule_model_tests;

// Re-export the public interface
pub use schedule_model::{Periodicity, Schedule};
