//! Savings goals module - domain models and the command-sourced aggregate.

mod savings_aggregate;
mod savings_model;


// Re-export the public interface
pub use savings_aggregate::SavingGoal;
pub use savings_model::SavingGoalRecord;
