//! Nestegg Core - Savings domain entities, commands, and schedule arithmetic.
//!
//! This crate contains the command-sourced savings-goal domain core. It is
//! storage-agnostic: aggregates validate and mutate in-memory state, then
//! publish commands through the dispatcher; external persistence handlers
//! consume the commands and apply them durably.

pub mod accounts;
pub mod aggregate;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod savings;
pub mod schedule;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
