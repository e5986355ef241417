//! Accounts module - the collaborator model savings goals are owned by.

mod accounts_model;

// Re-export the public interface
pub use accounts_model::Account;
