//! Command messaging module.
//!
//! Commands are immutable records of intent emitted by aggregate business
//! methods after an in-memory mutation. The dispatcher routes each command
//! to the handlers registered for its kind; handlers apply it durably.
//! Persistence failures therefore surface to the publishing caller *after*
//! the aggregate already changed, which is why handlers must be idempotent
//! and safe to retry.

mod command;
mod dispatcher;

// Re-export the public interface
pub use command::{Command, CommandKind};
pub use dispatcher::{
    CollectingPublisher, CommandDispatcher, CommandHandler, CommandPublisher, NoOpPublisher,
};
