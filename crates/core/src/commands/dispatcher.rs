//! Command dispatcher - routes commands to registered handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use log::debug;

use super::command::{Command, CommandKind};
use crate::errors::Result;

/// Trait for consuming commands and applying them to durable storage.
///
/// # Design Rules
///
/// - `handle()` runs synchronously on the publishing thread.
/// - The publishing aggregate mutated its in-memory state before the
///   command reached the handler; an error here leaves logical and durable
///   state divergent, so handlers must be idempotent and safe to retry.
/// - Ordering is guaranteed only among the handlers of a single publish
///   call, never across commands of different aggregates.
pub trait CommandHandler: Send + Sync {
    /// Applies a single command.
    fn handle(&self, command: &Command) -> Result<()>;
}

/// The narrow publish capability held by aggregates.
///
/// Aggregates receive this at construction instead of reaching for a
/// process-wide singleton, so tests can swap in a collecting double and
/// callers see every dependency explicitly.
pub trait CommandPublisher: Send + Sync {
    /// Hands a command to the registered handlers.
    fn publish(&self, command: Command) -> Result<()>;
}

/// Routes commands to the handlers registered for their kind.
///
/// One instance per process, created at bootstrap and shared by reference.
/// The registry is read-mostly: handlers are registered while wiring the
/// application and only looked up afterwards, so concurrent publishes from
/// multiple threads share a read lock.
#[derive(Default)]
pub struct CommandDispatcher {
    handlers: RwLock<HashMap<CommandKind, Vec<Arc<dyn CommandHandler>>>>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for one command kind. Handlers for the same
    /// kind run in registration order.
    pub fn register(&self, kind: CommandKind, handler: Arc<dyn CommandHandler>) {
        self.handlers
            .write()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    /// The number of handlers registered for a kind.
    pub fn handler_count(&self, kind: CommandKind) -> usize {
        self.handlers
            .read()
            .unwrap()
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

impl CommandPublisher for CommandDispatcher {
    /// Invokes every handler registered for the command's kind,
    /// synchronously and in registration order, on the calling thread.
    ///
    /// The first handler error propagates to the caller; handlers already
    /// invoked are not rolled back. A command with no registered handlers
    /// is dropped silently.
    fn publish(&self, command: Command) -> Result<()> {
        let handlers = {
            let registry = self.handlers.read().unwrap();
            registry.get(&command.kind()).cloned().unwrap_or_default()
        };

        debug!(
            "publishing {:?} to {} handler(s)",
            command.kind(),
            handlers.len()
        );

        for handler in &handlers {
            handler.handle(&command)?;
        }
        Ok(())
    }
}

/// No-op publisher for contexts that do not wire handlers.
#[derive(Clone, Copy, Default)]
pub struct NoOpPublisher;

impl CommandPublisher for NoOpPublisher {
    fn publish(&self, _command: Command) -> Result<()> {
        Ok(())
    }
}

/// Publisher double for tests - records published commands.
#[derive(Clone, Default)]
pub struct CollectingPublisher {
    commands: Arc<Mutex<Vec<Command>>>,
}

impl CollectingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected commands.
    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    /// Returns the number of collected commands.
    pub fn len(&self) -> usize {
        self.commands.lock().unwrap().len()
    }

    /// Returns true if no commands have been collected.
    pub fn is_empty(&self) -> bool {
        self.commands.lock().unwrap().is_empty()
    }

    /// Clears collected commands.
    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
    }
}

impl CommandPublisher for CollectingPublisher {
    fn publish(&self, command: Command) -> Result<()> {
        self.commands.lock().unwrap().push(command);
        Ok(())
    }
}
