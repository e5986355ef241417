//! Aggregate base contract.
//!
//! An aggregate owns its invariants and is the unit of consistency for one
//! conceptual entity. Every mutating operation (a *business method*)
//! performs, in order:
//!
//! 1. validate preconditions against current in-memory state and the
//!    arguments, returning a validation error and touching nothing on
//!    failure;
//! 2. update the aggregate's own in-memory fields to the new logical state;
//! 3. construct exactly one [`Command`](crate::commands::Command)
//!    describing the change;
//! 4. publish it through the injected
//!    [`CommandPublisher`](crate::commands::CommandPublisher).
//!
//! Because step 2 precedes step 4, a handler failure leaves the in-memory
//! aggregate ahead of durable storage. The in-memory object is a projection
//! of intent until its commands have been durably applied; handlers must be
//! idempotent so retrying a failed command reconciles the divergence.
//!
//! Aggregate instances are not thread-safe. Each instance belongs to a
//! single logical request: reconstruct a fresh one from storage per request
//! and let storage-side concurrency control detect real conflicts.

/// Common surface of domain aggregates.
pub trait AggregateRoot {
    /// The durable identity, absent until the creation command has been
    /// applied by a persistence handler.
    fn id(&self) -> Option<&str>;
}
