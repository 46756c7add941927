//! Indexing Progress Events
//!
//! Message-passing progress reporting for long-running indexing and
//! duplicate-scan runs. See the design note in `domain_events` for why this
//! is an event bus rather than a callback.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DomainEvent`] | A single progress update |
//! | [`IndexPhase`] | The phase an update belongs to |
//! | [`EventPublisher`] | Port for publishing updates |

/// Progress event definitions and publisher port
pub mod domain_events;

pub use domain_events::{DomainEvent, EventPublisher, IndexPhase, SharedEventPublisher};
