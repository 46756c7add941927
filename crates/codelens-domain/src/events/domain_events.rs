//! Indexing progress events
//!
//! The Indexer reports progress by publishing events rather than invoking
//! caller-supplied callbacks: callbacks reentering the indexer (e.g. to
//! cancel) from inside its own call stack is a source of subtle bugs, message
//! passing through a publisher sidesteps it entirely.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shaku::Interface;
use std::sync::Arc;

/// The phase an indexing or duplicate-scan run is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPhase {
    /// Enumerating files and comparing fingerprints against the sidecar
    Scanning,
    /// Parsing, chunking, embedding, and upserting changed files
    Indexing,
    /// The run finished without error
    Complete,
    /// The run stopped early because of an error
    Error,
}

/// A single progress update published during an indexing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DomainEvent {
    /// Emitted once enumeration finishes, before any file is processed
    IndexingStarted {
        /// Project root being indexed
        root: String,
        /// Total files the enumerator selected
        total_files: usize,
    },
    /// Emitted after a phase transition
    IndexingPhase {
        /// Project root being indexed
        root: String,
        /// New phase
        phase: IndexPhase,
    },
    /// Emitted after each file is processed, whether changed or unchanged
    IndexingFileProcessed {
        /// Project root being indexed
        root: String,
        /// Relative path just processed
        path: String,
        /// Files processed so far, including this one
        processed: usize,
        /// Total files selected for this run
        total: usize,
    },
    /// Emitted once the run completes successfully
    IndexingCompleted {
        /// Project root that was indexed
        root: String,
        /// Files added, updated, or removed this run
        files_changed: usize,
        /// Wall-clock duration of the run, in milliseconds
        duration_ms: u64,
    },
    /// Emitted when a run stops early
    IndexingFailed {
        /// Project root being indexed
        root: String,
        /// Human-readable failure description
        message: String,
    },
    /// Emitted by the watcher when a debounced batch of filesystem changes
    /// triggers a new incremental run
    WatchedChangesDetected {
        /// Project root being watched
        root: String,
        /// Number of paths observed to have changed since the last run
        changed_paths: usize,
    },
}

/// Domain port for publishing indexing progress without coupling callers to
/// a specific transport (in-process broadcast channel, SSE, etc.).
#[async_trait]
pub trait EventPublisher: Interface + Send + Sync {
    /// Publish an event to all subscribers. "Published" means sent, not
    /// necessarily received — delivery guarantees are the implementation's.
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Whether at least one subscriber is currently listening, so callers can
    /// skip constructing events nobody will observe.
    fn has_subscribers(&self) -> bool;
}

/// Shared event publisher handle for dependency injection.
pub type SharedEventPublisher = Arc<dyn EventPublisher>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_events_are_distinguishable() {
        let started = DomainEvent::IndexingPhase {
            root: "/repo".to_string(),
            phase: IndexPhase::Scanning,
        };
        let done = DomainEvent::IndexingPhase {
            root: "/repo".to_string(),
            phase: IndexPhase::Complete,
        };
        assert_ne!(started, done);
    }
}
