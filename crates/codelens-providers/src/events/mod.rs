//! Event Bus Provider Implementations
//!
//! Provides event bus backends for domain events.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullEventBusProvider | Testing | Discards all events |
//! | TokioEventBusProvider | In-Process | Tokio broadcast channels |
//!
//! ## Provider Selection Guide
//!
//! - **Testing**: Use `NullEventBusProvider` to discard events
//! - **Single Instance**: Use `TokioEventBusProvider` for in-process events

pub mod null;
pub mod tokio;

// Re-export providers
pub use null::{NullEventBusProvider, NullEventPublisher};
pub use tokio::{TokioEventBusProvider, TokioEventPublisher};

// Re-export port trait from application layer
pub use codelens_application::ports::infrastructure::{DomainEventStream, EventBusProvider};

// Re-export domain event types
pub use codelens_domain::events::DomainEvent;
