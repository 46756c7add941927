//! Unit tests for indexing progress events

use async_trait::async_trait;
use codelens_domain::events::{DomainEvent, EventPublisher, IndexPhase};
use std::sync::Mutex;

struct MockEventPublisher {
    published_events: Mutex<Vec<DomainEvent>>,
    subscriber_count: usize,
}

impl MockEventPublisher {
    fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            subscriber_count: 1,
        }
    }

    fn with_no_subscribers() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            subscriber_count: 0,
        }
    }

    fn get_published_events(&self) -> Vec<DomainEvent> {
        self.published_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: DomainEvent) -> codelens_domain::Result<()> {
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        self.subscriber_count > 0
    }
}

#[test]
fn test_domain_event_creation() {
    let event = DomainEvent::IndexingStarted {
        root: "/repo".to_string(),
        total_files: 42,
    };

    let debug_str = format!("{:?}", event);
    assert!(debug_str.contains("IndexingStarted"));
    assert!(debug_str.contains("/repo"));
}

#[test]
fn test_domain_event_variants() {
    let started = DomainEvent::IndexingStarted {
        root: "/repo".to_string(),
        total_files: 10,
    };
    let phase = DomainEvent::IndexingPhase {
        root: "/repo".to_string(),
        phase: IndexPhase::Indexing,
    };
    let file_processed = DomainEvent::IndexingFileProcessed {
        root: "/repo".to_string(),
        path: "src/lib.rs".to_string(),
        processed: 1,
        total: 10,
    };
    let completed = DomainEvent::IndexingCompleted {
        root: "/repo".to_string(),
        files_changed: 3,
        duration_ms: 1200,
    };
    let failed = DomainEvent::IndexingFailed {
        root: "/repo".to_string(),
        message: "embedding provider unavailable".to_string(),
    };
    let watched = DomainEvent::WatchedChangesDetected {
        root: "/repo".to_string(),
        changed_paths: 2,
    };

    assert!(matches!(started, DomainEvent::IndexingStarted { .. }));
    assert!(matches!(phase, DomainEvent::IndexingPhase { .. }));
    assert!(matches!(
        file_processed,
        DomainEvent::IndexingFileProcessed { .. }
    ));
    assert!(matches!(completed, DomainEvent::IndexingCompleted { .. }));
    assert!(matches!(failed, DomainEvent::IndexingFailed { .. }));
    assert!(matches!(
        watched,
        DomainEvent::WatchedChangesDetected { .. }
    ));
}

#[test]
fn test_domain_event_clone() {
    let event1 = DomainEvent::IndexingCompleted {
        root: "/code".to_string(),
        files_changed: 10,
        duration_ms: 500,
    };

    let event2 = event1.clone();

    assert_eq!(event1, event2);
}

#[test]
fn test_event_publisher_creation() {
    let publisher = MockEventPublisher::new();
    let events = publisher.get_published_events();
    assert!(events.is_empty());
}

#[test]
fn test_has_subscribers() {
    let publisher_with_subs = MockEventPublisher::new();
    assert!(publisher_with_subs.has_subscribers());

    let publisher_no_subs = MockEventPublisher::with_no_subscribers();
    assert!(!publisher_no_subs.has_subscribers());
}

#[tokio::test]
async fn test_publish_single_event() {
    let publisher = MockEventPublisher::new();

    let event = DomainEvent::IndexingStarted {
        root: "/repo".to_string(),
        total_files: 1,
    };

    let result = publisher.publish(event).await;
    assert!(result.is_ok());

    let published_events = publisher.get_published_events();
    assert_eq!(published_events.len(), 1);

    assert!(matches!(
        &published_events[0],
        DomainEvent::IndexingStarted { root, .. } if root == "/repo"
    ));
}

#[tokio::test]
async fn test_publish_multiple_events() {
    let publisher = MockEventPublisher::new();

    let events = vec![
        DomainEvent::IndexingStarted {
            root: "/repo".to_string(),
            total_files: 2,
        },
        DomainEvent::IndexingPhase {
            root: "/repo".to_string(),
            phase: IndexPhase::Scanning,
        },
        DomainEvent::IndexingCompleted {
            root: "/repo".to_string(),
            files_changed: 2,
            duration_ms: 300,
        },
    ];

    for event in events {
        publisher.publish(event).await.unwrap();
    }

    let published_events = publisher.get_published_events();
    assert_eq!(published_events.len(), 3);
}

#[test]
fn test_event_publisher_trait_object() {
    let publisher: Box<dyn EventPublisher> = Box::new(MockEventPublisher::new());
    assert!(publisher.has_subscribers());
}

#[tokio::test]
async fn test_event_serialization() {
    let event = DomainEvent::WatchedChangesDetected {
        root: "/code".to_string(),
        changed_paths: 3,
    };

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("WatchedChangesDetected"));
    assert!(json.contains("/code"));

    let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, deserialized);
}
