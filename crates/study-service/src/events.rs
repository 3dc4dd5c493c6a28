//! In-process event broadcast
//!
//! Services publish a domain event after the corresponding state change has
//! been persisted. Delivery is fan-out over a tokio broadcast channel:
//! publishing never blocks, and with no live subscribers the event is simply
//! dropped.

use tokio::sync::broadcast;
use tracing::debug;

use study_core::events::DomainEvent;

const DEFAULT_CAPACITY: usize = 256;

/// Broadcast bus for domain events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Open a new subscription; events published after this call are received
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: DomainEvent) {
        let event_type = event.event_type();
        // send only errs when there are no receivers, which is fine
        let delivered = self.sender.send(event).unwrap_or(0);
        debug!(event_type, delivered, "domain event published");
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
