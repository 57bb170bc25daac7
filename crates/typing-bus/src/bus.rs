//! In-process publish/subscribe bus
//!
//! Fan-out is per topic: each topic lazily gets its own broadcast channel,
//! and every subscriber receives every event published after it subscribed.
//! Publishing to a topic nobody listens on is not an error.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::event::BusEvent;
use crate::topic::Topic;

/// Bus configuration
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Broadcast buffer size per topic
    pub buffer: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self { buffer: 1024 }
    }
}

/// In-process event bus
///
/// Cheap to clone; clones share the same topic table.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

struct BusInner {
    /// Broadcast sender per topic name
    senders: DashMap<String, broadcast::Sender<BusEvent>>,
    buffer: usize,
}

impl EventBus {
    /// Create a new bus
    #[must_use]
    pub fn new(config: EventBusConfig) -> Self {
        Self {
            inner: Arc::new(BusInner {
                senders: DashMap::new(),
                buffer: config.buffer,
            }),
        }
    }

    fn sender(&self, topic: &Topic) -> broadcast::Sender<BusEvent> {
        self.inner
            .senders
            .entry(topic.name())
            .or_insert_with(|| broadcast::channel(self.inner.buffer).0)
            .value()
            .clone()
    }

    /// Subscribe to a topic
    ///
    /// The receiver sees every event published after this call.
    pub fn subscribe(&self, topic: &Topic) -> broadcast::Receiver<BusEvent> {
        let receiver = self.sender(topic).subscribe();

        tracing::debug!(topic = %topic, "Subscribed to topic");

        receiver
    }

    /// Publish an event to a topic
    ///
    /// Returns the number of subscribers that received it; zero when the
    /// topic has no listeners.
    pub fn publish(&self, topic: &Topic, event: BusEvent) -> usize {
        let sent = self.sender(topic).send(event).unwrap_or(0);

        tracing::trace!(topic = %topic, sent = sent, "Published event");

        sent
    }

    /// Number of topics that have been touched by a publish or subscribe
    pub fn topic_count(&self) -> usize {
        self.inner.senders.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(EventBusConfig::default())
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("topics", &self.inner.senders.len())
            .field("buffer", &self.inner.buffer)
            .finish()
    }
}
