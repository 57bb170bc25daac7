//! Typing event dispatcher
//!
//! Subscribes once to the typing-status topic and routes each event into
//! the tracker based on its `is_typing` flag. Undecodable payloads are
//! logged and skipped; they never reach the tracker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use typing_bus::{BusEvent, EventBus, Topic, TYPING_STATUS_EVENT};
use typing_core::TypingStatusEvent;

use crate::tracker::TypingTracker;

/// Routes typing-status events from the bus into the tracker
pub struct TypingDispatcher {
    bus: EventBus,
    tracker: TypingTracker,
    running: Arc<AtomicBool>,
}

impl TypingDispatcher {
    /// Create a new dispatcher
    #[must_use]
    pub fn new(bus: EventBus, tracker: TypingTracker) -> Self {
        Self {
            bus,
            tracker,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe and start routing events
    ///
    /// The subscription is taken before this method returns, so events
    /// published afterwards are never missed. The loop ends when the
    /// topic closes or [`stop`](Self::stop) is called (taking effect at
    /// the next delivered event).
    pub fn start(&self) -> JoinHandle<()> {
        let mut receiver = self.bus.subscribe(&Topic::TypingStatus);
        self.running.store(true, Ordering::SeqCst);

        let tracker = self.tracker.clone();
        let running = Arc::clone(&self.running);

        tokio::spawn(async move {
            tracing::info!("Typing dispatcher started");

            while running.load(Ordering::SeqCst) {
                match receiver.recv().await {
                    Ok(envelope) => Self::route(&tracker, &envelope),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped = skipped, "Typing dispatcher lagged behind the bus");
                    }
                    Err(RecvError::Closed) => {
                        tracing::info!("Typing topic closed");
                        break;
                    }
                }
            }

            running.store(false, Ordering::SeqCst);
            tracing::info!("Typing dispatcher stopped");
        })
    }

    /// Route one envelope into the tracker
    fn route(tracker: &TypingTracker, envelope: &BusEvent) {
        if !envelope.is(TYPING_STATUS_EVENT) {
            tracing::trace!(event_type = %envelope.event_type, "Ignoring non-typing event");
            return;
        }

        let payload: TypingStatusEvent = match envelope.payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Undecodable typing payload, skipping");
                return;
            }
        };

        let member = tracker.resolver().upsert(payload.member());

        if payload.is_typing {
            tracker.add_typing_member(&member);
        } else {
            tracker.remove_typing_member(&member);
        }
    }

    /// Ask the dispatch loop to stop
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Whether the dispatch loop is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for TypingDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypingDispatcher")
            .field("running", &self.is_running())
            .finish()
    }
}
