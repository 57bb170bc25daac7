//! Test helpers for integration tests
//!
//! Assembles the full stack the way an application composition root
//! would: configuration, telemetry, bus, member cache, identity,
//! tracker, and a running dispatcher.

use std::sync::Arc;

use anyhow::Result;
use tokio::task::{yield_now, JoinHandle};
use typing_bus::{BusEvent, EventBus, EventBusConfig, Topic};
use typing_common::{try_init_telemetry, TelemetryConfig, TrackerConfig};
use typing_core::{ChannelMember, TypingStatusEvent};
use typing_tracker::{ClientIdentity, MemberCache, TypingDispatcher, TypingTracker};

use crate::fixtures::caller_persona;

/// Fully wired tracker stack driven through the bus
pub struct TestStack {
    pub bus: EventBus,
    pub cache: Arc<MemberCache>,
    pub identity: Arc<ClientIdentity>,
    pub tracker: TypingTracker,
    pub dispatcher: TypingDispatcher,
    _worker: JoinHandle<()>,
}

impl TestStack {
    /// Start a stack from default configuration
    pub fn start() -> Self {
        Self::with_config(&TrackerConfig::default())
    }

    /// Start a stack from the given configuration
    pub fn with_config(config: &TrackerConfig) -> Self {
        let _ = try_init_telemetry(TelemetryConfig::development());

        let bus = EventBus::new(EventBusConfig {
            buffer: config.bus.buffer,
        });
        let cache = MemberCache::new_shared();
        let identity = ClientIdentity::new_shared(caller_persona());
        let tracker =
            TypingTracker::with_expiry(cache.clone(), identity.clone(), config.typing.expiry());

        let dispatcher = TypingDispatcher::new(bus.clone(), tracker.clone());
        let worker = dispatcher.start();

        Self {
            bus,
            cache,
            identity,
            tracker,
            dispatcher,
            _worker: worker,
        }
    }

    /// Publish a "started typing" signal for a member
    pub fn publish_started(&self, member: &ChannelMember) -> Result<usize> {
        let envelope = BusEvent::typing_status(&TypingStatusEvent::started(member))?;
        Ok(self.bus.publish(&Topic::TypingStatus, envelope))
    }

    /// Publish a "stopped typing" signal for a member
    pub fn publish_stopped(&self, member: &ChannelMember) -> Result<usize> {
        let envelope = BusEvent::typing_status(&TypingStatusEvent::stopped(member))?;
        Ok(self.bus.publish(&Topic::TypingStatus, envelope))
    }
}

/// Let spawned tasks (dispatcher, expiry timers) catch up
pub async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}
