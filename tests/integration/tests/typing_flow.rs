//! End-to-end typing flow tests
//!
//! Drives the tracker through the bus exactly the way a gateway client
//! would, under paused time so expiry is deterministic.
//!
//! Run with: cargo test -p integration-tests --test typing_flow

use std::time::Duration;

use anyhow::Result;
use integration_tests::{caller_persona, member_in, own_member_in, settle, TestStack};
use tokio::time::advance;
use typing_bus::{BusEvent, Topic, TYPING_STATUS_EVENT};
use typing_common::TrackerConfig;
use typing_core::ChannelId;

// ============================================================================
// Signal Routing Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_typing_signal_shows_member() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    assert_eq!(stack.publish_started(&alice)?, 1);
    settle().await;

    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice]);
    assert!(stack.tracker.has_typing_members(channel));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_signal_clears_member() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;
    stack.publish_stopped(&alice)?;
    settle().await;

    assert!(stack.tracker.get_typing_members(channel).is_empty());
    assert!(!stack.tracker.has_typing_members(channel));
    assert_eq!(stack.tracker.active_timer_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_repeated_signal_keeps_single_entry() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;
    stack.publish_started(&alice)?;
    settle().await;

    assert_eq!(stack.tracker.typing_member_ids(channel).len(), 1);
    assert_eq!(stack.tracker.active_timer_count(), 1);
    Ok(())
}

// ============================================================================
// Expiry Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_member_expires_without_refresh() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;

    advance(Duration::from_millis(59_999)).await;
    settle().await;
    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice]);

    advance(Duration::from_millis(2)).await;
    settle().await;
    assert!(stack.tracker.get_typing_members(channel).is_empty());

    // The channel key is gone, and repeated queries stay empty.
    assert_eq!(stack.tracker.channel_count(), 0);
    assert!(stack.tracker.get_typing_members(channel).is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_refresh_extends_expiry() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;

    advance(Duration::from_millis(50_000)).await;
    settle().await;
    stack.publish_started(&alice)?;
    settle().await;

    advance(Duration::from_millis(10_001)).await;
    settle().await;
    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice]);

    advance(Duration::from_millis(50_000)).await;
    settle().await;
    assert!(stack.tracker.get_typing_members(channel).is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_leaves_no_residual_timer() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;
    stack.publish_stopped(&alice)?;
    settle().await;

    advance(Duration::from_millis(60_010)).await;
    settle().await;

    assert!(stack.tracker.get_typing_members(channel).is_empty());
    assert_eq!(stack.tracker.channel_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_custom_expiry_from_config() -> Result<()> {
    let mut config = TrackerConfig::default();
    config.typing.expiry_ms = 5_000;
    let stack = TestStack::with_config(&config);
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    assert_eq!(stack.tracker.expiry(), Duration::from_millis(5_000));

    stack.publish_started(&alice)?;
    settle().await;

    advance(Duration::from_millis(5_001)).await;
    settle().await;
    assert!(stack.tracker.get_typing_members(channel).is_empty());
    Ok(())
}

// ============================================================================
// Self-Exclusion Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_own_typing_is_invisible_to_queries() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let me = own_member_in(channel);

    stack.publish_started(&me)?;
    settle().await;

    // Stored raw, filtered at query time only.
    assert_eq!(stack.tracker.typing_member_ids(channel), vec![me.id]);
    assert!(stack.tracker.get_typing_members(channel).is_empty());
    assert!(!stack.tracker.has_typing_members(channel));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_identity_swap_changes_filtering() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;
    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice.clone()]);

    // Becoming alice hides her entry; the original caller reappears as
    // nobody to hide.
    stack.identity.set_persona(alice.persona.clone());
    assert!(stack.tracker.get_typing_members(channel).is_empty());

    stack.identity.set_persona(caller_persona());
    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice]);
    Ok(())
}

// ============================================================================
// Robustness Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_undecodable_payload_leaves_state_alone() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;

    stack.bus.publish(
        &Topic::TypingStatus,
        BusEvent::new(TYPING_STATUS_EVENT, serde_json::json!({"not": "a payload"})),
    );
    settle().await;

    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_for_unknown_member_is_harmless() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let ghost = member_in(channel);

    stack.publish_stopped(&ghost)?;
    settle().await;

    assert!(stack.tracker.get_typing_members(channel).is_empty());
    assert_eq!(stack.tracker.channel_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_channels_do_not_interfere() -> Result<()> {
    let stack = TestStack::start();
    let one = ChannelId::new(1);
    let two = ChannelId::new(2);
    let alice = member_in(one);
    let bob = member_in(two);

    stack.publish_started(&alice)?;
    stack.publish_started(&bob)?;
    settle().await;

    assert_eq!(stack.tracker.get_typing_members(one), vec![alice.clone()]);
    assert_eq!(stack.tracker.get_typing_members(two), vec![bob]);

    stack.publish_stopped(&alice)?;
    settle().await;

    assert!(stack.tracker.get_typing_members(one).is_empty());
    assert!(stack.tracker.has_typing_members(two));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_resolver_canonicalizes_event_members() -> Result<()> {
    let stack = TestStack::start();
    let channel = ChannelId::new(1);
    let alice = member_in(channel);

    stack.publish_started(&alice)?;
    settle().await;

    // The member reference handed back by queries is the cached one.
    assert_eq!(stack.cache.get(alice.id), Some(alice.clone()));
    assert_eq!(stack.tracker.get_typing_members(channel), vec![alice]);
    Ok(())
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[tokio::test]
async fn test_config_defaults_without_env() -> Result<()> {
    let config = TrackerConfig::from_env()?;

    assert_eq!(config.typing.expiry_ms, 60_000);
    assert_eq!(config.bus.buffer, 1024);
    assert!(config.app.env.is_development());
    Ok(())
}
