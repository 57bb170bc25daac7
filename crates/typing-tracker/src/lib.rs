//! # typing-tracker
//!
//! Tracks which members are currently typing in each channel, expiring
//! each entry after a fixed idle window unless refreshed, and answers
//! "who is typing in channel X" with the caller excluded.
//!
//! ## Example
//!
//! ```no_run
//! use typing_bus::EventBus;
//! use typing_core::{Persona, PersonaId};
//! use typing_tracker::{ClientIdentity, MemberCache, TypingDispatcher, TypingTracker};
//!
//! let bus = EventBus::default();
//! let cache = MemberCache::new_shared();
//! let identity = ClientIdentity::new_shared(Persona::new(PersonaId::new(1), "me"));
//!
//! let tracker = TypingTracker::new(cache, identity);
//! let dispatcher = TypingDispatcher::new(bus, tracker.clone());
//! dispatcher.start();
//! ```

pub mod dispatcher;
pub mod identity;
pub mod member_cache;
pub mod timer;
pub mod tracker;

// Re-export commonly used types at crate root
pub use dispatcher::TypingDispatcher;
pub use identity::ClientIdentity;
pub use member_cache::MemberCache;
pub use timer::TimerHandle;
pub use tracker::{TypingTracker, TYPING_EXPIRY};
