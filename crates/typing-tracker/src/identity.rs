//! Local client identity
//!
//! Holds the persona acting as "self" so queries can exclude the caller's
//! own typing status. The persona is swappable (login/logout) without
//! rebuilding the tracker.

use parking_lot::RwLock;
use std::sync::Arc;

use typing_core::{IdentityProvider, Persona};

/// Identity provider holding the local client's persona
pub struct ClientIdentity {
    persona: RwLock<Persona>,
}

impl ClientIdentity {
    /// Create with an initial persona
    #[must_use]
    pub fn new(persona: Persona) -> Self {
        Self {
            persona: RwLock::new(persona),
        }
    }

    /// Create with an initial persona, wrapped in Arc
    #[must_use]
    pub fn new_shared(persona: Persona) -> Arc<Self> {
        Arc::new(Self::new(persona))
    }

    /// Swap the persona acting as "self"
    pub fn set_persona(&self, persona: Persona) {
        tracing::debug!(persona_id = %persona.id, "Client persona changed");
        *self.persona.write() = persona;
    }
}

impl IdentityProvider for ClientIdentity {
    fn current_persona(&self) -> Persona {
        self.persona.read().clone()
    }
}

impl std::fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("persona_id", &self.persona.read().id)
            .finish()
    }
}
