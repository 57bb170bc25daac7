//! Persona entity - the identity behind a channel member

use serde::{Deserialize, Serialize};

use crate::value_objects::PersonaId;

/// Identity attached to a channel member
///
/// The same person participating in several channels produces several
/// members, all carrying equal personas. Queries compare personas to
/// exclude the caller's own typing status from results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: PersonaId,
    pub name: String,
}

impl Persona {
    /// Create a new Persona
    pub fn new(id: PersonaId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Identity stub for members that have not been resolved yet
    ///
    /// Never equal to any real persona (real persona ids are non-zero).
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            id: PersonaId::new(0),
            name: String::new(),
        }
    }

    /// Check whether this is the unresolved identity stub
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.id.is_zero()
    }
}
