//! Value objects - opaque identifiers

mod ids;

pub use ids::{ChannelId, IdParseError, MemberId, PersonaId};
