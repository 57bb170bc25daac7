//! Collaborator traits consumed by the tracker

mod collaborators;

pub use collaborators::{IdentityProvider, MemberResolver};
