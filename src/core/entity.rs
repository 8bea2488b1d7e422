// Entity contract shared by everything a repository can store.
//
// Purpose
// - Describe a record whose identity is unset until the store attaches it.
//
// Responsibilities
// - Expose the identity, let the store assign it once, and report whether the entity is new.
//
// Boundaries
// - No input or output. Identity generation lives in the adapters layer.

use std::fmt::{Debug, Display};
use std::hash::Hash;

pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static;

    fn id(&self) -> Option<Self::Id>;

    fn assign_id(&mut self, id: Self::Id);

    /// An entity is new (detached) until the store has assigned it an identity.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
