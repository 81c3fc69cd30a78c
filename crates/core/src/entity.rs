//! Keyed trait: identity for cached server entities.

use crate::id::EntityId;

/// Implemented by every entity the client caches in a collection.
///
/// The key is the server-assigned id; collections are unique per key.
pub trait Keyed {
    fn key(&self) -> EntityId;
}
