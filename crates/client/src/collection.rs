//! Generic keyed entity cache.
//!
//! One `Collection` per entity type, all with the same contract: wholesale
//! replacement on reload, splice-in of server-returned objects on mutation.
//! The cache is mutated only after the corresponding HTTP call has resolved
//! successfully, and only with whatever the server sent back.

use stockdeck_core::{EntityId, Keyed};

/// Where a freshly created entity lands in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPlacement {
    /// New rows go last (products, suppliers).
    Append,
    /// New rows go first — newest-first display (orders).
    Prepend,
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    placement: InsertPlacement,
}

impl<T: Keyed> Collection<T> {
    pub fn appending() -> Self {
        Self {
            items: Vec::new(),
            placement: InsertPlacement::Append,
        }
    }

    pub fn prepending() -> Self {
        Self {
            items: Vec::new(),
            placement: InsertPlacement::Prepend,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Atomically replace the whole cache with a fresh server list. No merge
    /// with prior state.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Splice in the entity a successful create returned.
    pub fn insert(&mut self, entity: T) {
        match self.placement {
            InsertPlacement::Append => self.items.push(entity),
            InsertPlacement::Prepend => self.items.insert(0, entity),
        }
    }

    /// Replace the element whose id matches. A miss is a silent
    /// inconsistency, not an error: the next bulk reload squares it away.
    pub fn apply_update(&mut self, entity: T) {
        match self.items.iter_mut().find(|item| item.key() == entity.key()) {
            Some(slot) => *slot = entity,
            None => {
                tracing::debug!(id = %entity.key(), "update for entity not in cache; ignoring");
            }
        }
    }

    /// Drop the element with this id; idempotent.
    pub fn remove(&mut self, id: EntityId) {
        self.items.retain(|item| item.key() != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
