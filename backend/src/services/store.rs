//! Generic concurrency-safe entity store with server-assigned integer ids.
//!
//! Backs the product and cart collections. All operations are synchronous
//! and touch a single map; id allocation is an atomic counter independent
//! of the map's own locking, so racing `add` calls still receive distinct
//! ids.

use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::{mapref::entry::Entry, DashMap};

/// Implemented by entity types held in an [`EntityStore`]. `with_id`
/// supports the replace-on-write pattern: construct a copy carrying the
/// store-chosen id, then perform a single map write.
pub trait StoreEntity: Clone {
    fn id(&self) -> u32;

    #[must_use]
    fn with_id(self, id: u32) -> Self;
}

pub struct EntityStore<T> {
    entries: DashMap<u32, T>,
    next_id: AtomicU32,
}

impl<T: StoreEntity> EntityStore<T> {
    /// Builds a store pre-populated with `seed`. The allocator starts just
    /// above the highest seed id, so seed and runtime ids never collide.
    pub fn with_seed(seed: Vec<T>) -> Self {
        let entries = DashMap::new();
        let mut max_id = 0;
        for entity in seed {
            max_id = max_id.max(entity.id());
            entries.insert(entity.id(), entity);
        }
        Self {
            entries,
            next_id: AtomicU32::new(max_id + 1),
        }
    }

    /// All entities, ascending by id.
    pub fn get_all(&self) -> Vec<T> {
        let mut all: Vec<T> = self.entries.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(StoreEntity::id);
        all
    }

    pub fn get(&self, id: u32) -> Option<T> {
        self.entries.get(&id).map(|e| e.value().clone())
    }

    /// Stores `entity` under a freshly allocated id, ignoring any id on the
    /// input, and returns the stored copy.
    pub fn add(&self, entity: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = entity.with_id(id);
        self.entries.insert(id, stored.clone());
        stored
    }

    /// Replaces the entity stored under `id`, forcing the stored value's id
    /// to `id` regardless of what the body carried. Returns `None` without
    /// side effects when `id` is absent; there is no upsert.
    pub fn update(&self, id: u32, entity: T) -> Option<T> {
        match self.entries.entry(id) {
            Entry::Occupied(mut slot) => {
                let stored = entity.with_id(id);
                slot.insert(stored.clone());
                Some(stored)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Removes and returns the entity under `id`. Subsequent calls for the
    /// same id return `None`.
    pub fn remove(&self, id: u32) -> Option<T> {
        self.entries.remove(&id).map(|(_, entity)| entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
