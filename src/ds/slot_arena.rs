//! Grow-only slot storage with stable integer handles.
//!
//! Entries are appended to a `Vec<T>` and addressed by [`SlotId`]. There is
//! no per-slot removal: a recency cache overwrites its victim in place, so
//! once the arena holds `capacity` entries it stops growing. A [`SlotId`]
//! stays valid until the arena is cleared.

/// Stable handle into a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<T>,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Reserves room for `capacity` entries. Callers bound the reservation;
    /// the arena does not.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` and returns its handle.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.slots.push(value);
        SlotId(self.slots.len() - 1)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0)
    }

    /// Number of slots allocated since the last `clear`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every value. Reserved storage is kept and old handles go stale.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
