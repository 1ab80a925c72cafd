//! Recency list: an arena-backed doubly linked list of cache entries.
//!
//! Entries are stored in a [`SlotArena`] and linked by [`SlotId`], so the
//! handles held by a cache index are plain integers. The list never looks at
//! the index; it only knows about its own entries.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<K, V>>)
//!   ┌────────┬────────────────────────────────────────────────────┐
//!   │ SlotId │ Node { key, value, prev, next, linked }            │
//!   ├────────┼────────────────────────────────────────────────────┤
//!   │ id_0   │ { key: A, value: 1, prev: Some(id_2), next: None } │
//!   │ id_1   │ { key: B, value: 2, prev: Some(id_2)... }          │
//!   │ id_2   │ { key: C, value: 3, prev: None, next: Some(id_1) } │
//!   └────────┴────────────────────────────────────────────────────┘
//!
//!   head ─► [id_2] ◄──► [id_1] ◄──► [id_0] ◄── tail
//!   (most recently touched)        (least recently touched)
//! ```
//!
//! ## Operations
//! - `push_front(key, value)`: allocate an entry and attach it at the head
//! - `attach_front(id)`: splice a detached entry at the head
//! - `detach(id)`: unlink an entry, keeping its key and value
//! - `move_to_front(id)`: `detach` + `attach_front`
//! - `replace(id, key, value)`: overwrite an entry in place (node reuse)
//!
//! All of the above are O(1). `iter` is O(n).
//!
//! ## Handle misuse
//!
//! Calling `detach` on an entry that is not linked, or `attach_front` on one
//! that already is, means the caller's bookkeeping is out of sync with the
//! list. Both panic instead of silently corrupting the links.

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<SlotId>,
    next: Option<SlotId>,
    linked: bool,
}

/// Doubly linked list of `(key, value)` entries addressed by [`SlotId`].
///
/// The head is the most recently touched entry, the tail the least.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    arena: SlotArena<Node<K, V>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K, V> RecencyList<K, V> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of entries owned by the list.
    ///
    /// A detached entry still counts until it is attached again; at rest
    /// every owned entry is linked. Entries are only ever added by
    /// `push_front`, so this is also the number of arena slots in use.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the handle at the head (most recently touched).
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the handle at the tail (least recently touched).
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the key and value stored under `id`.
    pub fn entry(&self, id: SlotId) -> Option<(&K, &V)> {
        self.arena.get(id).map(|node| (&node.key, &node.value))
    }

    pub fn key(&self, id: SlotId) -> Option<&K> {
        self.arena.get(id).map(|node| &node.key)
    }

    pub fn value(&self, id: SlotId) -> Option<&V> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Allocates a new entry, attaches it at the head and returns its handle.
    pub fn push_front(&mut self, key: K, value: V) -> SlotId {
        let id = self.arena.insert(Node {
            key,
            value,
            prev: None,
            next: None,
            linked: false,
        });
        self.attach_front(id);
        id
    }

    /// Splices a detached entry in at the head.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or the entry is already linked.
    pub fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        {
            let node = self.node_mut(id);
            assert!(!node.linked, "attach_front: {id:?} is already linked");
            node.prev = None;
            node.next = old_head;
            node.linked = true;
        }
        match old_head {
            Some(old_head) => self.node_mut(old_head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Unlinks an entry from its position. Its key and value are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or the entry is not currently linked.
    pub fn detach(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = self.node_mut(id);
            assert!(node.linked, "detach: {id:?} is not linked");
            let links = (node.prev, node.next);
            node.prev = None;
            node.next = None;
            node.linked = false;
            links
        };

        match prev {
            Some(prev_id) => self.node_mut(prev_id).next = next,
            None => self.head = next,
        }
        match next {
            Some(next_id) => self.node_mut(next_id).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Moves a linked entry to the head.
    pub fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) {
            return;
        }
        self.detach(id);
        self.attach_front(id);
    }

    /// Overwrites the value stored under `id`, returning the old one.
    pub fn replace_value(&mut self, id: SlotId, value: V) -> V {
        std::mem::replace(&mut self.node_mut(id).value, value)
    }

    /// Overwrites both key and value stored under `id`, returning the old pair.
    ///
    /// The entry keeps its handle and its position; callers reusing an
    /// evicted entry detach it first and attach it again afterwards.
    pub fn replace(&mut self, id: SlotId, key: K, value: V) -> (K, V) {
        let node = self.node_mut(id);
        let old_key = std::mem::replace(&mut node.key, key);
        let old_value = std::mem::replace(&mut node.value, value);
        (old_key, old_value)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates `(key, value)` pairs from head to tail.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Iterates handles from head to tail.
    pub fn iter_ids(&self) -> IdIter<'_, K, V> {
        IdIter {
            list: self,
            current: self.head,
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the list order as handles from head to tail.
    pub fn debug_snapshot_ids(&self) -> Vec<SlotId> {
        self.iter_ids().collect()
    }

    fn node_mut(&mut self, id: SlotId) -> &mut Node<K, V> {
        match self.arena.get_mut(id) {
            Some(node) => node,
            None => panic!("recency list: stale handle {id:?}"),
        }
    }

    /// Walks the list head to tail and checks link consistency.
    ///
    /// Returns the number of linked entries on success.
    pub fn check_links(&self) -> Result<usize, InvariantError> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() {
                return Err(InvariantError::new(format!(
                    "only one list end is set: head={:?} tail={:?}",
                    self.head, self.tail
                )));
            }
            if !self.is_empty() {
                return Err(InvariantError::new(format!(
                    "list has no ends but owns {} entries",
                    self.len()
                )));
            }
            return Ok(0);
        }

        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            count += 1;
            if count > self.len() {
                return Err(InvariantError::new(format!(
                    "walk exceeded {} entries, cycle through {:?}",
                    self.len(),
                    id
                )));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale handle {id:?} in list")))?;
            if !node.linked {
                return Err(InvariantError::new(format!("{id:?} reachable but unlinked")));
            }
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "{:?}.prev is {:?}, expected {:?}",
                    id, node.prev, prev
                )));
            }
            if node.next.is_none() && self.tail != Some(id) {
                return Err(InvariantError::new(format!(
                    "walk ended at {:?} but tail is {:?}",
                    id, self.tail
                )));
            }
            prev = Some(id);
            current = node.next;
        }

        if count != self.len() {
            return Err(InvariantError::new(format!(
                "walked {} entries, arena owns {}",
                count,
                self.len()
            )));
        }
        Ok(count)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_links() {
            panic!("recency list invariant violated: {err}");
        }
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(&K, &V)` from head to tail.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    current: Option<SlotId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((&node.key, &node.value))
    }
}

/// Iterator over handles from head to tail.
pub struct IdIter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    current: Option<SlotId>,
}

impl<K, V> Iterator for IdIter<'_, K, V> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Copy, V>(list: &RecencyList<K, V>) -> Vec<K> {
        list.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn recency_list_push_front_orders_newest_first() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", 1);
        let b = list.push_front("b", 2);
        let c = list.push_front("c", 3);

        assert_eq!(keys(&list), vec!["c", "b", "a"]);
        assert_eq!(list.front_id(), Some(c));
        assert_eq!(list.back_id(), Some(a));
        assert_eq!(list.entry(c), Some((&"c", &3)));
        assert_eq!(list.entry(a), Some((&"a", &1)));
        assert_eq!(list.key(b), Some(&"b"));
        assert_eq!(list.len(), 3);
        list.debug_validate_invariants();
    }

    #[test]
    fn recency_list_move_to_front_edges() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", ());
        let b = list.push_front("b", ());
        let c = list.push_front("c", ());

        // already head: no-op
        list.move_to_front(c);
        assert_eq!(keys(&list), vec!["c", "b", "a"]);

        // tail
        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back_id(), Some(b));

        // middle
        list.move_to_front(c);
        assert_eq!(keys(&list), vec!["c", "a", "b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn recency_list_detach_ends_and_middle() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", ());
        let b = list.push_front("b", ());
        let c = list.push_front("c", ());

        list.detach(b);
        assert_eq!(keys(&list), vec!["c", "a"]);
        assert_eq!(list.key(b), Some(&"b"));

        list.detach(c);
        assert_eq!(list.front_id(), Some(a));
        assert_eq!(list.back_id(), Some(a));

        list.detach(a);
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert_eq!(list.iter().count(), 0);

        list.attach_front(b);
        list.attach_front(a);
        list.attach_front(c);
        assert_eq!(keys(&list), vec!["c", "a", "b"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn recency_list_replace_keeps_handle() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", 1);
        list.push_front("b", 2);

        list.detach(a);
        let old = list.replace(a, "z", 26);
        assert_eq!(old, ("a", 1));
        list.attach_front(a);

        assert_eq!(list.front_id(), Some(a));
        assert_eq!(list.entry(a), Some((&"z", &26)));
        assert_eq!(list.len(), 2);
        assert_eq!(list.replace_value(a, 27), 26);
        assert_eq!(list.value(a), Some(&27));
        list.debug_validate_invariants();
    }

    #[test]
    fn recency_list_snapshot_ids_follow_order() {
        let mut list = RecencyList::new();
        let a = list.push_front(1, 10);
        let b = list.push_front(2, 20);
        assert_eq!(list.debug_snapshot_ids(), vec![b, a]);
        list.move_to_front(a);
        assert_eq!(list.debug_snapshot_ids(), vec![a, b]);
    }

    #[test]
    fn recency_list_clear_resets_state() {
        let mut list = RecencyList::with_capacity(4);
        let a = list.push_front(1, ());
        list.push_front(2, ());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert_eq!(list.entry(a), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn recency_list_check_links_reports_detached_entry() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", ());
        list.push_front("b", ());
        assert_eq!(list.check_links(), Ok(2));

        list.detach(a);
        let err = list.check_links().unwrap_err();
        assert!(err.message().contains("walked 1"), "{err}");

        list.attach_front(a);
        assert_eq!(list.check_links(), Ok(2));
    }

    #[test]
    #[should_panic(expected = "not linked")]
    fn recency_list_double_detach_panics() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", ());
        list.push_front("b", ());
        list.detach(a);
        list.detach(a);
    }

    #[test]
    #[should_panic(expected = "already linked")]
    fn recency_list_double_attach_panics() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", ());
        list.attach_front(a);
    }

    #[test]
    #[should_panic(expected = "stale handle")]
    fn recency_list_stale_handle_panics() {
        let mut list = RecencyList::new();
        let a = list.push_front("a", ());
        list.clear();
        list.detach(a);
    }
}
