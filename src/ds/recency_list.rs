//! Recency-ordered doubly linked list backed by [`SlotArena`].
//!
//! Nodes live in the arena and link to each other by `SlotId`, so there is
//! no pointer chasing and no unsafe code. Two sentinel slots are reserved at
//! construction and bound the list for its whole lifetime:
//!
//! ```text
//!   [head] ◄──► [MRU] ◄──► ... ◄──► [LRU] ◄──► [tail]
//! ```
//!
//! The sentinels guarantee every real node always has two live neighbors,
//! which makes `unlink` a pair of index rewrites with no head/tail special
//! cases. When the list is empty, `head.next == tail` and
//! `tail.prev == head`.
//!
//! ## Operations
//! - `push_front(value)`: splice a new node between head and its successor
//! - `move_to_front(id)`: unlink + relink at the front
//! - `pop_back()`: evict the node before the tail sentinel
//!
//! All of the above are O(1); `iter` / `iter_rev` are O(n).
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    prev: SlotId,
    next: SlotId,
    // None only for the two sentinels.
    value: Option<T>,
}

/// Doubly linked list over a [`SlotArena`], bounded by two sentinel nodes.
///
/// Front is the most-recently-used position; the node before the tail
/// sentinel is the least-recently-used.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Node<T>>,
    head: SlotId,
    tail: SlotId,
}

impl<T> RecencyList<T> {
    /// Creates an empty list with the sentinels linked to each other.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room reserved for `capacity` real nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = SlotArena::with_capacity(capacity + 2);
        let head = arena.insert(Node {
            prev: SlotId(0),
            next: SlotId(0),
            value: None,
        });
        let tail = arena.insert(Node {
            prev: head,
            next: head,
            value: None,
        });
        arena[head].prev = tail;
        arena[head].next = tail;
        Self { arena, head, tail }
    }

    /// Returns the number of real (non-sentinel) nodes.
    pub fn len(&self) -> usize {
        self.arena.len() - 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` is a real node currently in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        id != self.head && id != self.tail && self.arena.contains(id)
    }

    /// Returns the front (most recent) value.
    pub fn front(&self) -> Option<&T> {
        self.value_at(self.arena[self.head].next)
    }

    /// Returns the back (least recent) value.
    pub fn back(&self) -> Option<&T> {
        self.value_at(self.arena[self.tail].prev)
    }

    /// Returns the id of the back (least recent) node.
    pub fn back_id(&self) -> Option<SlotId> {
        let id = self.arena[self.tail].prev;
        (id != self.head).then_some(id)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        if !self.contains(id) {
            return None;
        }
        self.arena[id].value.as_ref()
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        if !self.contains(id) {
            return None;
        }
        self.arena[id].value.as_mut()
    }

    /// Inserts a new node at the front and returns its id.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let first = self.arena[self.head].next;
        let id = self.arena.insert(Node {
            prev: self.head,
            next: first,
            value: Some(value),
        });
        self.arena[self.head].next = id;
        self.arena[first].prev = id;
        id
    }

    /// Moves an existing node to the front; returns `false` if `id` is not
    /// in the list.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.arena[self.head].next == id {
            return true;
        }
        self.unlink(id);
        let first = self.arena[self.head].next;
        self.arena[id].prev = self.head;
        self.arena[id].next = first;
        self.arena[self.head].next = id;
        self.arena[first].prev = id;
        true
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id);
        self.arena.remove(id).and_then(|node| node.value)
    }

    /// Removes and returns the back (least recent) value, or `None` if the
    /// list holds no real nodes.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.back_id()?;
        self.remove(id)
    }

    /// Removes all real nodes and relinks the sentinels.
    pub fn clear(&mut self) {
        self.arena.clear();
        let head = self.arena.insert(Node {
            prev: SlotId(0),
            next: SlotId(0),
            value: None,
        });
        let tail = self.arena.insert(Node {
            prev: head,
            next: head,
            value: None,
        });
        self.arena[head].prev = tail;
        self.arena[head].next = tail;
        self.head = head;
        self.tail = tail;
    }

    /// Iterates values front to back (most to least recent).
    pub fn iter(&self) -> RecencyIter<'_, T> {
        RecencyIter {
            list: self,
            current: self.arena[self.head].next,
        }
    }

    /// Iterates values back to front (least to most recent).
    pub fn iter_rev(&self) -> RecencyRevIter<'_, T> {
        RecencyRevIter {
            list: self,
            current: self.arena[self.tail].prev,
        }
    }

    fn value_at(&self, id: SlotId) -> Option<&T> {
        if id == self.head || id == self.tail {
            return None;
        }
        self.arena[id].value.as_ref()
    }

    /// Connects `id`'s neighbors to each other. Total for any real node:
    /// the sentinels guarantee both neighbors exist.
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = &self.arena[id];
            (node.prev, node.next)
        };
        self.arena[prev].next = next;
        self.arena[next].prev = prev;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_ne!(self.head, self.tail);
        assert!(self.arena[self.head].value.is_none());
        assert!(self.arena[self.tail].value.is_none());

        if self.is_empty() {
            assert_eq!(self.arena[self.head].next, self.tail);
            assert_eq!(self.arena[self.tail].prev, self.head);
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut prev = self.head;
        let mut current = self.arena[self.head].next;

        while current != self.tail {
            assert!(seen.insert(current), "cycle in recency list");
            let node = &self.arena[current];
            assert_eq!(node.prev, prev);
            assert!(node.value.is_some(), "real node without value");
            prev = current;
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(self.arena[self.tail].prev, prev);
        assert_eq!(count, self.len());
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecencyIter<'a, T> {
    list: &'a RecencyList<T>,
    current: SlotId,
}

impl<'a, T> Iterator for RecencyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.list.tail {
            return None;
        }
        let node = &self.list.arena[self.current];
        self.current = node.next;
        node.value.as_ref()
    }
}

pub struct RecencyRevIter<'a, T> {
    list: &'a RecencyList<T>,
    current: SlotId,
}

impl<'a, T> Iterator for RecencyRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.list.head {
            return None;
        }
        let node = &self.list.arena[self.current];
        self.current = node.prev;
        node.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot<T: Copy>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_list_sentinels_linked() {
        let list: RecencyList<i32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.back_id(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(snapshot(&list), vec!["c", "b", "a"]);
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"a"));
        list.debug_validate_invariants();
    }

    #[test]
    fn iter_rev_is_exact_reverse() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        let fwd: Vec<_> = list.iter().copied().collect();
        let mut rev: Vec<_> = list.iter_rev().copied().collect();
        rev.reverse();
        assert_eq!(fwd, rev);
    }

    #[test]
    fn move_to_front_from_any_position() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        // back, middle, and already-front cases
        assert!(list.move_to_front(a));
        assert_eq!(snapshot(&list), vec!["a", "c", "b"]);

        assert!(list.move_to_front(c));
        assert_eq!(snapshot(&list), vec!["c", "a", "b"]);

        assert!(list.move_to_front(c));
        assert_eq!(snapshot(&list), vec!["c", "a", "b"]);

        assert!(list.contains(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_back_evicts_least_recent() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_middle_and_ends() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(snapshot(&list), vec!["c", "a"]);

        assert_eq!(list.remove(c), Some("c"));
        assert_eq!(list.remove(a), Some("a"));
        assert!(list.is_empty());
        assert_eq!(list.remove(a), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn sentinel_ids_are_not_members() {
        let mut list = RecencyList::new();
        let head = SlotId(0);
        let tail = SlotId(1);
        assert!(!list.contains(head));
        assert!(!list.contains(tail));
        assert_eq!(list.get(head), None);
        assert!(!list.move_to_front(tail));
        assert_eq!(list.remove(head), None::<i32>);
    }

    #[test]
    fn clear_restores_empty_invariants() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        list.debug_validate_invariants();

        // list is reusable after clear
        list.push_front(3);
        assert_eq!(snapshot(&list), vec![3]);
    }

    #[test]
    fn get_mut_updates_value_without_reordering() {
        let mut list = RecencyList::new();
        let a = list.push_front(10);
        let b = list.push_front(20);
        if let Some(value) = list.get_mut(a) {
            *value = 11;
        }
        assert_eq!(list.get(a), Some(&11));
        assert_eq!(snapshot(&list), vec![20, 11]);
        assert!(list.contains(b));
    }

    #[test]
    fn slot_reuse_after_eviction_keeps_links_consistent() {
        let mut list = RecencyList::new();
        for i in 0..4 {
            list.push_front(i);
        }
        for _ in 0..3 {
            list.pop_back();
        }
        for i in 10..13 {
            list.push_front(i);
        }
        assert_eq!(snapshot(&list), vec![12, 11, 10, 3]);
        list.debug_validate_invariants();
    }
}
