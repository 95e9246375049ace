//! LRU Tracker Module
//!
//! Tracks volume-key access order for least-recently-used eviction.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Access-order tracker for the volume cache.
///
/// Keys live in a VecDeque: front = most recently used, back = least
/// recently used. Keys that were inserted and never touched again sit at the
/// back in insertion order, so popping the back also breaks eviction ties by
/// oldest insertion.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Volume keys ordered by last access
    order: VecDeque<String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, adding it if unknown.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Drops a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key, or None when empty.
    pub fn pop_lru(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek LRU ==
    /// The least recently used key without removing it.
    pub fn peek_lru(&self) -> Option<&str> {
        self.order.back().map(String::as_str)
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes every tracked key.
    pub fn clear(&mut self) {
        self.order.clear();
    }
}
