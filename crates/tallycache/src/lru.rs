//! LRU (Least Recently Used) cache implementation
//!
//! The hash map owns the stored values; recency lives in a doubly linked
//! list of keys simulated over an index arena. Head is the most recently
//! used entry, tail the next eviction victim.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::stats::CacheStats;

/// Key slot on the recency list.
struct ListNode<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Map entry: the stored value plus the arena index of its list node.
struct Entry<V> {
    value: V,
    node: usize,
}

/// Fixed-capacity cache with least-recently-used eviction.
///
/// `get` and `put` are O(1). The capacity is fixed at construction and the
/// cache never holds more than `capacity` entries: inserting a fresh key
/// into a full cache first evicts the entry that has gone longest without
/// being touched.
///
/// Putting a key that is already present overwrites its value in place and
/// counts as a touch. The cache is not thread-safe; callers sharing one
/// across threads must guard it externally.
pub struct LruCache<K, V> {
    map: HashMap<K, Entry<V>, RandomState>,
    list: Vec<Option<ListNode<K>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Get a value and mark its key as most recently used.
    ///
    /// A miss has no effect beyond the miss counter.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = match self.map.get(key) {
            Some(entry) => entry.node,
            None => {
                self.stats.misses += 1;
                return None;
            }
        };
        self.stats.hits += 1;
        self.promote(idx);
        self.map.get(key).map(|entry| &entry.value)
    }

    /// Read a value without touching recency order or the counters.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key).map(|entry| &entry.value)
    }

    /// Insert a key-value pair at the most-recently-used position.
    ///
    /// If the key is already present its value is overwritten and the
    /// entry promoted; the cache does not grow. Otherwise, a full cache
    /// evicts its least recently used entry before the insert.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.map.get_mut(&key) {
            entry.value = value;
            let idx = entry.node;
            self.promote(idx);
            return;
        }

        if self.map.len() == self.capacity {
            self.evict();
        }

        let idx = self.alloc(ListNode {
            key: key.clone(),
            prev: None,
            next: None,
        });
        self.push_front(idx);
        self.map.insert(key, Entry { value, node: idx });
        self.stats.insertions += 1;
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.map.get(key)?.node;
        self.detach(idx)
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and reset the counters. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.stats = CacheStats::default();
    }

    /// Snapshot of the hit/miss/insertion/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Entries in recency order, most recently used first.
    ///
    /// Iterating does not promote anything.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        std::iter::successors(self.head, move |&idx| {
            self.list[idx].as_ref().and_then(|node| node.next)
        })
        .filter_map(move |idx| {
            let node = self.list[idx].as_ref()?;
            let entry = self.map.get(&node.key)?;
            Some((&node.key, &entry.value))
        })
    }

    /// Remove the list node at `idx` together with its map entry.
    ///
    /// All removals funnel through here so the map and the list cannot
    /// diverge.
    fn detach(&mut self, idx: usize) -> Option<V> {
        self.unlink(idx);
        let node = self.list[idx].take()?;
        self.free.push(idx);
        self.map.remove(&node.key).map(|entry| entry.value)
    }

    fn evict(&mut self) {
        if let Some(tail) = self.tail {
            self.detach(tail);
            self.stats.evictions += 1;
        }
    }

    fn promote(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // already at front
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        if let Some(node) = &mut self.list[idx] {
            node.prev = None;
            node.next = self.head;
        }
        if let Some(head) = self.head {
            if let Some(node) = &mut self.list[head] {
                node.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.list[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(node) = &mut self.list[prev] {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(node) = &mut self.list[next] {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn alloc(&mut self, node: ListNode<K>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.list[idx] = Some(node);
                idx
            }
            None => {
                self.list.push(Some(node));
                self.list.len() - 1
            }
        }
    }
}
