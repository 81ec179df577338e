//! In-memory LRU adapter for the `LocationCache` port.
//!
//! Entries are keyed by normalised address and ranked by a monotonically
//! increasing access tick. The smallest tick is the least recently used
//! entry and is evicted first once the cache is full. There is no expiry;
//! entries leave only under capacity pressure.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

use crate::domain::LocationRecord;
use crate::domain::ports::{AddressKey, LocationCache};

/// Default number of cached locations.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

struct Entry {
    record: LocationRecord,
    tick: u64,
}

#[derive(Default)]
struct LruState {
    entries: HashMap<AddressKey, Entry>,
    recency: BTreeMap<u64, AddressKey>,
    next_tick: u64,
}

impl LruState {
    fn advance(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick = self.next_tick.wrapping_add(1);
        tick
    }

    fn touch(&mut self, key: &AddressKey) -> Option<LocationRecord> {
        let tick = self.advance();
        let entry = self.entries.get_mut(key)?;
        self.recency.remove(&entry.tick);
        entry.tick = tick;
        self.recency.insert(tick, key.clone());
        Some(entry.record.clone())
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
        }
    }
}

/// Bounded least-recently-used location cache.
///
/// # Examples
/// ```
/// use address_lookup::outbound::cache::LruLocationCache;
///
/// let cache = LruLocationCache::new(2);
/// assert!(cache.is_empty());
/// assert_eq!(cache.capacity(), 2);
/// ```
pub struct LruLocationCache {
    capacity: usize,
    state: Mutex<LruState>,
}

impl LruLocationCache {
    /// Build a cache holding at most `capacity` records (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(LruState::default()),
        }
    }

    /// Maximum number of records held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LruLocationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl LocationCache for LruLocationCache {
    fn get(&self, key: &AddressKey) -> Option<LocationRecord> {
        self.lock().touch(key)
    }

    fn put(&self, key: AddressKey, record: LocationRecord) {
        let mut guard = self.lock();
        let state = &mut *guard;
        let tick = state.advance();
        if let Some(entry) = state.entries.get_mut(&key) {
            let stale = entry.tick;
            entry.tick = tick;
            entry.record = record;
            state.recency.remove(&stale);
            state.recency.insert(tick, key);
            return;
        }

        if state.entries.len() >= self.capacity {
            state.evict_oldest();
        }
        state.recency.insert(tick, key.clone());
        state.entries.insert(key, Entry { record, tick });
    }
}
