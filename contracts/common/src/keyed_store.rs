use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// Ordered key-value storage consumed by the registries.
///
/// Implementations must give single-key atomicity and a stable `keys()` order:
/// two calls with no write in between return the same sequence.
pub trait KeyedStore<K, V> {
    /// Upsert: overwrites any existing value for `key`.
    fn insert(&self, key: K, value: &V);

    fn get(&self, key: &K) -> Option<V>;

    /// Removing an absent key is a no-op.
    fn remove(&self, key: &K);

    fn keys(&self) -> Vec<K>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

/// Monotonic id source owned by a store.
///
/// Ids start at 1 and are never reused; `0` is never handed out.
pub trait IdSequence {
    /// Allocate and return the next id.
    fn next_id(&self) -> u64;

    /// Last id handed out, or 0 when none has been.
    fn last_id(&self) -> u64;
}

/// In-memory store ordered by key. Used to exercise registries without
/// touching contract storage.
pub struct MemoryStore<K, V> {
    entries: RefCell<BTreeMap<K, V>>,
    last_id: Cell<u64>,
}

impl<K: Ord, V> MemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            last_id: Cell::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K: Ord, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedStore<K, V> for MemoryStore<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn insert(&self, key: K, value: &V) {
        self.entries.borrow_mut().insert(key, value.clone());
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.borrow().get(key).cloned()
    }

    fn remove(&self, key: &K) {
        self.entries.borrow_mut().remove(key);
    }

    fn keys(&self) -> Vec<K> {
        self.entries.borrow().keys().cloned().collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl<K, V> IdSequence for MemoryStore<K, V> {
    fn next_id(&self) -> u64 {
        let next = self.last_id.get().saturating_add(1);
        self.last_id.set(next);
        next
    }

    fn last_id(&self) -> u64 {
        self.last_id.get()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use alloc::vec;

    #[test]
    fn insert_overwrites_existing_key() {
        let store: MemoryStore<u64, &str> = MemoryStore::new();
        store.insert(1, &"first");
        store.insert(1, &"second");

        assert_eq!(store.get(&1), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store: MemoryStore<u64, u32> = MemoryStore::new();
        store.insert(7, &70);
        store.remove(&8);

        assert_eq!(store.keys(), vec![7]);
        store.remove(&7);
        assert!(store.is_empty());
        assert!(!store.contains_key(&7));
    }

    #[test]
    fn keys_are_repeatable() {
        let store: MemoryStore<u64, u32> = MemoryStore::new();
        for id in [5u64, 2, 9, 1] {
            store.insert(id, &(id as u32 * 10));
        }

        let first = store.keys();
        assert_eq!(first, vec![1, 2, 5, 9]);
        assert_eq!(store.keys(), first);
    }

    #[test]
    fn ids_are_per_store() {
        let doctors: MemoryStore<u64, u32> = MemoryStore::new();
        let patients: MemoryStore<u64, u32> = MemoryStore::new();
        assert_eq!(doctors.last_id(), 0);

        assert_eq!(doctors.next_id(), 1);
        assert_eq!(doctors.next_id(), 2);
        assert_eq!(patients.next_id(), 1);
        assert_eq!(doctors.last_id(), 2);
        assert!(doctors.is_empty());
    }
}
