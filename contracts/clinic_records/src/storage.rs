use alloc::vec::Vec as StdVec;
use core::fmt::Debug;
use core::marker::PhantomData;

use common::{IdSequence, KeyedStore};
use soroban_sdk::{contracttype, symbol_short, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

// ── Storage keys ──────────────────────────────────────────────

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const INITIALIZED: Symbol = symbol_short!("INIT");

pub const TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
pub const TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

/// Logical tables sharing the contract's persistent storage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Table {
    Doctors,
    Patients,
    Audit,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// A single row of a table.
    Entry(Table, u64),
    /// Insertion-ordered list of the live ids in a table.
    Keys(Table),
    /// Last id handed out for a table (instance storage).
    LastId(Table),
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Persistent table ──────────────────────────────────────────

/// `KeyedStore` over the contract's persistent storage.
///
/// Rows live under `DataKey::Entry(table, id)` and ids come from the
/// `DataKey::LastId(table)` counter in instance storage. An indexed table
/// keeps a `DataKey::Keys(table)` list so iteration follows insertion order
/// across removals. An append-only table keeps no list and derives `keys()`
/// from the counter, so a write touches only its own row.
pub struct PersistentTable<V> {
    env: Env,
    table: Table,
    indexed: bool,
    _value: PhantomData<V>,
}

impl<V> PersistentTable<V> {
    pub fn new(env: &Env, table: Table) -> Self {
        Self {
            env: env.clone(),
            table,
            indexed: true,
            _value: PhantomData,
        }
    }

    /// Table whose rows are never removed, such as the audit trail.
    pub fn append_only(env: &Env, table: Table) -> Self {
        Self {
            indexed: false,
            ..Self::new(env, table)
        }
    }

    fn entry_key(&self, id: u64) -> DataKey {
        DataKey::Entry(self.table.clone(), id)
    }

    fn index_key(&self) -> DataKey {
        DataKey::Keys(self.table.clone())
    }

    fn counter_key(&self) -> DataKey {
        DataKey::LastId(self.table.clone())
    }

    fn index(&self) -> Vec<u64> {
        self.env
            .storage()
            .persistent()
            .get(&self.index_key())
            .unwrap_or(Vec::new(&self.env))
    }

    fn store_index(&self, index: &Vec<u64>) {
        let key = self.index_key();
        self.env.storage().persistent().set(&key, index);
        self.extend_ttl(&key);
    }

    fn extend_ttl(&self, key: &DataKey) {
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

impl<V> IdSequence for PersistentTable<V> {
    fn next_id(&self) -> u64 {
        let next = self.last_id().saturating_add(1);
        self.env.storage().instance().set(&self.counter_key(), &next);
        next
    }

    fn last_id(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&self.counter_key())
            .unwrap_or(0u64)
    }
}

impl<V> KeyedStore<u64, V> for PersistentTable<V>
where
    V: IntoVal<Env, Val> + TryFromVal<Env, Val>,
    <V as TryFromVal<Env, Val>>::Error: Debug,
{
    fn insert(&self, key: u64, value: &V) {
        let entry = self.entry_key(key);
        if self.indexed && !self.env.storage().persistent().has(&entry) {
            let mut index = self.index();
            index.push_back(key);
            self.store_index(&index);
        }
        self.env.storage().persistent().set(&entry, value);
        self.extend_ttl(&entry);
    }

    fn get(&self, key: &u64) -> Option<V> {
        self.env.storage().persistent().get(&self.entry_key(*key))
    }

    fn remove(&self, key: &u64) {
        let entry = self.entry_key(*key);
        if !self.env.storage().persistent().has(&entry) {
            return;
        }
        self.env.storage().persistent().remove(&entry);

        if !self.indexed {
            return;
        }
        let mut index = self.index();
        if let Some(position) = index.iter().position(|id| id == *key) {
            index.remove(position as u32);
            self.store_index(&index);
        }
    }

    fn keys(&self) -> StdVec<u64> {
        if self.indexed {
            return self.index().iter().collect();
        }
        (1..=self.last_id())
            .filter(|id| self.contains_key(id))
            .collect()
    }

    fn contains_key(&self, key: &u64) -> bool {
        self.env.storage().persistent().has(&self.entry_key(*key))
    }
}
