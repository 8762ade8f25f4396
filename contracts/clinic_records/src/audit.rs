use alloc::format;
use alloc::string::ToString;
use core::fmt;

use common::{IdSequence, KeyedStore};
use soroban_sdk::{Env, String, Vec};

use crate::events;
use crate::types::AuditEntry;

/// Who an audit entry is attributed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Actor {
    Doctor(u64),
    Admin,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Doctor(id) => write!(f, "{}", id),
            Actor::Admin => f.write_str("admin"),
        }
    }
}

/// Append-only audit trail keyed by a monotonic sequence number.
pub struct AuditLog<A> {
    env: Env,
    store: A,
}

impl<A> AuditLog<A>
where
    A: KeyedStore<u64, AuditEntry> + IdSequence,
{
    pub fn new(env: &Env, store: A) -> Self {
        Self {
            env: env.clone(),
            store,
        }
    }

    /// Append `(timestamp, actor, action)` and announce it as an `AUDIT` event.
    ///
    /// Never fails the calling operation.
    pub fn record(&self, actor: Actor, action: &str) {
        let sequence = self.store.next_id();
        let timestamp = self.env.ledger().timestamp();
        let actor_text = actor.to_string();

        let entry = AuditEntry {
            sequence,
            timestamp,
            actor: String::from_str(&self.env, &actor_text),
            action: String::from_str(&self.env, action),
        };
        self.store.insert(sequence, &entry);

        let message = format!("{} - {}", actor_text, action);
        events::publish_audit_recorded(
            &self.env,
            sequence,
            timestamp,
            String::from_str(&self.env, &message),
        );
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> u64 {
        self.store.last_id()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, sequence: u64) -> Option<AuditEntry> {
        self.store.get(&sequence)
    }

    /// Entries with sequence in `[start, start + limit)`, oldest first.
    pub fn range(&self, start: u64, limit: u32) -> Vec<AuditEntry> {
        let mut entries = Vec::new(&self.env);
        let first = start.max(1);
        let end = start.saturating_add(limit as u64).min(self.len().saturating_add(1));

        for sequence in first..end {
            if let Some(entry) = self.store.get(&sequence) {
                entries.push_back(entry);
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::ClinicRecordsContract;
    use common::MemoryStore;
    use soroban_sdk::testutils::Ledger as _;

    #[test]
    fn test_actor_rendering() {
        assert_eq!(Actor::Doctor(17).to_string(), "17");
        assert_eq!(Actor::Admin.to_string(), "admin");
    }

    #[test]
    fn test_same_timestamp_entries_do_not_collide() {
        let env = Env::default();
        env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);
        let contract_id = env.register(ClinicRecordsContract, ());

        env.as_contract(&contract_id, || {
            let log = AuditLog::new(&env, MemoryStore::<u64, AuditEntry>::new());
            log.record(Actor::Doctor(1), "Added new doctor");
            log.record(Actor::Doctor(2), "Added new doctor");

            assert_eq!(log.len(), 2);
            let first = log.get(1).unwrap();
            let second = log.get(2).unwrap();
            assert_eq!(first.timestamp, second.timestamp);
            assert_eq!(first.actor, String::from_str(&env, "1"));
            assert_eq!(second.actor, String::from_str(&env, "2"));
        });
    }

    #[test]
    fn test_range_is_clamped() {
        let env = Env::default();
        let contract_id = env.register(ClinicRecordsContract, ());

        env.as_contract(&contract_id, || {
            let log = AuditLog::new(&env, MemoryStore::<u64, AuditEntry>::new());
            assert!(log.is_empty());
            for _ in 0..5 {
                log.record(Actor::Admin, "Generated patient reports");
            }

            let page = log.range(2, 2);
            assert_eq!(page.len(), 2);
            assert_eq!(page.get(0).unwrap().sequence, 2);
            assert_eq!(page.get(1).unwrap().sequence, 3);

            assert_eq!(log.range(0, 100).len(), 5);
            assert_eq!(log.range(4, 100).len(), 2);
            assert!(log.range(6, 10).is_empty());
        });
    }
}
