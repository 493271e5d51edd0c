//! In-memory [`PersonStore`] backed by a lock-guarded map.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::allocator::IdAllocator;
use super::errors::{StoreError, StoreResult};
use super::person::{Person, PersonMutationRequest};
use super::PersonStore;

/// Process-local person store.
///
/// Readers and writers both go through the same `RwLock`, so `list` always
/// observes a consistent map. Ids come from an atomic allocator outside the
/// lock.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    records: RwLock<BTreeMap<i64, Person>>,
    ids: IdAllocator,
}

impl InMemoryPersonStore {
    /// Empty store; the first insert receives id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`.
    ///
    /// The allocator starts past the highest seeded id (and never below the
    /// record count), so new records can't collide with seeds.
    pub fn with_records(records: impl IntoIterator<Item = Person>) -> Self {
        let records: BTreeMap<i64, Person> = records.into_iter().map(|p| (p.id, p)).collect();
        let highest = records.keys().next_back().copied().unwrap_or(0);
        let ids = IdAllocator::starting_at(highest.max(records.len() as i64));
        Self {
            records: RwLock::new(records),
            ids,
        }
    }

    /// Store holding the three demo records the service boots with
    pub fn seeded() -> Self {
        Self::with_records([
            Person {
                id: 1,
                name: "Ethan Winters".to_string(),
                age: 37,
                address: "Depok".to_string(),
            },
            Person {
                id: 2,
                name: "Chris Redfield".to_string(),
                age: 48,
                address: "Jakarta".to_string(),
            },
            Person {
                id: 3,
                name: "Leon Scott Kennedy".to_string(),
                age: 44,
                address: "Bandung".to_string(),
            },
        ])
    }

    /// Last id handed out by the allocator
    pub fn last_id(&self) -> i64 {
        self.ids.current()
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<i64, Person>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, Person>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl PersonStore for InMemoryPersonStore {
    fn list(&self) -> Vec<Person> {
        self.read().values().cloned().collect()
    }

    fn insert(&self, request: PersonMutationRequest) -> Person {
        let id = self.ids.next();
        let person = Person::from_request(id, request);

        self.write().insert(id, person.clone());
        debug!(id, "person inserted");

        person
    }

    fn update(&self, id: i64, request: PersonMutationRequest) -> StoreResult<Person> {
        let mut records = self.write();
        let person = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        person.apply(request);
        debug!(id, "person updated");

        Ok(person.clone())
    }

    fn delete(&self, id: i64) -> StoreResult<Person> {
        let removed = self.write().remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(id, "person deleted");

        Ok(removed)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> PersonMutationRequest {
        PersonMutationRequest::new(name, 20, "Somewhere")
    }

    #[test]
    fn test_seeded_store() {
        let store = InMemoryPersonStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.last_id(), 3);

        let ids: Vec<i64> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = InMemoryPersonStore::seeded();
        let a = store.insert(request("a"));
        let b = store.insert(request("b"));
        assert_eq!(a.id, 4);
        assert_eq!(b.id, 5);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_insert_then_list_round_trip() {
        let store = InMemoryPersonStore::new();
        let created = store.insert(PersonMutationRequest::new("A", 1, "X"));

        let matching: Vec<_> = store
            .list()
            .into_iter()
            .filter(|p| p.name == "A" && p.age == 1 && p.address == "X")
            .collect();
        assert_eq!(matching, vec![created]);
    }

    #[test]
    fn test_update_overwrites_fields() {
        let store = InMemoryPersonStore::seeded();
        let updated = store.update(2, request("Claire")).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Claire");
        assert_eq!(store.list()[1], updated);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let store = InMemoryPersonStore::seeded();
        let before = store.list();

        let result = store.update(999, request("ghost"));
        assert_eq!(result, Err(StoreError::NotFound(999)));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete_twice() {
        let store = InMemoryPersonStore::seeded();
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(store.delete(1), Err(StoreError::NotFound(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = InMemoryPersonStore::new();
        let first = store.insert(request("a"));
        store.delete(first.id).unwrap();

        let second = store.insert(request("b"));
        assert!(second.id > first.id);
    }

    #[test]
    fn test_sparse_seed_ids_are_not_reallocated() {
        let seed = |id: i64, name: &str| Person {
            id,
            name: name.to_string(),
            age: 1,
            address: "X".to_string(),
        };
        let store = InMemoryPersonStore::with_records([seed(1, "one"), seed(5, "five")]);
        assert_eq!(store.last_id(), 5);

        let ids: Vec<i64> = (0..3).map(|_| store.insert(request("new")).id).collect();
        assert_eq!(ids, vec![6, 7, 8]);
        assert_eq!(store.len(), 5);

        let five = store.list().into_iter().find(|p| p.id == 5).unwrap();
        assert_eq!(five.name, "five");
    }
}
