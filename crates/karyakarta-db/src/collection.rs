use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

/// A stored record with an immutable identity.
pub trait Record: Clone {
    fn id(&self) -> Uuid;
}

/// Records that take part in free-text search.
pub trait Searchable {
    /// The text fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match; `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// An insertion-ordered collection of one entity type.
///
/// All access goes through a single mutex, so any closure passed to
/// [`Collection::modify`] runs atomically with respect to every other
/// operation on the same collection. Callers only ever receive clones.
pub struct Collection<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    // Records are plain values with no cross-record invariant, so a panic in
    // another holder leaves nothing half-written that we could observe.
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, record: T) -> T {
        self.lock().push(record.clone());
        record
    }

    pub fn all(&self) -> Vec<T> {
        self.lock().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.lock().iter().find(|r| r.id() == id).cloned()
    }

    /// Runs `f` against the record with `id` while holding the lock.
    /// Returns `None` when no such record exists.
    pub fn modify<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut records = self.lock();
        records.iter_mut().find(|r| r.id() == id).map(f)
    }

    /// Like [`Collection::modify`] but hands back a snapshot of the record
    /// after `f` ran.
    pub fn update<F>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        self.modify(id, |record| {
            f(record);
            record.clone()
        })
    }

    /// Removes the record with `id`. Returns `false` if there was none.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut records = self.lock();
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Stable filter: matching records in collection order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.lock().iter().filter(|r| predicate(r)).cloned().collect()
    }

    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.lock().iter().filter(|r| predicate(r)).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Record + Searchable> Collection<T> {
    /// Records where any search field contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<T> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.all();
        }
        self.filter(|record| record.matches(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Uuid,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    impl Searchable for Note {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.text.as_str()]
        }
    }

    fn note(n: u128, text: &str) -> Note {
        Note {
            id: Uuid::from_u128(n),
            text: text.to_string(),
        }
    }

    #[test]
    fn remove_takes_exactly_one_and_keeps_order() {
        let notes = Collection::new(vec![note(1, "a"), note(2, "b"), note(3, "c")]);
        assert!(notes.remove(Uuid::from_u128(2)));
        assert!(!notes.remove(Uuid::from_u128(2)));

        let ids: Vec<_> = notes.all().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![Uuid::from_u128(1), Uuid::from_u128(3)]);
    }

    #[test]
    fn modify_missing_record_is_none() {
        let notes = Collection::new(vec![note(1, "a")]);
        assert_eq!(notes.modify(Uuid::from_u128(9), |n| n.text.clear()), None);
        assert_eq!(notes.get(Uuid::from_u128(1)).unwrap().text, "a");
    }

    #[test]
    fn snapshots_are_detached() {
        let notes = Collection::new(vec![note(1, "a")]);
        let mut snapshot = notes.all();
        snapshot[0].text = "changed".to_string();
        assert_eq!(notes.get(Uuid::from_u128(1)).unwrap().text, "a");
    }

    #[test]
    fn search_is_case_insensitive_and_stable() {
        let notes = Collection::new(vec![
            note(1, "Rajesh Patil"),
            note(2, "Sunita Jadhav"),
            note(3, "RAJESH more"),
        ]);
        let upper = notes.search("RAJESH");
        let lower = notes.search("rajesh");
        assert_eq!(upper, lower);
        assert_eq!(upper.iter().map(|n| n.id).collect::<Vec<_>>(), vec![
            Uuid::from_u128(1),
            Uuid::from_u128(3)
        ]);
        assert_eq!(notes.search(""), notes.all());
    }

    #[test]
    fn concurrent_modifications_do_not_lose_updates() {
        #[derive(Clone)]
        struct Counter {
            id: Uuid,
            value: u64,
        }
        impl Record for Counter {
            fn id(&self) -> Uuid {
                self.id
            }
        }

        let counters = std::sync::Arc::new(Collection::new(vec![Counter {
            id: Uuid::from_u128(1),
            value: 0,
        }]));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counters = counters.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        counters.modify(Uuid::from_u128(1), |c| c.value += 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.get(Uuid::from_u128(1)).unwrap().value, 2000);
    }
}
