//! Durable transaction store with snapshot observation.
//!
//! The store owns the journal and a persistence backend. Every successful
//! mutation persists the journal and then publishes the full current record
//! set (date descending) to all subscribers. Subscribing replays the current
//! state immediately, never a diff, so late subscribers start consistent.

use uuid::Uuid;

use crate::{
    analytics,
    domain::{Journal, Transaction},
    storage::{Result, StorageBackend},
};

/// Handle identifying one snapshot subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type SnapshotListener = Box<dyn FnMut(&[Transaction]) + Send>;

pub struct TransactionStore {
    backend: Box<dyn StorageBackend>,
    journal: Journal,
    subscribers: Vec<(SubscriberId, SnapshotListener)>,
    next_subscriber: u64,
}

impl TransactionStore {
    /// Opens the store over the given backend, loading any persisted journal.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let journal = backend.load()?;
        tracing::info!(
            transactions = journal.transaction_count(),
            "transaction store opened"
        );
        Ok(Self {
            backend,
            journal,
            subscribers: Vec::new(),
            next_subscriber: 0,
        })
    }

    /// Convenience constructor backed by volatile in-memory storage.
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(crate::storage::MemoryStorage::new()),
            journal: Journal::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Inserts the transaction, replacing any record with the same id. The
    /// journal is persisted before subscribers are notified; a persistence
    /// failure leaves the store unchanged and unnotified.
    pub fn insert(&mut self, transaction: Transaction) -> Result<Uuid> {
        let rollback = self.journal.clone();
        let id = self.journal.upsert(transaction);
        if let Err(err) = self.backend.save(&self.journal) {
            self.journal = rollback;
            return Err(err);
        }
        tracing::debug!(%id, "transaction inserted");
        self.notify_all();
        Ok(id)
    }

    /// Deletes the record with the given id. Unknown ids are a successful
    /// no-op and publish no snapshot.
    pub fn remove(&mut self, id: Uuid) -> Result<Option<Transaction>> {
        let rollback = self.journal.clone();
        let removed = match self.journal.remove(id) {
            Some(record) => record,
            None => return Ok(None),
        };
        if let Err(err) = self.backend.save(&self.journal) {
            self.journal = rollback;
            return Err(err);
        }
        tracing::debug!(%id, "transaction removed");
        self.notify_all();
        Ok(Some(removed))
    }

    /// Current full record set, newest first.
    pub fn snapshot(&self) -> Vec<Transaction> {
        analytics::sort_by_date_descending(&self.journal.transactions)
    }

    pub fn transaction_count(&self) -> usize {
        self.journal.transaction_count()
    }

    /// Registers a snapshot listener and immediately replays the current
    /// state to it.
    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriberId
    where
        F: FnMut(&[Transaction]) + Send + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        listener(&self.snapshot());
        self.subscribers.push((id, Box::new(listener)));
        tracing::debug!(subscriber = id.0, "snapshot subscriber registered");
        id
    }

    /// Tears down a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    fn notify_all(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = analytics::sort_by_date_descending(&self.journal.transactions);
        for (_, listener) in &mut self.subscribers {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Category, TransactionKind},
        errors::StoreError,
        storage,
    };
    use std::sync::{Arc, Mutex};

    fn sample(amount: f64) -> Transaction {
        Transaction::new(TransactionKind::Expense, Category::Food, amount, "")
    }

    /// Backend that always fails to save, for rollback coverage.
    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn save(&self, _journal: &Journal) -> storage::Result<()> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }

        fn load(&self) -> storage::Result<Journal> {
            Ok(Journal::new())
        }
    }

    #[test]
    fn subscribe_replays_current_state() {
        let mut store = TransactionStore::in_memory();
        store.insert(sample(10.0)).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn mutations_publish_snapshots_in_write_order() {
        let mut store = TransactionStore::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

        let id = store.insert(sample(10.0)).unwrap();
        store.insert(sample(20.0)).unwrap();
        store.remove(id).unwrap();

        // Replay, two inserts, one delete.
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 1]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut store = TransactionStore::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

        store.unsubscribe(id);
        store.insert(sample(10.0)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![0]);
    }

    #[test]
    fn insert_replaces_by_id() {
        let mut store = TransactionStore::in_memory();
        let original = sample(10.0);
        let id = store.insert(original.clone()).unwrap();

        let mut replacement = sample(99.0);
        replacement.id = id;
        store.insert(replacement).unwrap();

        assert_eq!(store.transaction_count(), 1);
        assert_eq!(store.snapshot()[0].amount, 99.0);
    }

    #[test]
    fn remove_unknown_id_is_a_silent_no_op() {
        let mut store = TransactionStore::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

        let removed = store.remove(Uuid::new_v4()).unwrap();
        assert!(removed.is_none());
        // Only the subscription replay, no mutation snapshot.
        assert_eq!(*seen.lock().unwrap(), vec![0]);
    }

    #[test]
    fn failed_persistence_rolls_back_and_stays_silent() {
        let mut store = TransactionStore::open(Box::new(FailingStorage)).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

        let err = store.insert(sample(10.0)).expect_err("save must fail");
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(store.transaction_count(), 0);
        assert_eq!(*seen.lock().unwrap(), vec![0]);
    }

    #[test]
    fn snapshot_is_sorted_newest_first() {
        use chrono::{TimeZone, Utc};
        let mut store = TransactionStore::in_memory();
        let older = Transaction::with_timestamp(
            TransactionKind::Expense,
            Category::Food,
            1.0,
            "",
            Utc.timestamp_opt(100, 0).unwrap(),
        );
        let newer = Transaction::with_timestamp(
            TransactionKind::Income,
            Category::Salary,
            2.0,
            "",
            Utc.timestamp_opt(200, 0).unwrap(),
        );
        store.insert(older.clone()).unwrap();
        store.insert(newer.clone()).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].id, newer.id);
        assert_eq!(snapshot[1].id, older.id);
    }
}
