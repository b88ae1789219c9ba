use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Transaction;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The full collection of recorded transactions, keyed by id. This is the
/// persisted unit: one journal per data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Journal::schema_version_default")]
    pub schema_version: u8,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            updated_at: Utc::now(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Inserts the transaction, replacing any existing record with the same id.
    pub fn upsert(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        match self.transactions.iter_mut().find(|txn| txn.id == id) {
            Some(existing) => *existing = transaction,
            None => self.transactions.push(transaction),
        }
        self.touch();
        id
    }

    /// Removes the record with the given id, returning it when present.
    pub fn remove(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        let removed = self.transactions.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
