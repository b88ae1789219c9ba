use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Income or expense classification of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// One recorded financial event. Created whole and never mutated in place;
/// replacing a record means inserting a new value under the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub category: Category,
    pub amount: f64,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a record with a fresh id and the current timestamp. A blank
    /// description falls back to the category label.
    pub fn new(
        kind: TransactionKind,
        category: Category,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(kind, category, amount, description, Utc::now())
    }

    /// Builds a record at an explicit point in time.
    pub fn with_timestamp(
        kind: TransactionKind,
        category: Category,
        amount: f64,
        description: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            category.label().to_string()
        } else {
            description
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            category,
            amount,
            description,
            occurred_at,
        }
    }
}
