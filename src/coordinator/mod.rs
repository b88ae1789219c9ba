//! Bridges the transaction store and a presentation layer.
//!
//! The coordinator owns the store, keeps a derived [`ViewState`] current by
//! re-running the aggregation engine on every snapshot, and forwards
//! user-initiated mutations. All derived values are recomputed from the full
//! record set on each change rather than maintained incrementally.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    analytics::{self, CategorySlice, FinancialSummary},
    domain::{Category, Transaction, TransactionKind},
    errors::StoreError,
    storage::StorageBackend,
    store::TransactionStore,
};

/// Window used for the "recent activity" list, matching the home screen.
const RECENT_WINDOW_DAYS: i64 = 30;

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
}

/// Derived state published to the presentation layer, rebuilt per snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// All transactions, newest first.
    pub transactions: Vec<Transaction>,
    /// Transactions from the last thirty days, newest first.
    pub recent: Vec<Transaction>,
    pub summary: FinancialSummary,
    pub expense_breakdown: Vec<CategorySlice>,
    pub income_breakdown: Vec<CategorySlice>,
}

impl ViewState {
    fn derive(snapshot: &[Transaction]) -> Self {
        Self {
            transactions: analytics::sort_by_date_descending(snapshot),
            recent: analytics::recent_within_days(snapshot, RECENT_WINDOW_DAYS, Utc::now()),
            summary: analytics::summarize(snapshot),
            expense_breakdown: analytics::ranked_breakdown(snapshot, TransactionKind::Expense),
            income_breakdown: analytics::ranked_breakdown(snapshot, TransactionKind::Income),
        }
    }

    fn empty() -> Self {
        Self::derive(&[])
    }
}

pub struct ViewStateCoordinator {
    store: TransactionStore,
    state: ViewState,
}

impl ViewStateCoordinator {
    /// Opens the store over the given backend and derives the initial state
    /// from whatever was persisted.
    pub fn open(backend: Box<dyn StorageBackend>) -> CoordinatorResult<Self> {
        let store = TransactionStore::open(backend)?;
        let state = ViewState::derive(&store.snapshot());
        Ok(Self { store, state })
    }

    /// Coordinator over a volatile in-memory store.
    pub fn in_memory() -> Self {
        Self {
            store: TransactionStore::in_memory(),
            state: ViewState::empty(),
        }
    }

    /// Validates input, builds a transaction with a fresh id and the current
    /// timestamp, and inserts it. A non-finite or negative amount blocks
    /// submission; no record is constructed.
    pub fn submit(
        &mut self,
        kind: TransactionKind,
        category: Category,
        amount: f64,
        description: Option<&str>,
    ) -> CoordinatorResult<Uuid> {
        if !amount.is_finite() || amount < 0.0 {
            tracing::warn!(amount, "rejected submission with invalid amount");
            return Err(CoordinatorError::InvalidAmount(amount));
        }
        let transaction =
            Transaction::new(kind, category, amount, description.unwrap_or_default());
        let id = self.store.insert(transaction)?;
        self.refresh();
        Ok(id)
    }

    /// Deletes the record with the given id; unknown ids succeed silently.
    pub fn delete(&mut self, id: Uuid) -> CoordinatorResult<()> {
        self.store.remove(id)?;
        self.refresh();
        Ok(())
    }

    /// The currently published derived state.
    pub fn view(&self) -> &ViewState {
        &self.state
    }

    fn refresh(&mut self) {
        self.state = ViewState::derive(&self.store.snapshot());
    }
}
