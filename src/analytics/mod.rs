//! Pure aggregation over transaction collections.
//!
//! Every function here is total, deterministic, and side-effect free: the
//! coordinator re-runs them on each store snapshot rather than maintaining
//! incremental state. Data volumes are personal-finance scale, so recomputing
//! from scratch is intentional.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Transaction, TransactionKind};

/// Derived totals over a record collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl FinancialSummary {
    /// Income share of combined volume, 0.0 when nothing is recorded.
    pub fn income_percentage(&self) -> f64 {
        let combined = self.total_income + self.total_expense;
        if combined > 0.0 {
            self.total_income / combined
        } else {
            0.0
        }
    }

    /// Expense share of combined volume, 0.0 when nothing is recorded.
    pub fn expense_percentage(&self) -> f64 {
        let combined = self.total_income + self.total_expense;
        if combined > 0.0 {
            self.total_expense / combined
        } else {
            0.0
        }
    }
}

impl Default for FinancialSummary {
    fn default() -> Self {
        Self {
            total_income: 0.0,
            total_expense: 0.0,
            balance: 0.0,
        }
    }
}

/// One entry of a ranked category breakdown: the summed amount for a category
/// and its share of the kind's total, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    pub total: f64,
    pub percentage: f64,
}

/// Sums income and expense totals and their balance. Empty input yields zeros.
pub fn summarize(records: &[Transaction]) -> FinancialSummary {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    for record in records {
        match record.kind {
            TransactionKind::Income => total_income += record.amount,
            TransactionKind::Expense => total_expense += record.amount,
        }
    }
    FinancialSummary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// Retains records of the given kind, preserving input order.
pub fn filter_by_kind(records: &[Transaction], kind: TransactionKind) -> Vec<Transaction> {
    records
        .iter()
        .filter(|record| record.kind == kind)
        .cloned()
        .collect()
}

/// Sums amounts per category. Categories with no matching records are absent
/// from the result rather than present with zero.
pub fn group_by_category(records: &[Transaction]) -> BTreeMap<Category, f64> {
    let mut sums = BTreeMap::new();
    for record in records {
        *sums.entry(record.category).or_insert(0.0) += record.amount;
    }
    sums
}

/// Ranked per-category breakdown for one kind, largest first. Categories with
/// a non-positive sum are dropped; ties keep category declaration order.
/// Returns an empty list when the kind has no volume, so percentages never
/// divide by zero.
pub fn ranked_breakdown(records: &[Transaction], kind: TransactionKind) -> Vec<CategorySlice> {
    let filtered = filter_by_kind(records, kind);
    let sums = group_by_category(&filtered);
    let total: f64 = sums.values().filter(|sum| **sum > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    // BTreeMap iteration is already in category declaration order, so a
    // stable sort on the sum alone preserves the documented tie-break.
    let mut slices: Vec<CategorySlice> = sums
        .into_iter()
        .filter(|(_, sum)| *sum > 0.0)
        .map(|(category, sum)| CategorySlice {
            category,
            total: sum,
            percentage: sum / total * 100.0,
        })
        .collect();
    slices.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    slices
}

/// Stable sort by timestamp, newest first. Records with identical timestamps
/// keep their relative input order.
pub fn sort_by_date_descending(records: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    sorted
}

/// Records newer than `days` days before `now`, newest first. `now` is an
/// explicit parameter so callers control the clock.
pub fn recent_within_days(
    records: &[Transaction],
    days: i64,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let cutoff = now - Duration::days(days);
    let recent: Vec<Transaction> = records
        .iter()
        .filter(|record| record.occurred_at > cutoff)
        .cloned()
        .collect();
    sort_by_date_descending(&recent)
}
