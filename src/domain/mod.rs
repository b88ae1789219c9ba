//! Domain models for recorded income and expense events.

pub mod category;
pub mod journal;
pub mod transaction;

pub use category::Category;
pub use journal::Journal;
pub use transaction::{Transaction, TransactionKind};
