pub mod json_backend;
pub mod memory;

use crate::{domain::Journal, errors::StoreError};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends capable of storing a journal.
///
/// A missing underlying file is not an error: `load` returns an empty journal
/// so a first launch starts from a clean slate.
pub trait StorageBackend: Send + Sync {
    fn save(&self, journal: &Journal) -> Result<()>;
    fn load(&self) -> Result<Journal>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
