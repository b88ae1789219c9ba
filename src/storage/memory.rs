use std::sync::Mutex;

use crate::domain::Journal;

use super::{Result, StorageBackend};

/// Volatile backend holding the journal in memory. Used by tests and headless
/// embeddings that do not want disk persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    journal: Mutex<Option<Journal>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn save(&self, journal: &Journal) -> Result<()> {
        let mut slot = self.journal.lock().unwrap_or_else(|poison| poison.into_inner());
        *slot = Some(journal.clone());
        Ok(())
    }

    fn load(&self) -> Result<Journal> {
        let slot = self.journal.lock().unwrap_or_else(|poison| poison.into_inner());
        Ok(slot.clone().unwrap_or_default())
    }
}
