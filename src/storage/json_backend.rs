use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{domain::Journal, utils::paths};

use super::{Result, StorageBackend};

/// Durable journal storage as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Storage rooted at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default journal location under the app data directory.
    pub fn new_default() -> Self {
        Self::new(paths::journal_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, journal: &Journal) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_journal_to_path(journal, &self.path)?;
        tracing::debug!(path = %self.path.display(), "journal saved");
        Ok(())
    }

    fn load(&self) -> Result<Journal> {
        if !self.path.exists() {
            return Ok(Journal::new());
        }
        load_journal_from_path(&self.path)
    }
}

/// Writes the journal to disk atomically by staging to a temporary file.
pub fn save_journal_to_path(journal: &Journal, path: &Path) -> Result<()> {
    let tmp = tmp_path(path);
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a journal snapshot from disk, returning structured errors on failure.
pub fn load_journal_from_path(path: &Path) -> Result<Journal> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}
