use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".money_notes";
const JOURNAL_FILE: &str = "journal.json";

/// Returns the application-specific data directory, defaulting to
/// `~/.money_notes`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("MONEY_NOTES_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the persisted journal file.
pub fn journal_file() -> PathBuf {
    app_data_dir().join(JOURNAL_FILE)
}
