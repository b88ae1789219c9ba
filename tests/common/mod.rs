use money_notes_core::{coordinator::ViewStateCoordinator, storage::JsonStorage};
use tempfile::TempDir;

/// Creates a coordinator persisting into its own temp directory. The TempDir
/// guard is returned so the folder outlives the test body.
pub fn disk_coordinator() -> (ViewStateCoordinator, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonStorage::new(temp.path().join("journal.json"));
    let coordinator =
        ViewStateCoordinator::open(Box::new(storage)).expect("open coordinator over temp storage");
    (coordinator, temp)
}
