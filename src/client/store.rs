use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Fixed key under which the selected provider ids are persisted.
pub const STORAGE_KEY: &str = "streamfinder_selected_services";

/// Key-value persistence contract for the user's service selection.
///
/// The stored value is a JSON array of provider ids. Anything unreadable or
/// unparseable loads as `None`, indistinguishable from "never saved".
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Option<Vec<u32>>;
    fn save(&self, ids: &[u32]) -> io::Result<()>;
}

/// File-backed store: one JSON array at `<dir>/<STORAGE_KEY>.json`.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn load(&self) -> Option<Vec<u32>> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => Some(ids),
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %self.path.display(),
                    "stored selection is corrupt, starting fresh"
                );
                None
            }
        }
    }

    fn save(&self, ids: &[u32]) -> io::Result<()> {
        let body = serde_json::to_string(ids).map_err(io::Error::other)?;
        std::fs::write(&self.path, body)
    }
}

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    saved: Mutex<Option<Vec<u32>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a saved selection.
    pub fn with_saved(ids: Vec<u32>) -> Self {
        Self {
            saved: Mutex::new(Some(ids)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<Vec<u32>> {
        self.saved.lock().expect("preference store lock").clone()
    }

    fn save(&self, ids: &[u32]) -> io::Result<()> {
        *self.saved.lock().expect("preference store lock") = Some(ids.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path());

        store.save(&[8, 337]).unwrap();
        assert_eq!(store.load(), Some(vec![8, 337]));
    }

    #[test]
    fn test_absent_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{STORAGE_KEY}.json"));
        std::fs::write(&path, "{not json!").unwrap();

        let store = JsonFilePreferenceStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let store = MemoryPreferenceStore::with_saved(vec![8]);
        store.save(&[15, 386]).unwrap();
        assert_eq!(store.load(), Some(vec![15, 386]));
    }
}
