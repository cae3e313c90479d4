//! JSON file backed store

use super::KeyValueStore;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Store persisted as a flat JSON object
///
/// The whole file is rewritten on every `set`. A missing or unreadable file
/// behaves like an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store in the platform data directory, or the working directory if
    /// none can be resolved
    #[must_use]
    pub fn new() -> Self {
        let path = ProjectDirs::from("", "", "five_wordle").map_or_else(
            || PathBuf::from("five_wordle_store.json"),
            |dirs| dirs.data_local_dir().join("store.json"),
        );
        Self { path }
    }

    #[must_use]
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        fs::read(&self.path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&values)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_path(dir.path().join("store.json"));
        assert_eq!(store.get("wordleHighScore"), None);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::with_path(&path);
        store.set("wordleHighScore", "7").unwrap();

        let reopened = FileStore::with_path(&path);
        assert_eq!(reopened.get("wordleHighScore").as_deref(), Some("7"));
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::with_path(dir.path().join("store.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_reads_empty_and_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, b"{ not json").unwrap();

        let mut store = FileStore::with_path(&path);
        assert_eq!(store.get("wordleHighScore"), None);

        store.set("wordleHighScore", "2").unwrap();
        assert_eq!(store.get("wordleHighScore").as_deref(), Some("2"));
    }
}
