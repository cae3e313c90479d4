//! Key-value persistence for data that outlives a game
//!
//! The game only ever reads and writes a single key (the high score), but
//! the store is a plain string map so hosts can swap the backing medium.

mod file;

pub use file::FileStore;

use rustc_hash::FxHashMap;
use std::io;

/// Minimal durable string store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an I/O error if the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-process store that forgets everything on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("wordleHighScore"), None);

        store.set("wordleHighScore", "3").unwrap();
        assert_eq!(store.get("wordleHighScore").as_deref(), Some("3"));

        store.set("wordleHighScore", "4").unwrap();
        assert_eq!(store.get("wordleHighScore").as_deref(), Some("4"));
    }

    #[test]
    fn memory_store_with_entry() {
        let store = MemoryStore::with_entry("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn borrowed_store_writes_through() {
        fn write_into<S: KeyValueStore>(mut store: S) {
            store.set("k", "v").unwrap();
        }

        let mut store = MemoryStore::new();
        write_into(&mut store);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
