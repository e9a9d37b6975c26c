use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::annotations::{UserHighlights, UserNotes};
use crate::error::StorageError;
use crate::progress::UserProgress;

pub const DARK_MODE_KEY: &str = "sheepLingo_darkMode";
pub const PROGRESS_KEY: &str = "sheepLingo_progress";
pub const NOTES_KEY: &str = "sheepLingo_notes";
pub const HIGHLIGHTS_KEY: &str = "sheepLingo_highlights";

pub const ALL_KEYS: [&str; 4] = [DARK_MODE_KEY, PROGRESS_KEY, NOTES_KEY, HIGHLIGHTS_KEY];

/// String blobs keyed by name, in the manner of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per entry under a data directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn open(root: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(root).map_err(|source| StorageError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(DirStore {
            root: root.to_path_buf(),
        })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

pub fn clear_all(store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}

/// A value mirrored to one store key. Reads fall back to the default when
/// the entry is absent or unparsable; `update` rewrites the entry whenever
/// the value actually changed.
#[derive(Debug, Clone)]
pub struct Persisted<T> {
    key: &'static str,
    value: T,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned + Default + Clone + PartialEq,
{
    pub fn load(store: &dyn KeyValueStore, key: &'static str) -> Self {
        let value = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored value unparsable, using default");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value unreadable, using default");
                T::default()
            }
        };
        Persisted { key, value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn update<R>(&mut self, store: &mut dyn KeyValueStore, f: impl FnOnce(&mut T) -> R) -> R {
        let before = self.value.clone();
        let out = f(&mut self.value);
        if self.value != before {
            if let Err(e) = self.save(store) {
                tracing::error!(key = self.key, error = %e, "failed to persist");
            }
        }
        out
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.value).map_err(|source| StorageError::Serialize {
            key: self.key.to_string(),
            source,
        })?;
        store.set(self.key, &raw)?;
        tracing::debug!(key = self.key, bytes = raw.len(), "persisted");
        Ok(())
    }
}

/// The single owner of all persisted state.
pub struct AppState {
    store: Box<dyn KeyValueStore>,
    dark_mode: Persisted<bool>,
    progress: Persisted<UserProgress>,
    notes: Persisted<UserNotes>,
    highlights: Persisted<UserHighlights>,
}

impl AppState {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let dark_mode = Persisted::load(store.as_ref(), DARK_MODE_KEY);
        let progress = Persisted::load(store.as_ref(), PROGRESS_KEY);
        let notes = Persisted::load(store.as_ref(), NOTES_KEY);
        let highlights = Persisted::load(store.as_ref(), HIGHLIGHTS_KEY);
        AppState {
            store,
            dark_mode,
            progress,
            notes,
            highlights,
        }
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::default()))
    }

    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.get()
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode.update(self.store.as_mut(), |v| *v = on);
    }

    pub fn progress(&self) -> &UserProgress {
        self.progress.get()
    }

    pub fn update_progress<R>(&mut self, f: impl FnOnce(&mut UserProgress) -> R) -> R {
        self.progress.update(self.store.as_mut(), f)
    }

    pub fn notes(&self) -> &UserNotes {
        self.notes.get()
    }

    pub fn update_notes<R>(&mut self, f: impl FnOnce(&mut UserNotes) -> R) -> R {
        self.notes.update(self.store.as_mut(), f)
    }

    pub fn highlights(&self) -> &UserHighlights {
        self.highlights.get()
    }

    pub fn update_highlights<R>(&mut self, f: impl FnOnce(&mut UserHighlights) -> R) -> R {
        self.highlights.update(self.store.as_mut(), f)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::VerseKey;

    #[test]
    fn test_defaults_on_empty_store() {
        let state = AppState::in_memory();
        assert!(!state.dark_mode());
        assert_eq!(state.progress(), &UserProgress::default());
        assert!(state.notes().is_empty());
        assert!(state.highlights().is_empty());
    }

    #[test]
    fn test_garbage_blob_falls_back() {
        let mut store = MemoryStore::default();
        store.set(PROGRESS_KEY, "{not json").unwrap();
        store.set(DARK_MODE_KEY, "true").unwrap();
        let state = AppState::load(Box::new(store));
        assert_eq!(state.progress().current_book, "Genesis");
        assert!(state.dark_mode());
    }

    #[test]
    fn test_update_writes_through() {
        let mut state = AppState::in_memory();
        state.update_progress(|p| p.mark_verse_completed("Genesis", 1, 1));
        state.update_notes(|n| n.save(&VerseKey::new("Genesis", 1, 1), "first"));

        let raw = state.store().get(PROGRESS_KEY).unwrap().unwrap();
        let stored: UserProgress = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.total_xp, 10);
        assert_eq!(
            state.store().get(NOTES_KEY).unwrap().as_deref(),
            Some(r#"{"Genesis-1-1":"first"}"#)
        );
        assert_eq!(state.store().get(HIGHLIGHTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_unchanged_value_not_rewritten() {
        let mut state = AppState::in_memory();
        state.set_dark_mode(false);
        assert_eq!(state.store().get(DARK_MODE_KEY).unwrap(), None);
        state.set_dark_mode(true);
        assert_eq!(state.store().get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_clear_all() {
        let mut store = MemoryStore::default();
        for key in ALL_KEYS {
            store.set(key, "{}").unwrap();
        }
        store.set("unrelated", "1").unwrap();
        clear_all(&mut store).unwrap();
        assert_eq!(store.entries.len(), 1);
    }
}
