//! Learner progress, persisted as one JSON blob under a single key.
//!
//! The store mirrors browser localStorage semantics: string keys, string
//! values, no locking. Concurrent writers race and the last write wins,
//! which is acceptable for a single learner on a single device.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::names;

/// String key-value capability backing the progress store. Storage faults
/// are logged and swallowed; a progress store must never take the page down.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// One file per key under a directory, the on-disk analog of a browser
/// profile's localStorage.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!("could not create store directory {:?}: {e}", self.dir);
            return;
        }
        if let Err(e) = std::fs::write(self.path(key), value) {
            tracing::warn!("could not persist {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove {path:?}: {e}");
            }
        }
    }
}

/// Per-chapter completion record. `completed_at` is an ISO-8601 string,
/// matching the authoring format of the blob (`completedAt`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterProgress {
    pub completed: bool,
    #[serde(rename = "completedAt")]
    pub completed_at: String,
}

#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KvStore>,
}

impl ProgressStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// The full progress table. An absent or unparseable blob reads as
    /// empty; corrupted storage must not break the page.
    pub fn get_progress(&self) -> BTreeMap<String, ChapterProgress> {
        let Some(blob) = self.store.get(names::PROGRESS_STORAGE_KEY) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&blob) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!("discarding unreadable progress blob: {e}");
                BTreeMap::new()
            }
        }
    }

    /// Record a chapter as complete. Idempotent: re-marking only refreshes
    /// the timestamp.
    pub fn mark_chapter_complete(&self, chapter_id: &str) {
        let mut progress = self.get_progress();
        progress.insert(
            chapter_id.to_string(),
            ChapterProgress {
                completed: true,
                completed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        );
        match serde_json::to_string(&progress) {
            Ok(blob) => self.store.set(names::PROGRESS_STORAGE_KEY, &blob),
            Err(e) => tracing::warn!("could not serialize progress: {e}"),
        }
    }

    pub fn is_chapter_complete(&self, chapter_id: &str) -> bool {
        self.get_progress()
            .get(chapter_id)
            .is_some_and(|p| p.completed)
    }

    pub fn get_completed_count(&self) -> usize {
        self.get_progress().values().filter(|p| p.completed).count()
    }

    /// Forget everything; subsequent reads behave as if never written.
    pub fn reset(&self) {
        self.store.remove(names::PROGRESS_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_memory_store() {
        let progress = ProgressStore::in_memory();
        assert_eq!(progress.get_completed_count(), 0);

        progress.mark_chapter_complete("ch1");
        assert!(progress.is_chapter_complete("ch1"));
        assert!(!progress.is_chapter_complete("ch2"));
        assert_eq!(progress.get_completed_count(), 1);

        progress.mark_chapter_complete("ch2");
        assert_eq!(progress.get_completed_count(), 2);

        progress.reset();
        assert_eq!(progress.get_completed_count(), 0);
        assert!(progress.get_progress().is_empty());
    }

    #[test]
    fn remarking_a_chapter_does_not_double_count() {
        let progress = ProgressStore::in_memory();
        progress.mark_chapter_complete("ch1");
        progress.mark_chapter_complete("ch1");
        assert_eq!(progress.get_completed_count(), 1);
    }

    #[test]
    fn completed_at_is_iso_8601() {
        let progress = ProgressStore::in_memory();
        progress.mark_chapter_complete("ch1");
        let table = progress.get_progress();
        let stamp = &table["ch1"].completed_at;
        assert!(
            chrono::DateTime::parse_from_rfc3339(stamp).is_ok(),
            "timestamp {stamp} should parse as RFC 3339"
        );
        assert!(stamp.ends_with('Z'));
    }

    #[test]
    fn corrupted_blob_reads_as_empty() {
        let store = Arc::new(MemoryStore::default());
        store.set(names::PROGRESS_STORAGE_KEY, "{not json");
        let progress = ProgressStore::new(store);
        assert!(progress.get_progress().is_empty());
        assert!(!progress.is_chapter_complete("ch1"));
        // Writing afterwards starts a fresh table.
        progress.mark_chapter_complete("ch1");
        assert_eq!(progress.get_completed_count(), 1);
    }

    #[test]
    fn blob_uses_the_authoring_field_names() {
        let store = Arc::new(MemoryStore::default());
        let progress = ProgressStore::new(store.clone());
        progress.mark_chapter_complete("ch1");

        let blob = store
            .get(names::PROGRESS_STORAGE_KEY)
            .expect("blob should be written");
        assert!(blob.contains("\"completedAt\""));
        assert!(blob.contains("\"completed\":true"));
    }
}
