//! # Slot Storage
//!
//! Named JSON slots in a caller-chosen directory, one file per slot.
//!
//! Each store instance is the sole writer of its slot, so there is no file
//! locking; the only torn-write hazard is a crash mid-write, which the
//! temp-file + atomic-rename sequence closes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{StorageError, StorageResult};

/// Durable key/value storage for store state.
///
/// ## Usage
/// ```rust,no_run
/// use shopfront_persist::SlotStorage;
///
/// let storage = SlotStorage::new("/var/lib/shopfront");
/// storage.write("theme", &true).ok();
/// let theme: Option<bool> = storage.read("theme");
/// ```
#[derive(Debug, Clone)]
pub struct SlotStorage {
    dir: PathBuf,
}

impl SlotStorage {
    /// Creates slot storage rooted at `dir`.
    ///
    /// The directory is created lazily on first write, so constructing
    /// storage over a missing path is fine.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SlotStorage { dir: dir.into() }
    }

    /// Returns the backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads a slot, degrading every failure to `None`.
    ///
    /// ## Behavior
    /// - Missing file: `None`, silently (first launch is not an anomaly)
    /// - Unreadable or corrupt file: `None`, with a `warn!` - the caller
    ///   falls back to its documented empty initial state
    pub fn read<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(slot, error = %err, "failed to read slot file, starting empty");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(slot, error = %err, "slot file is corrupt, starting empty");
                None
            }
        }
    }

    /// Writes a slot atomically.
    ///
    /// Serializes to `<slot>.json.tmp` and renames over `<slot>.json`, so a
    /// crash mid-write leaves the previous payload intact. Errors are
    /// returned for logging; callers must not roll back in-memory state on
    /// failure.
    pub fn write<T: Serialize>(&self, slot: &str, value: &T) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let payload =
            serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialize {
                slot: slot.to_string(),
                source,
            })?;

        let path = self.slot_path(slot);
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, payload).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;

        fs::rename(&tmp_path, &path).map_err(|source| StorageError::Io { path, source })
    }

    /// Deletes a slot. Missing files are fine.
    pub fn remove(&self, slot: &str) -> StorageResult<()> {
        let path = self.slot_path(slot);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: u32,
    }

    fn payload() -> Payload {
        Payload {
            name: "cart".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        storage.write("cart", &payload()).unwrap();
        let restored: Option<Payload> = storage.read("cart");

        assert_eq!(restored, Some(payload()));
    }

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        let restored: Option<Payload> = storage.read("cart");
        assert_eq!(restored, None);
    }

    #[test]
    fn test_corrupt_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        fs::write(dir.path().join("cart.json"), "{not json").unwrap();

        let restored: Option<Payload> = storage.read("cart");
        assert_eq!(restored, None);
    }

    #[test]
    fn test_wrong_shape_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        // Valid JSON, wrong shape
        fs::write(dir.path().join("cart.json"), "[1, 2, 3]").unwrap();

        let restored: Option<Payload> = storage.read("cart");
        assert_eq!(restored, None);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = SlotStorage::new(&nested);

        storage.write("theme", &true).unwrap();
        assert_eq!(storage.read::<bool>("theme"), Some(true));
    }

    #[test]
    fn test_overwrite_replaces_payload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        storage.write("cart", &payload()).unwrap();
        storage
            .write(
                "cart",
                &Payload {
                    name: "cart".to_string(),
                    count: 7,
                },
            )
            .unwrap();

        let restored: Option<Payload> = storage.read("cart");
        assert_eq!(restored.unwrap().count, 7);
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        storage.write("cart", &payload()).unwrap();
        assert!(!dir.path().join("cart.json.tmp").exists());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(dir.path());

        storage.write("cart", &payload()).unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.read::<Payload>("cart"), None);

        // Removing again is fine
        storage.remove("cart").unwrap();
    }
}
