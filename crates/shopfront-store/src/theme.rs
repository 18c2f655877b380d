//! # Theme Store
//!
//! A single persisted flag: dark mode on or off. The visual effect lives
//! wherever the flag is consumed; this store only owns the flag semantics.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use shopfront_persist::SlotStorage;

/// Durable slot name for the theme preference.
pub const THEME_SLOT: &str = "theme";

const EVENT_CAPACITY: usize = 4;

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemePrefs {
    is_dark: bool,
}

/// The persistent theme preference container.
///
/// Light theme is the default for first launches and for unreadable slots.
#[derive(Debug)]
pub struct ThemeStore {
    prefs: Mutex<ThemePrefs>,
    storage: SlotStorage,
    events: broadcast::Sender<bool>,
}

impl ThemeStore {
    /// Creates the store, rehydrating from the `theme` slot.
    pub fn load(storage: SlotStorage) -> Self {
        let prefs: ThemePrefs = storage.read(THEME_SLOT).unwrap_or_default();

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        ThemeStore {
            prefs: Mutex::new(prefs),
            storage,
            events,
        }
    }

    /// Subscribes to flag changes. Each message is the new `is_dark` value.
    pub fn subscribe(&self) -> broadcast::Receiver<bool> {
        self.events.subscribe()
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        self.mutate(|prefs| prefs.is_dark = !prefs.is_dark)
    }

    /// Sets the flag to an absolute value.
    pub fn set(&self, is_dark: bool) -> bool {
        self.mutate(|prefs| prefs.is_dark = is_dark)
    }

    /// Current flag value.
    pub fn is_dark(&self) -> bool {
        self.prefs.lock().expect("theme mutex poisoned").is_dark
    }

    fn mutate<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut ThemePrefs),
    {
        let is_dark = {
            let mut prefs = self.prefs.lock().expect("theme mutex poisoned");
            f(&mut prefs);
            debug!(is_dark = prefs.is_dark, "theme updated");

            if let Err(err) = self.storage.write(THEME_SLOT, &*prefs) {
                warn!(error = %err, "theme slot write failed; in-memory state kept");
            }

            prefs.is_dark
        };

        let _ = self.events.send(is_dark);
        is_dark
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
