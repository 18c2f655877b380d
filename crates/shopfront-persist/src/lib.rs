//! # shopfront-persist: Durable Slot Storage
//!
//! This crate gives each store a named durable slot (`cart`, `wishlist`,
//! `theme`) backed by a JSON file.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Slot Storage Data Flow                             │
//! │                                                                         │
//! │  Startup                          Every mutation                        │
//! │  ───────                          ──────────────                        │
//! │                                                                         │
//! │  read("cart")                     write("cart", &cart)                  │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  <dir>/cart.json exists?          serialize to <dir>/cart.json.tmp     │
//! │   │yes          │no/corrupt            │                                │
//! │   ▼             ▼                      ▼                                │
//! │  Some(state)   None (+warn)       rename over <dir>/cart.json          │
//! │                                                                         │
//! │  A failed write is logged and reported - the in-memory state the       │
//! │  stores hold is NEVER rolled back because a disk write failed.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod slot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StorageError;
pub use slot::SlotStorage;
