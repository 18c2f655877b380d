//! # shopfront-store: State Containers
//!
//! The stores the presentation layer talks to.
//!
//! ## Why Multiple Store Types?
//! Instead of a single `AppState` struct containing everything, each concern
//! gets its own container. This approach:
//!
//! 1. **Better Separation of Concerns**: Each store has a single responsibility
//! 2. **Easier Testing**: Stores can be constructed over throwaway slot dirs
//! 3. **Reduced Contention**: Cart mutations never block theme reads
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Architecture                                 │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                │
//! │  │  CartStore   │   │WishlistStore │   │  ThemeStore  │                │
//! │  │              │   │              │   │              │                │
//! │  │ Mutex<Cart>  │   │Mutex<        │   │ Mutex<       │                │
//! │  │ slot: "cart" │   │  Wishlist>   │   │  ThemePrefs> │                │
//! │  │ broadcast    │   │slot:"wishlist"│  │ slot: "theme"│                │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘                │
//! │         │                  │                  │                         │
//! │         └─────────┬────────┴──────────────────┘                         │
//! │                   ▼                                                     │
//! │           SlotStorage (shopfront-persist)                               │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • Mutations are serialized per store by its Mutex                      │
//! │  • Readers never observe a half-updated total/line-set                  │
//! │  • Subscribers get immutable snapshots over a broadcast channel         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;
pub mod theme;
pub mod wishlist;

pub use cart::{CartSnapshot, CartStore};
pub use checkout::{place_order, CheckoutError, OrderConfirmation, PAYMENT_PROCESSING_DELAY};
pub use theme::ThemeStore;
pub use wishlist::{WishlistSnapshot, WishlistStore};
