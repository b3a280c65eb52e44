//! # State Module
//!
//! Session state for the kiosk.
//!
//! ## Why Multiple State Types?
//! Instead of one `AppState` struct containing everything, each concern
//! gets its own type:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                          │
//! │                                                                   │
//! │  ┌───────────────┐  ┌────────────────┐  ┌──────────────────────┐  │
//! │  │ CatalogState  │  │   CartState    │  │     ConfigState      │  │
//! │  │               │  │                │  │                      │  │
//! │  │  MenuCatalog  │  │  Arc<Mutex<    │  │  tax_rate_bps        │  │
//! │  │  (read-only,  │  │    Cart>> +    │  │  order_prefix        │  │
//! │  │   fail-safe   │  │  watch totals  │  │  eta_minutes         │  │
//! │  │   load)       │  │  channel       │  │  search_debounce_ms  │  │
//! │  └───────────────┘  └────────────────┘  └──────────────────────┘  │
//! │                                                                   │
//! │  THREAD SAFETY:                                                   │
//! │  • CatalogState: immutable after load                             │
//! │  • CartState: Mutex for exclusive access, watch for observers     │
//! │  • ConfigState: read-only after startup                           │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command handler declares exactly the state it needs.

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
