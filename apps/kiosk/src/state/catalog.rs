//! # Catalog State
//!
//! Loads the bundled menu asset into a read-only [`MenuCatalog`].
//!
//! ## Load Sequence
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  ACE_MENU_PATH set? ──yes──► read file ──ok──► parse              │
//! │        │                        │                                 │
//! │        no                   read failed (warn)                    │
//! │        ▼                        ▼                                 │
//! │  embedded data/menu.json ──────────────────────► parse            │
//! │                                                    │              │
//! │                                         parse failed (warn)       │
//! │                                                    ▼              │
//! │                                             empty catalog         │
//! │                                                                   │
//! │  The kiosk ALWAYS starts; a broken asset means an empty menu.     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use ace_core::MenuCatalog;

/// The menu asset compiled into the binary.
const BUNDLED_MENU: &str = include_str!("../../data/menu.json");

/// Environment variable naming an alternative menu asset file.
const MENU_PATH_VAR: &str = "ACE_MENU_PATH";

/// Read-only catalog state, loaded once at startup.
#[derive(Debug)]
pub struct CatalogState {
    catalog: MenuCatalog,
}

impl CatalogState {
    /// Loads the catalog, degrading to empty on any failure.
    pub fn load() -> Self {
        let json = match std::env::var(MENU_PATH_VAR) {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(contents) => {
                    info!(%path, "loading menu override");
                    contents
                }
                Err(err) => {
                    warn!(%path, %err, "menu override unreadable, using bundled asset");
                    BUNDLED_MENU.to_string()
                }
            },
            Err(_) => BUNDLED_MENU.to_string(),
        };
        Self::from_json(&json)
    }

    /// Parses catalog JSON, logging and degrading to empty on failure.
    pub fn from_json(json: &str) -> Self {
        let catalog = match MenuCatalog::try_from_json(json) {
            Ok(catalog) => {
                info!(items = catalog.item_count(), "menu catalog loaded");
                catalog
            }
            Err(err) => {
                warn!(%err, "menu asset malformed, starting with empty catalog");
                MenuCatalog::empty()
            }
        };
        CatalogState { catalog }
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }
}
