//! # Menu Commands
//!
//! Read-only menu queries for the presentation boundary.
//!
//! ## Search Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  search_menu("all", "piza")                                       │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  catalog.search ──► matches? ──yes──► { items, suggestions: [] }  │
//! │                        │                                          │
//! │                        no (and query non-blank)                   │
//! │                        ▼                                          │
//! │  suggest(query, all items) ──► { items: [], suggestions: ≤3 }     │
//! │                                                                   │
//! │  The UI renders suggestions as "Did you mean: …?"                 │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use ace_core::{suggest, CartError, Category, MenuItem};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Title of the synthetic aggregate tab.
const ALL_TAB_TITLE: &str = "All";

/// Search results plus near-match suggestions for the empty case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<MenuItem>,
    pub suggestions: Vec<String>,
}

/// Lists categories for the tab bar, with the synthetic "All" tab first.
///
/// An empty catalog yields no tabs at all (no lone "All" over nothing).
pub fn list_categories(catalog: &CatalogState) -> Vec<Category> {
    let loaded = catalog.catalog().categories();
    if loaded.is_empty() {
        return Vec::new();
    }
    let mut categories = Vec::with_capacity(loaded.len() + 1);
    categories.push(Category {
        id: ace_core::ALL_CATEGORY_ID.to_string(),
        title: ALL_TAB_TITLE.to_string(),
    });
    categories.extend(loaded.iter().cloned());
    categories
}

/// Lists the items of one category (or all of them for `"all"`).
pub fn list_items(catalog: &CatalogState, category_id: &str) -> Vec<MenuItem> {
    debug!(%category_id, "list_items command");
    catalog
        .catalog()
        .items_for(category_id)
        .into_iter()
        .cloned()
        .collect()
}

/// Looks up a single item for the detail view.
pub fn get_item(catalog: &CatalogState, id: &str) -> Result<MenuItem, ApiError> {
    catalog
        .catalog()
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| CartError::UnknownItem(id.to_string()).into())
}

/// Searches a category, falling back to suggestions on zero matches.
///
/// Suggestions are computed from the FULL catalog regardless of the
/// searched category, and only for a non-blank query.
pub fn search_menu(catalog: &CatalogState, category_id: &str, query: &str) -> SearchResponse {
    debug!(%category_id, %query, "search_menu command");
    let catalog = catalog.catalog();
    let items: Vec<MenuItem> = catalog
        .search(category_id, query)
        .into_iter()
        .cloned()
        .collect();

    let suggestions = if items.is_empty() && !query.trim().is_empty() {
        suggest::suggest(query, catalog.all_items())
    } else {
        Vec::new()
    };

    SearchResponse { items, suggestions }
}
