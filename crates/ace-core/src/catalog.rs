//! # Menu Catalog
//!
//! Read-only query surface over the parsed menu asset.
//!
//! ## Query Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       Catalog Queries                             │
//! │                                                                   │
//! │  JSON asset ──► MenuCatalog::from_json (fail-safe)                │
//! │                       │                                           │
//! │      ┌────────────────┼──────────────────┐                        │
//! │      ▼                ▼                  ▼                        │
//! │  categories()    items_for(cat)     find_by_id(id)                │
//! │                       │                                           │
//! │                       ▼                                           │
//! │                  search(cat, query)                               │
//! │                  (substring match on name OR description)         │
//! │                                                                   │
//! │  Zero matches on a non-blank query? The caller consults the       │
//! │  suggestion engine (suggest module) for "did you mean" names.     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed or missing asset never surfaces as an error: the catalog
//! degrades to empty categories and items, and every query returns empty
//! results.

use crate::types::{Category, Menu, MenuItem, ALL_CATEGORY_ID};

/// Static, in-memory menu catalog.
///
/// Items and categories are immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    menu: Menu,
}

impl MenuCatalog {
    /// Creates a catalog from an already-parsed menu.
    pub fn new(menu: Menu) -> Self {
        MenuCatalog { menu }
    }

    /// An empty catalog (the fail-safe default).
    pub fn empty() -> Self {
        MenuCatalog::default()
    }

    /// Parses the JSON asset, surfacing the parse error to the caller.
    ///
    /// Use this at the app boundary when the failure should be logged
    /// before degrading; use [`MenuCatalog::from_json`] everywhere else.
    pub fn try_from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Menu>(json).map(MenuCatalog::new)
    }

    /// Parses the JSON asset, degrading to an empty catalog on failure.
    ///
    /// Load failure is recovered locally and never propagates: a demo app
    /// with a broken asset starts with an empty menu rather than crashing.
    pub fn from_json(json: &str) -> Self {
        Self::try_from_json(json).unwrap_or_default()
    }

    /// All categories, in asset order.
    pub fn categories(&self) -> &[Category] {
        &self.menu.categories
    }

    /// True when the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.menu.items.is_empty()
    }

    /// Number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.menu.items.len()
    }

    /// Every item regardless of category.
    pub fn all_items(&self) -> &[MenuItem] {
        &self.menu.items
    }

    /// Items for a given category.
    ///
    /// - Pass `"all"` (any case) to get every item.
    /// - Category comparison is case-insensitive.
    pub fn items_for(&self, category_id: &str) -> Vec<&MenuItem> {
        if category_id.eq_ignore_ascii_case(ALL_CATEGORY_ID) {
            self.menu.items.iter().collect()
        } else {
            self.menu
                .items
                .iter()
                .filter(|item| item.category.eq_ignore_ascii_case(category_id))
                .collect()
        }
    }

    /// Case-insensitive search of item name/description within a category.
    ///
    /// A blank (or whitespace-only) query returns the category's full item
    /// set unchanged. Use `category_id = "all"` to search the entire menu.
    pub fn search(&self, category_id: &str, query: &str) -> Vec<&MenuItem> {
        let base = self.items_for(category_id);
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return base;
        }
        base.into_iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Finds an item by id (used by the detail view and add-to-cart).
    ///
    /// First match across the full catalog; ids are expected to be unique.
    pub fn find_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.menu.items.iter().find(|item| item.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn test_item(id: &str, category: &str, name: &str, description: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            price: Money::from_cents(1000),
            image: None,
            description: description.to_string(),
            sizes: None,
            crusts: None,
            toppings: None,
        }
    }

    fn test_catalog() -> MenuCatalog {
        MenuCatalog::new(Menu {
            categories: vec![
                Category {
                    id: "appetizers".to_string(),
                    title: "Appetizers".to_string(),
                },
                Category {
                    id: "entrees".to_string(),
                    title: "Entrees".to_string(),
                },
            ],
            items: vec![
                test_item("ap1", "appetizers", "Garlic Bread", "Toasted with herb butter"),
                test_item("en1", "entrees", "Margherita Pizza", "Tomato, mozzarella, basil"),
                test_item("en2", "Entrees", "Lasagna", "Layered pasta with ragu"),
            ],
        })
    }

    #[test]
    fn test_items_for_category_case_insensitive() {
        let catalog = test_catalog();

        // Item category "Entrees" matches query "entrees" and vice versa
        let entrees = catalog.items_for("ENTREES");
        assert_eq!(entrees.len(), 2);

        let appetizers = catalog.items_for("appetizers");
        assert_eq!(appetizers.len(), 1);
        assert_eq!(appetizers[0].id, "ap1");
    }

    #[test]
    fn test_items_for_all_returns_everything() {
        let catalog = test_catalog();
        assert_eq!(catalog.items_for("all").len(), 3);
        assert_eq!(catalog.items_for("All").len(), 3);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let catalog = test_catalog();

        let by_name = catalog.search("all", "pizza");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Margherita Pizza");

        let by_description = catalog.search("all", "RAGU");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "en2");
    }

    #[test]
    fn test_search_blank_query_returns_restricted_set() {
        let catalog = test_catalog();
        assert_eq!(catalog.search("entrees", "   ").len(), 2);
        assert_eq!(catalog.search("all", "").len(), 3);
    }

    #[test]
    fn test_search_respects_category_restriction() {
        let catalog = test_catalog();
        // "Garlic Bread" is an appetizer; searching entrees misses it
        assert!(catalog.search("entrees", "garlic").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = test_catalog();
        assert_eq!(catalog.find_by_id("en1").unwrap().name, "Margherita Pizza");
        assert!(catalog.find_by_id("nope").is_none());
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        let catalog = MenuCatalog::from_json("{ not json");
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.items_for("all").is_empty());

        assert!(MenuCatalog::try_from_json("{ not json").is_err());
    }

    #[test]
    fn test_valid_json_round_trip() {
        let json = r#"{
            "categories": [{ "id": "drinks", "title": "Drinks" }],
            "items": [{
                "id": "dr1",
                "category": "drinks",
                "name": "Lemonade",
                "priceCents": 350,
                "description": "Fresh squeezed"
            }]
        }"#;
        let catalog = MenuCatalog::from_json(json);
        assert_eq!(catalog.item_count(), 1);
        assert_eq!(catalog.find_by_id("dr1").unwrap().price.cents(), 350);
    }
}
