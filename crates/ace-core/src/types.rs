//! # Domain Types
//!
//! Menu data models shared by the catalog, cart, and presentation boundary.
//!
//! ## Type Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                          Menu Models                              │
//! │                                                                   │
//! │  ┌─────────────────┐   ┌───────────────────────────────────────┐  │
//! │  │    Category     │   │              MenuItem                 │  │
//! │  │  ─────────────  │   │  ───────────────────────────────────  │  │
//! │  │  id             │◄──│  category (matched case-insensitive)  │  │
//! │  │  title          │   │  id / name / price / description      │  │
//! │  └─────────────────┘   │  sizes / crusts / toppings (options)  │  │
//! │                        └───────────────────────────────────────┘  │
//! │                                                                   │
//! │  Menu = { categories, items }  — the bundled JSON asset shape     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are plain `serde` models, immutable once parsed. The category
//! id `"all"` is reserved as a synthetic aggregate view and never appears
//! as a real category in the asset.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Reserved category id for the synthetic "every item" view.
pub const ALL_CATEGORY_ID: &str = "all";

// =============================================================================
// Category
// =============================================================================

/// A menu category (e.g., "entrees").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable identifier referenced by `MenuItem::category`.
    pub id: String,

    /// Display title shown as the tab label.
    pub title: String,
}

// =============================================================================
// Menu Item
// =============================================================================

/// An individual menu item.
///
/// The optional lists drive which option choices the detail view offers:
/// an item with `sizes: None` has no size selector at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier (unique across the whole catalog).
    pub id: String,

    /// Category identifier; compared case-insensitively against
    /// `Category::id`.
    pub category: String,

    /// Display name, also the input to the suggestion engine.
    pub name: String,

    /// Base price in cents (frozen into the cart line at add time).
    #[serde(rename = "priceCents")]
    pub price: Money,

    /// Asset-relative image reference, e.g. `"image/pizza_margherita"`.
    #[serde(default)]
    pub image: Option<String>,

    /// Searchable description text.
    pub description: String,

    /// Size option labels, e.g. `["Small", "Medium", "Large"]`.
    #[serde(default)]
    pub sizes: Option<Vec<String>>,

    /// Crust option labels, e.g. `["Thin", "Hand-tossed", "Deep dish"]`.
    #[serde(default)]
    pub crusts: Option<Vec<String>>,

    /// Topping option labels (single-select).
    #[serde(default)]
    pub toppings: Option<Vec<String>>,
}

// =============================================================================
// Menu
// =============================================================================

/// Root model for the bundled menu asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Ordered categories (insertion order is tab order).
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Every item, across all categories.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================
