//! # Commands Module
//!
//! User-intent handlers at the presentation boundary.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── menu.rs      ◄─── Category tabs, item lists, search+suggestions
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Place-order gate
//! ```
//!
//! ## How Commands Work
//! The REPL (or any other frontend) translates user input into one call
//! per discrete intent. Each handler declares only the state it needs:
//!
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_menu(catalog: &CatalogState, category_id: &str, query: &str)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, req: AddToCartRequest)
//! ```
//!
//! Responses are `serde`-serializable snapshots, so a non-terminal
//! frontend could consume them unchanged.

pub mod cart;
pub mod checkout;
pub mod menu;
