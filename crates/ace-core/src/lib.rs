//! # ace-core: Pure Business Logic for the Ace Restaurant demo
//!
//! This crate is the heart of the ordering app: every rule that decides
//! what the cart costs, what a search returns, and whether a checkout may
//! proceed lives here as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                   Ace Restaurant Architecture                     │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐  │
//! │  │                 Kiosk UI (apps/kiosk REPL)                  │  │
//! │  │   Menu tabs ──► Item detail ──► Cart ──► Checkout ──► Done  │  │
//! │  └───────────────────────────────┬─────────────────────────────┘  │
//! │                                  │ commands                       │
//! │  ┌───────────────────────────────▼─────────────────────────────┐  │
//! │  │                 ★ ace-core (THIS CRATE) ★                   │  │
//! │  │                                                             │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐ ┌───────┐  │  │
//! │  │  │ catalog │ │ suggest │ │  cart  │ │ checkout │ │ order │  │  │
//! │  │  │ queries │ │ did-you │ │ merge/ │ │ Luhn,    │ │ id +  │  │  │
//! │  │  │ search  │ │ -mean   │ │ totals │ │ expiry…  │ │ ETA   │  │  │
//! │  │  └─────────┘ └─────────┘ └────────┘ └──────────┘ └───────┘  │  │
//! │  │                                                             │  │
//! │  │  NO I/O • NO CLOCK READS • NO TERMINAL • PURE FUNCTIONS     │  │
//! │  └─────────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu data models (Category, MenuItem, Menu)
//! - [`money`] - Integer-cents money and basis-point tax rates
//! - [`catalog`] - Read-only menu queries (filter, search, lookup)
//! - [`suggest`] - Levenshtein-based "did you mean" suggestions
//! - [`cart`] - Cart lines, merge semantics, derived totals
//! - [`checkout`] - Payment/shipping field validation and masking
//! - [`order`] - Order id, customer name, and ETA generation
//! - [`error`] - Typed domain errors
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output — "now" and the tax
//!    rate are parameters, never ambient state
//! 2. **Integer money**: all monetary values are cents (i64), no floats
//! 3. **Explicit errors**: typed enums, never strings or panics
//! 4. **Fail-safe catalog**: a broken menu asset degrades to empty, it
//!    never takes the app down

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod order;
pub mod suggest;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals, LineOptions};
pub use catalog::MenuCatalog;
pub use checkout::CheckoutForm;
pub use error::{CartError, CheckoutError};
pub use money::{Money, TaxRate};
pub use order::OrderConfirmation;
pub use types::{Category, Menu, MenuItem, ALL_CATEGORY_ID};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Demo tax rate: 7.00% in basis points.
///
/// A configuration point, not a contract — the kiosk overrides it via
/// `ACE_TAX_RATE_BPS`. Totals only need to be consistent between reads.
pub const DEFAULT_TAX_RATE_BPS: u32 = 700;

/// Prefix for generated order ids (`ACE-4827`).
pub const DEFAULT_ORDER_PREFIX: &str = "ACE";

/// Minutes added to the placement time for the delivery estimate.
pub const DEFAULT_ETA_MINUTES: i64 = 35;
