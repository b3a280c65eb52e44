//! # Cart Store
//!
//! Ordered cart lines with merge semantics and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                     Cart Store Operations                         │
//! │                                                                   │
//! │  User Intent               Operation            State Change      │
//! │  ───────────               ─────────            ────────────      │
//! │                                                                   │
//! │  Add item ───────────────► add(line) ─────────► merge-or-append   │
//! │                                                                   │
//! │  Tap "+" ────────────────► increment(i) ──────► quantity += 1     │
//! │                                                                   │
//! │  Tap "−" ────────────────► decrement(i) ──────► max(1, qty - 1)   │
//! │                                                                   │
//! │  Swipe delete ───────────► remove_at(i) ──────► lines.remove(i)   │
//! │                                                                   │
//! │  Order placed ───────────► clear() ───────────► lines.clear()     │
//! │                                                                   │
//! │  NOTE: Out-of-range indices are no-ops, never errors.             │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two lines ever share an identity key (add merges instead)
//! - `quantity >= 1` always; decrement floors at 1, only `remove_at`
//!   drops a line
//! - Insertion order is preserved for display

use serde::{Deserialize, Serialize};

use crate::money::{Money, TaxRate};
use crate::types::MenuItem;

// =============================================================================
// Cart Line
// =============================================================================

/// Customization choices for a cart line (each single-select).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOptions {
    pub size: Option<String>,
    pub crust: Option<String>,
    pub topping: Option<String>,
    /// Free-text notes ("no onions").
    pub notes: Option<String>,
}

/// One line in the cart: a chosen item plus its customizations.
///
/// ## Design Notes
/// Name, price, and image are copied from the `MenuItem` at add time, not
/// live-linked: the cart keeps displaying consistent data regardless of
/// what happens to the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Menu item id this line was created from.
    pub item_id: String,

    /// Item name at add time (frozen).
    pub name: String,

    /// Base price at add time (frozen).
    pub unit_price: Money,

    /// Selected size, if the item offers sizes.
    pub selected_size: Option<String>,

    /// Selected crust, if the item offers crusts.
    pub selected_crust: Option<String>,

    /// Selected topping (single-select).
    pub selected_topping: Option<String>,

    /// Free-text notes.
    pub notes: Option<String>,

    /// Line quantity, always >= 1.
    pub quantity: i64,

    /// Image reference at add time (frozen).
    pub image: Option<String>,
}

impl CartLine {
    /// Creates a line from a catalog item, freezing its display data.
    ///
    /// Quantities below 1 are clamped to 1.
    pub fn from_item(item: &MenuItem, options: LineOptions, quantity: i64) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            selected_size: options.size,
            selected_crust: options.crust,
            selected_topping: options.topping,
            notes: options.notes,
            quantity: quantity.max(1),
            image: item.image.clone(),
        }
    }

    /// Total price for this line = base price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Identity key used for merging: (item id, size, crust, topping,
    /// notes), with absent and blank notes treated as equal. Notes are
    /// otherwise compared literally — no case or whitespace normalization.
    fn identity_key(&self) -> (&str, Option<&str>, Option<&str>, Option<&str>, &str) {
        (
            &self.item_id,
            self.selected_size.as_deref(),
            self.selected_crust.as_deref(),
            self.selected_topping.as_deref(),
            self.notes.as_deref().unwrap_or(""),
        )
    }

    /// Two lines are "the same line" when all five key fields match.
    fn merges_with(&self, other: &CartLine) -> bool {
        self.identity_key() == other.identity_key()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart: ordered lines plus the session's fixed tax rate.
///
/// Single-owner mutable value; all operations are synchronous. The owner
/// (one ordering session) passes it explicitly to whoever needs it.
///
/// Serialize-only: carts are built through [`Cart::add`] so the merge and
/// quantity invariants always hold, never deserialized from outside.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order (order is meaningful for display).
    lines: Vec<CartLine>,

    /// Fixed for the lifetime of the session.
    tax_rate: TaxRate,
}

impl Cart {
    /// Creates an empty cart with the given tax rate.
    pub fn new(tax_rate: TaxRate) -> Self {
        Cart {
            lines: Vec::new(),
            tax_rate,
        }
    }

    /// The session tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds a line, merging with an existing line that shares its
    /// identity key.
    ///
    /// On merge, only the quantity changes (summed); every other field is
    /// kept from the existing line. Otherwise the line is appended at the
    /// end. This can never produce two lines with the same key.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.merges_with(&line)) {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
            return;
        }
        self.lines.push(line);
    }

    /// Removes the line at `index`; no-op when out of bounds.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Increments the quantity of the line at `index`; no-op when out of
    /// bounds.
    pub fn increment(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrements the quantity of the line at `index`, never below 1;
    /// no-op when out of bounds.
    ///
    /// Reaching zero lines is only possible through `remove_at`.
    pub fn decrement(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = (line.quantity - 1).max(1);
        }
    }

    /// Empties the cart (explicit clear, or after order placement).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// True when the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not total quantity).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Subtotal = Σ(base price × quantity). Recomputed on every read.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Tax = subtotal × tax rate.
    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(self.tax_rate)
    }

    /// Total = subtotal + tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new(TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS))
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Snapshot of derived cart values for the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal().cents(),
            tax_cents: cart.tax().cents(),
            total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem {
            id: "pz1".to_string(),
            category: "entrees".to_string(),
            name: "Margherita Pizza".to_string(),
            price: Money::from_cents(1000), // $10.00
            image: None,
            description: "Tomato, mozzarella, basil".to_string(),
            sizes: Some(vec!["Small".to_string(), "Large".to_string()]),
            crusts: Some(vec!["Thin".to_string()]),
            toppings: Some(vec!["Mushroom".to_string(), "Pepperoni".to_string()]),
        }
    }

    fn line_with(topping: Option<&str>, notes: Option<&str>, qty: i64) -> CartLine {
        CartLine::from_item(
            &pizza(),
            LineOptions {
                size: Some("Large".to_string()),
                crust: Some("Thin".to_string()),
                topping: topping.map(str::to_string),
                notes: notes.map(str::to_string),
            },
            qty,
        )
    }

    #[test]
    fn test_extreme_quantity_never_wraps_negative() {
        // Quantity is only bounded below, so totals must saturate
        // instead of wrapping on absurd values
        let line = CartLine::from_item(&pizza(), LineOptions::default(), i64::MAX);
        assert!(line.line_total().cents() > 0);

        let mut cart = Cart::default();
        cart.add(line);
        cart.add(CartLine::from_item(&pizza(), LineOptions::default(), i64::MAX));
        cart.increment(0);

        assert_eq!(cart.lines()[0].quantity, i64::MAX);
        assert!(cart.subtotal().cents() > 0);
        assert!(cart.total().cents() > 0);
        assert!(cart.total_quantity() > 0);
    }

    #[test]
    fn test_add_merges_identical_lines() {
        let mut cart = Cart::default();
        cart.add(line_with(Some("Mushroom"), None, 1));
        cart.add(line_with(Some("Mushroom"), None, 2));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_add_different_topping_is_a_new_line() {
        let mut cart = Cart::default();
        cart.add(line_with(Some("Mushroom"), None, 1));
        cart.add(line_with(Some("Mushroom"), None, 1));
        cart.add(line_with(Some("Pepperoni"), None, 1));

        assert_eq!(cart.line_count(), 2);
        // Insertion order preserved
        assert_eq!(cart.lines()[0].selected_topping.as_deref(), Some("Mushroom"));
        assert_eq!(cart.lines()[1].selected_topping.as_deref(), Some("Pepperoni"));
    }

    #[test]
    fn test_absent_and_blank_notes_merge() {
        let mut cart = Cart::default();
        cart.add(line_with(None, None, 1));
        cart.add(line_with(None, Some(""), 1));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_notes_compared_literally() {
        let mut cart = Cart::default();
        cart.add(line_with(None, Some("no onions"), 1));
        cart.add(line_with(None, Some("No onions"), 1));
        cart.add(line_with(None, Some("no onions "), 1));

        // Case and trailing whitespace differ, so three separate lines
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::default();
        cart.add(line_with(None, None, 1));

        cart.decrement(0);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.line_count(), 1);

        cart.increment(0);
        assert_eq!(cart.lines()[0].quantity, 2);
        cart.decrement(0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_out_of_range_indices_are_no_ops() {
        let mut cart = Cart::default();
        cart.add(line_with(None, None, 2));

        cart.remove_at(5);
        cart.increment(5);
        cart.decrement(5);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_remove_at_shifts_indices() {
        let mut cart = Cart::default();
        cart.add(line_with(Some("Mushroom"), None, 1));
        cart.add(line_with(Some("Pepperoni"), None, 1));

        cart.remove_at(0);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].selected_topping.as_deref(), Some("Pepperoni"));
    }

    #[test]
    fn test_totals_at_demo_rate() {
        // $10.00 item ×2 → subtotal $20.00, tax $1.40, total $21.40
        let mut cart = Cart::new(TaxRate::from_bps(700));
        cart.add(line_with(None, None, 2));

        assert_eq!(cart.subtotal().cents(), 2000);
        assert_eq!(cart.tax().cents(), 140);
        assert_eq!(cart.total().cents(), 2140);
    }

    #[test]
    fn test_total_identity_holds_after_every_mutation() {
        let mut cart = Cart::new(TaxRate::from_bps(700));
        let check = |cart: &Cart| {
            assert_eq!(
                cart.total().cents(),
                (cart.subtotal() + cart.subtotal().calculate_tax(cart.tax_rate())).cents()
            );
        };

        check(&cart);
        cart.add(line_with(Some("Mushroom"), None, 1));
        check(&cart);
        cart.add(line_with(Some("Pepperoni"), Some("extra crispy"), 3));
        check(&cart);
        cart.increment(0);
        check(&cart);
        cart.decrement(1);
        check(&cart);
        cart.remove_at(0);
        check(&cart);
        cart.clear();
        check(&cart);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_item_clamps_quantity() {
        let line = CartLine::from_item(&pizza(), LineOptions::default(), 0);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_cart_totals_snapshot() {
        let mut cart = Cart::new(TaxRate::from_bps(700));
        cart.add(line_with(None, None, 2));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_cents, 2000);
        assert_eq!(totals.tax_cents, 140);
        assert_eq!(totals.total_cents, 2140);
    }
}
