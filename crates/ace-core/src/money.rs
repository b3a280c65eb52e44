//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                       │
//! │                                                                   │
//! │  In floating point:                                               │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                     │
//! │                                                                   │
//! │  A cart full of $X.99 items accumulates that error line by line.  │
//! │                                                                   │
//! │  OUR SOLUTION: Integer Cents                                      │
//! │    $10.99 is 1099. Addition and quantity math are exact.          │
//! │    Rounding happens in exactly one place: tax calculation.        │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ace_core::money::{Money, TaxRate};
//!
//! let price = Money::from_cents(1000);      // $10.00
//! let line = price.multiply_quantity(2);    // $20.00
//! let tax = line.calculate_tax(TaxRate::from_bps(700)); // 7% = $1.40
//! assert_eq!((line + tax).cents(), 2140);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 700 bps = 7.00% — the demo's
/// "tax & fees" rate. Integer bps keep the tax formula float-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for any realistic cart, and subtraction
///   stays closed under the type
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde transparent over cents**: the menu asset stores `priceCents`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use ace_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// Saturates at the `i64` bounds rather than wrapping, so an absurd
    /// quantity pins the total instead of going negative.
    ///
    /// ```rust
    /// use ace_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Calculates tax on this amount, rounding half away from zero.
    ///
    /// ## Implementation
    /// Integer math only: `(cents * bps + 5000) / 10000`. The +5000 is
    /// half of the bps denominator, which rounds the result.
    ///
    /// ```rust
    /// use ace_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(2000);          // $20.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(700));
    /// assert_eq!(tax.cents(), 140);                    // $1.40
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 intermediate prevents overflow on large subtotals
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders money as `$D.CC` for the terminal UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        // A runaway quantity pins at i64::MAX instead of wrapping negative
        let unit_price = Money::from_cents(1000);
        let total = unit_price.multiply_quantity(i64::MAX);
        assert_eq!(total.cents(), i64::MAX);
        assert!(total.cents() > 0);

        // Summing saturated lines stays pinned too
        assert_eq!((total + total).cents(), i64::MAX);
    }

    #[test]
    fn test_tax_at_demo_rate() {
        // $20.00 at 7% = $1.40, exact
        let subtotal = Money::from_cents(2000);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(700));
        assert_eq!(tax.cents(), 140);
    }

    #[test]
    fn test_tax_rounding() {
        // $10.99 at 7% = $0.7693 → $0.77
        let subtotal = Money::from_cents(1099);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(700));
        assert_eq!(tax.cents(), 77);

        // Zero rate, zero tax
        assert_eq!(subtotal.calculate_tax(TaxRate::zero()).cents(), 0);
    }

    #[test]
    fn test_tax_rate_percentage() {
        assert_eq!(TaxRate::from_bps(700).percentage(), 7.0);
        assert_eq!(TaxRate::from_bps(825).bps(), 825);
    }

    #[test]
    fn test_serde_transparent() {
        // Money serializes as a bare integer for the menu asset
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("1099").unwrap();
        assert_eq!(back.cents(), 1099);
    }
}
