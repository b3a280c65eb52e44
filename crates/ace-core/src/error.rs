//! # Error Types
//!
//! Domain-specific error types for ace-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                          Error Types                              │
//! │                                                                   │
//! │  ace-core errors (this file)                                      │
//! │  ├── CartError      - add-to-cart failures (unknown item, bad     │
//! │  │                    option choice)                              │
//! │  └── CheckoutError  - per-field validation verdicts + empty cart  │
//! │                                                                   │
//! │  kiosk errors (app crate)                                         │
//! │  └── ApiError       - what the presentation boundary sees         │
//! │                                                                   │
//! │  Flow: CheckoutError / CartError → ApiError → UI                  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never bare Strings
//! 3. Every variant maps to a user-facing, user-correctable message
//! 4. Nothing here is fatal: out-of-range cart indices are no-ops at the
//!    cart layer and never reach these types

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Errors raised when resolving an add-to-cart request against the catalog.
///
/// Index-based cart mutations (remove/increment/decrement) deliberately do
/// NOT error on bad indices; those are defined as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested item id does not exist in the catalog.
    #[error("Menu item not found: {0}")]
    UnknownItem(String),

    /// A selected option is not offered by the item.
    ///
    /// `kind` is "size", "crust", or "topping".
    #[error("{item} has no {kind} option '{choice}'")]
    InvalidOption {
        item: String,
        kind: &'static str,
        choice: String,
    },
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Which ZIP field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipField {
    Billing,
    Shipping,
}

impl ZipField {
    /// User-facing label for the field.
    pub const fn label(&self) -> &'static str {
        match self {
            ZipField::Billing => "Billing Zip",
            ZipField::Shipping => "Zip Code",
        }
    }
}

/// Per-field checkout validation verdicts.
///
/// `CheckoutForm::validate` reports the FIRST failure it finds, in the
/// fixed order: required fields, card number, expiry, CVV, ZIPs, then the
/// distinct empty-cart condition. All are recoverable by user correction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A required field is blank or whitespace-only.
    #[error("{field} required")]
    MissingField { field: String },

    /// Card number does not contain exactly 16 digits.
    #[error("Card number must be 16 digits")]
    CardNumberLength,

    /// Card number fails the Luhn checksum.
    #[error("Invalid card number")]
    CardNumberChecksum,

    /// Expiry is not two 2-digit parts separated by '/'.
    #[error("Use MM/YY")]
    ExpiryFormat,

    /// Expiry month is outside 01-12.
    #[error("Month 01\u{2013}12")]
    ExpiryMonth,

    /// Expiry (year, month) is strictly before the current (year, month).
    #[error("Card expired")]
    CardExpired,

    /// CVV is not 3 or 4 characters long.
    #[error("CVV must be 3\u{2013}4 digits")]
    CvvLength,

    /// A ZIP field is not exactly 5 characters.
    #[error("5-digit ZIP required for {}", .field.label())]
    ZipLength { field: ZipField },

    /// All fields pass but there is nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_messages() {
        let err = CartError::UnknownItem("pz9".to_string());
        assert_eq!(err.to_string(), "Menu item not found: pz9");

        let err = CartError::InvalidOption {
            item: "Margherita Pizza".to_string(),
            kind: "crust",
            choice: "Stuffed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Margherita Pizza has no crust option 'Stuffed'"
        );
    }

    #[test]
    fn test_checkout_error_messages() {
        let err = CheckoutError::MissingField {
            field: "First Name".to_string(),
        };
        assert_eq!(err.to_string(), "First Name required");

        assert_eq!(
            CheckoutError::ZipLength { field: ZipField::Billing }.to_string(),
            "5-digit ZIP required for Billing Zip"
        );
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Your cart is empty");
    }
}
