//! # Checkout Validator
//!
//! Stateless validation and input-formatting rules for the payment and
//! shipping fields. Every function here is pure: raw field text in,
//! verdict (or reformatted text) out, no side effects.
//!
//! ## Validation Order
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                  Place Order — Gate Sequence                      │
//! │                                                                   │
//! │  1. Required fields (first blank field reported)                  │
//! │  2. Card number   — 16 digits + Luhn checksum                     │
//! │  3. Expiry        — MM/YY, month 01-12, not in the past           │
//! │  4. CVV           — length 3 or 4                                 │
//! │  5. Billing ZIP   — exactly 5 characters                          │
//! │  6. Shipping ZIP  — exactly 5 characters                          │
//! │  7. Empty cart    — distinct condition, checked last              │
//! │                                                                   │
//! │  Short-circuits on the FIRST failure.                             │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Display formatting (card masking, expiry auto-slash, auto-advance) is
//! separate from validation and lives in the `format_*` functions.

use chrono::{Datelike, NaiveDate};

use crate::error::{CheckoutError, ZipField};

/// A card number holds exactly this many significant digits.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Digits are displayed in groups of this size, space-separated.
const CARD_GROUP: usize = 4;

// =============================================================================
// Card Number
// =============================================================================

/// Extracts the contiguous card digits from raw field text.
///
/// All non-digit characters (spaces, dashes, anything) are stripped, and
/// the result is truncated to 16 digits.
pub fn card_digits(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CARD_NUMBER_DIGITS)
        .collect()
}

/// Luhn checksum over a digit string.
///
/// Traverses from the rightmost digit; every second digit (starting with
/// the second-from-right) is doubled, subtracting 9 when the double
/// exceeds 9. Valid iff the digit sum is a multiple of 10.
///
/// ```rust
/// use ace_core::checkout::luhn_valid;
///
/// assert!(luhn_valid("4242424242424242"));
/// assert!(!luhn_valid("4242424242424241"));
/// ```
pub fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;
    for c in digits.chars().rev() {
        let mut n = match c.to_digit(10) {
            Some(n) => n,
            None => return false,
        };
        if double {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }
        sum += n;
        double = !double;
    }
    sum % 10 == 0
}

/// Validates a card number field: exactly 16 digits AND Luhn-valid.
///
/// Formatting characters in the raw text are ignored; only the digit
/// content is judged.
pub fn validate_card_number(text: &str) -> Result<(), CheckoutError> {
    // Test numbers (non-PII): 4242 4242 4242 4242, 4111 1111 1111 1111,
    // 5555 5555 5555 4444, 6011 1111 1111 1117
    let pan = card_digits(text);
    if pan.len() != CARD_NUMBER_DIGITS {
        return Err(CheckoutError::CardNumberLength);
    }
    if !luhn_valid(&pan) {
        return Err(CheckoutError::CardNumberChecksum);
    }
    Ok(())
}

/// Result of reformatting the card-number field after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumberEdit {
    /// The masked text: digit groups of 4 joined by single spaces.
    pub text: String,

    /// Caret position, preserved relative to the new formatting.
    pub caret: usize,

    /// True exactly when focus should jump to the expiry field: the 16th
    /// digit was just typed (not deleted, not a mid-string edit) with the
    /// caret at the end of the field.
    pub advance_to_expiry: bool,
}

/// Reformats the card-number field after an edit.
///
/// Keeps at most 16 significant digits regardless of how many formatting
/// characters are present, and groups them as `#### #### #### ####`.
///
/// ## Auto-advance
/// Fires only when the text was already in canonical form when the 16th
/// digit landed — i.e. on forward typing at the end of the field. A
/// deletion (`deleting = true`) or an edit that forces a reformat never
/// advances, so focus is stolen at most once per completed number.
pub fn format_card_number(raw: &str, caret: usize, deleting: bool) -> CardNumberEdit {
    let digits = card_digits(raw);
    let formatted = digits
        .as_bytes()
        .chunks(CARD_GROUP)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");

    if raw == formatted {
        let advance =
            !deleting && digits.len() == CARD_NUMBER_DIGITS && caret == raw.chars().count();
        return CardNumberEdit {
            text: formatted,
            caret,
            advance_to_expiry: advance,
        };
    }

    // Preserve the caret relative to the new formatting
    let shift = formatted.chars().count() as isize - raw.chars().count() as isize;
    let new_caret = (caret as isize + shift).clamp(0, formatted.chars().count() as isize) as usize;
    CardNumberEdit {
        text: formatted,
        caret: new_caret,
        advance_to_expiry: false,
    }
}

// =============================================================================
// Expiry
// =============================================================================

/// Reformats the expiry field: digits only, at most 4, with `/` inserted
/// after the month. Output never exceeds 5 characters ("MM/YY").
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() <= 2 {
        digits
    } else {
        format!("{}/{}", &digits[..2], &digits[2..])
    }
}

/// Validates an MM/YY expiry against `today`.
///
/// Both parts must be exactly 2 digits and the month in [1,12]. The card
/// is expired iff `yy < currentYY`, or `yy == currentYY` and
/// `mm < currentMM`, where `currentYY` is today's 2-digit year.
///
/// Century rollover ("00" after "99") is intentionally not handled; the
/// comparison is over raw 2-digit years.
pub fn validate_expiry(text: &str, today: NaiveDate) -> Result<(), CheckoutError> {
    let mut parts = text.split('/');
    let (mm_text, yy_text) = match (parts.next(), parts.next(), parts.next()) {
        (Some(mm), Some(yy), None) => (mm, yy),
        _ => return Err(CheckoutError::ExpiryFormat),
    };
    if mm_text.len() != 2
        || yy_text.len() != 2
        || !mm_text.chars().all(|c| c.is_ascii_digit())
        || !yy_text.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CheckoutError::ExpiryFormat);
    }

    let mm: i32 = mm_text.parse().map_err(|_| CheckoutError::ExpiryFormat)?;
    let yy: i32 = yy_text.parse().map_err(|_| CheckoutError::ExpiryFormat)?;
    if !(1..=12).contains(&mm) {
        return Err(CheckoutError::ExpiryMonth);
    }

    let cur_yy = today.year().rem_euclid(100);
    let cur_mm = today.month() as i32;
    let expired = yy < cur_yy || (yy == cur_yy && mm < cur_mm);
    if expired {
        return Err(CheckoutError::CardExpired);
    }
    Ok(())
}

// =============================================================================
// CVV / ZIP
// =============================================================================

/// Validates CVV length: 3 or 4 characters. Length only — content is not
/// otherwise restricted by this check.
pub fn validate_cvv(text: &str) -> Result<(), CheckoutError> {
    match text.chars().count() {
        3 | 4 => Ok(()),
        _ => Err(CheckoutError::CvvLength),
    }
}

/// Validates a ZIP field: exactly 5 characters.
pub fn validate_zip(text: &str, field: ZipField) -> Result<(), CheckoutError> {
    if text.chars().count() == 5 {
        Ok(())
    } else {
        Err(CheckoutError::ZipLength { field })
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Raw field text collected by the checkout screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    // Payment
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub billing_zip: String,
    // Shipping
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub shipping_zip: String,
}

impl CheckoutForm {
    /// Required fields with their user-facing labels, in report order.
    fn required_fields(&self) -> [(&str, &str); 11] {
        [
            (&self.card_name, "Name"),
            (&self.card_number, "Card #"),
            (&self.expiry, "Expiry (MM/YY)"),
            (&self.cvv, "CCV"),
            (&self.billing_zip, "Billing Zip"),
            (&self.first_name, "First Name"),
            (&self.last_name, "Last Name"),
            (&self.address1, "Address"),
            (&self.city, "City"),
            (&self.state, "State"),
            (&self.shipping_zip, "Zip Code"),
        ]
    }

    /// Runs the full gate sequence, reporting the first failure.
    ///
    /// `cart_is_empty` feeds the distinct empty-cart condition, which is
    /// only reached when every field check passes.
    pub fn validate(&self, today: NaiveDate, cart_is_empty: bool) -> Result<(), CheckoutError> {
        for (value, label) in self.required_fields() {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField {
                    field: label.to_string(),
                });
            }
        }

        validate_card_number(&self.card_number)?;
        validate_expiry(&self.expiry, today)?;
        validate_cvv(&self.cvv)?;
        validate_zip(&self.billing_zip, ZipField::Billing)?;
        validate_zip(&self.shipping_zip, ZipField::Shipping)?;

        if cart_is_empty {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
