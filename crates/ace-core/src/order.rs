//! # Order Finalizer
//!
//! Builds the confirmation values shown after a successful checkout.
//!
//! ## Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  CheckoutForm::validate ── Ok ──► finalize(form, now)             │
//! │                                        │                          │
//! │              ┌─────────────────────────┼─────────────────┐        │
//! │              ▼                         ▼                 ▼        │
//! │      customer_name              order id           ETA text       │
//! │      "Ada Lovelace"             "ACE-4827"         "19:42"        │
//! │      (fallback "Guest")         (PREFIX-NNNN)      (now + 35m)    │
//! │                                                                   │
//! │  The caller clears the Cart Store AFTER these values exist.       │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Order ids are demo-grade: a time-derived 4-digit suffix, collisions
//! acceptable. The `PREFIX-NNNN` shape is the contract, not uniqueness.

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutForm;

/// Fallback display name when both name fields are blank.
const GUEST_NAME: &str = "Guest";

/// Confirmation values for the thank-you screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Human-readable order identifier, e.g. `"ACE-4827"`.
    pub order_id: String,

    /// Customer display name, e.g. `"Ada Lovelace"` or `"Guest"`.
    pub customer_name: String,

    /// Estimated delivery time of day, formatted `HH:MM`.
    pub eta_text: String,
}

/// Joins the trimmed first and last names, skipping blank parts.
///
/// Falls back to `"Guest"` when both are blank.
pub fn build_customer_name(first: &str, last: &str) -> String {
    let name = [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        GUEST_NAME.to_string()
    } else {
        name
    }
}

/// Generates a readable order id: a fixed prefix plus a pseudo-random
/// 4-digit suffix derived from the placement time.
///
/// The suffix is `millis % 9000 + 1000`, so it is always in 1000-9999 —
/// four digits, never fewer.
pub fn generate_order_id<Tz: TimeZone>(prefix: &str, placed_at: &DateTime<Tz>) -> String {
    let n = placed_at.timestamp_millis().rem_euclid(9000) + 1000;
    format!("{prefix}-{n}")
}

/// Builds the confirmation for a validated checkout.
///
/// Pure: the placement time is an input, so the caller decides the clock.
/// Clearing the cart is the caller's job, done after this returns.
pub fn finalize<Tz: TimeZone>(
    form: &CheckoutForm,
    placed_at: DateTime<Tz>,
    prefix: &str,
    eta_minutes: i64,
) -> OrderConfirmation
where
    Tz::Offset: std::fmt::Display,
{
    let eta = placed_at.clone() + Duration::minutes(eta_minutes);
    OrderConfirmation {
        order_id: generate_order_id(prefix, &placed_at),
        customer_name: build_customer_name(&form.first_name, &form.last_name),
        eta_text: eta.format("%H:%M").to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_time(millis: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_build_customer_name() {
        assert_eq!(build_customer_name("Ada", "Lovelace"), "Ada Lovelace");
        assert_eq!(build_customer_name("  Ada  ", ""), "Ada");
        assert_eq!(build_customer_name("", "  Lovelace "), "Lovelace");
        assert_eq!(build_customer_name("   ", ""), "Guest");
    }

    #[test]
    fn test_order_id_shape() {
        // millis % 9000 + 1000 stays in 1000-9999
        assert_eq!(generate_order_id("ACE", &fixed_time(0)), "ACE-1000");
        assert_eq!(generate_order_id("ACE", &fixed_time(8999)), "ACE-9999");
        assert_eq!(generate_order_id("ACE", &fixed_time(9000)), "ACE-1000");
        assert_eq!(generate_order_id("ACE", &fixed_time(3827)), "ACE-4827");
    }

    #[test]
    fn test_order_id_always_four_digits() {
        for millis in [0, 1, 499, 4500, 8999, 123_456_789] {
            let id = generate_order_id("ACE", &fixed_time(millis));
            let suffix = id.strip_prefix("ACE-").unwrap();
            assert_eq!(suffix.len(), 4, "suffix {suffix} not 4 digits");
            let n: i64 = suffix.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_finalize_eta_offset() {
        let form = CheckoutForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..CheckoutForm::default()
        };
        // 2025-06-15 19:07 UTC
        let placed_at = DateTime::parse_from_rfc3339("2025-06-15T19:07:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let confirmation = finalize(&form, placed_at, "ACE", 35);
        assert_eq!(confirmation.customer_name, "Ada Lovelace");
        assert_eq!(confirmation.eta_text, "19:42");
        assert!(confirmation.order_id.starts_with("ACE-"));
    }

    #[test]
    fn test_finalize_eta_in_fixed_offset_zone() {
        // Non-UTC zone: the ETA renders in the caller's wall clock
        let placed_at = DateTime::parse_from_rfc3339("2025-06-15T19:07:00-05:00").unwrap();
        let confirmation = finalize(&CheckoutForm::default(), placed_at, "ACE", 35);
        assert_eq!(confirmation.eta_text, "19:42");
    }

    #[test]
    fn test_finalize_guest_fallback() {
        let confirmation = finalize(&CheckoutForm::default(), fixed_time(0), "ACE", 35);
        assert_eq!(confirmation.customer_name, "Guest");
    }
}
