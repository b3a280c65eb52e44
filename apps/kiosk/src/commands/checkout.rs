//! # Checkout Command
//!
//! The place-order gate: validate, finalize, clear.
//!
//! ## Sequence
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  place_order(form)                                                │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  CheckoutForm::validate(today, cart empty?) ── Err ──► ApiError   │
//! │        │ Ok                                                       │
//! │        ▼                                                          │
//! │  finalize(form, now) ──► { order id, customer name, ETA }         │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  cart.clear()   ◄── AFTER the confirmation values exist           │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  OrderConfirmation to the thank-you screen                        │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the order id is logged. Card fields never touch the log.

use chrono::Local;
use tracing::info;

use ace_core::{order, CheckoutForm, OrderConfirmation};

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

/// Validates the form and, on success, finalizes the order and clears
/// the cart.
pub fn place_order(
    cart: &CartState,
    config: &ConfigState,
    form: &CheckoutForm,
) -> Result<OrderConfirmation, ApiError> {
    let now = Local::now();
    let cart_is_empty = cart.with_cart(|c| c.is_empty());
    form.validate(now.date_naive(), cart_is_empty)?;

    let confirmation = order::finalize(form, now, &config.order_prefix, config.eta_minutes);

    // Clear only after the confirmation values are generated
    cart.with_cart_mut(|c| c.clear());
    info!(order_id = %confirmation.order_id, "order placed");

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, AddToCartRequest};
    use crate::error::ErrorCode;
    use crate::state::CatalogState;
    use ace_core::LineOptions;

    fn demo_catalog() -> CatalogState {
        CatalogState::from_json(
            r#"{
                "categories": [{ "id": "drinks", "title": "Drinks" }],
                "items": [{
                    "id": "dr2", "category": "drinks",
                    "name": "Fresh Lemonade", "priceCents": 1000,
                    "description": "Squeezed to order"
                }]
            }"#,
        )
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            card_name: "Ada Lovelace".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            // Far-future expiry keeps the test valid until 2099
            expiry: "12/99".to_string(),
            cvv: "123".to_string(),
            billing_zip: "60601".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address1: "1 Analytical Way".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            shipping_zip: "60601".to_string(),
        }
    }

    #[test]
    fn test_empty_cart_blocks_checkout() {
        let cart = CartState::new(ConfigState::default().tax_rate());
        let err = place_order(&cart, &ConfigState::default(), &valid_form()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_field_failure_reported_before_empty_cart() {
        let cart = CartState::new(ConfigState::default().tax_rate());
        let mut form = valid_form();
        form.cvv = "12".to_string();

        let err = place_order(&cart, &ConfigState::default(), &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "CVV must be 3\u{2013}4 digits");
    }

    #[test]
    fn test_successful_order_clears_cart() {
        let config = ConfigState::default();
        let catalog = demo_catalog();
        let cart = CartState::new(config.tax_rate());

        add_to_cart(
            &catalog,
            &cart,
            AddToCartRequest {
                item_id: "dr2".to_string(),
                quantity: 2,
                options: LineOptions::default(),
            },
        )
        .unwrap();
        assert_eq!(cart.totals().total_cents, 2140);

        let confirmation = place_order(&cart, &config, &valid_form()).unwrap();
        assert!(confirmation.order_id.starts_with("ACE-"));
        assert_eq!(confirmation.customer_name, "Ada Lovelace");
        assert!(cart.with_cart(|c| c.is_empty()));
    }
}
