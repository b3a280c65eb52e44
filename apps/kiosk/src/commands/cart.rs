//! # Cart Commands
//!
//! Cart manipulation for the presentation boundary.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Cart Lifecycle                             │
//! │                                                                   │
//! │  ┌─────────┐      ┌──────────┐      ┌──────────┐     ┌─────────┐  │
//! │  │  Empty  │─────►│  Lines   │─────►│ Checkout │────►│ Placed  │  │
//! │  │  Cart   │      │ in cart  │      │  screen  │     │  Order  │  │
//! │  └─────────┘      └──────────┘      └──────────┘     └─────────┘  │
//! │       ▲                │                                  │       │
//! │       │           add_to_cart                             │       │
//! │       │           remove_line / increment / decrement     │       │
//! │       │                                                   │       │
//! │       └──────────────── clear_cart ◄──────────────────────┘       │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command returns the refreshed `CartResponse` so the UI
//! re-renders lines and totals from one consistent snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ace_core::{CartError, CartLine, CartTotals, LineOptions, MenuItem};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart contents plus derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn snapshot(cart: &CartState) -> Self {
        cart.with_cart(|c| CartResponse {
            lines: c.lines().to_vec(),
            totals: CartTotals::from(c),
        })
    }
}

/// An add-to-cart intent from the detail view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub options: LineOptions,
}

fn default_quantity() -> i64 {
    1
}

/// Gets the current cart contents and totals.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::snapshot(cart)
}

/// Checks a selected option against the item's offered labels.
fn check_option(
    item: &MenuItem,
    kind: &'static str,
    offered: Option<&Vec<String>>,
    choice: Option<&String>,
) -> Result<(), CartError> {
    let Some(choice) = choice else { return Ok(()) };
    let offers = offered.map(|labels| labels.iter().any(|l| l == choice));
    if offers != Some(true) {
        return Err(CartError::InvalidOption {
            item: item.name.clone(),
            kind,
            choice: choice.clone(),
        });
    }
    Ok(())
}

/// Adds an item to the cart, merging with an existing line when the
/// identity key (item, size, crust, topping, notes) matches.
///
/// The item id must exist in the catalog and each selected option must be
/// one the item actually offers; price and display data are frozen into
/// the line at this moment.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    request: AddToCartRequest,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %request.item_id, quantity = request.quantity, "add_to_cart command");

    let item = catalog
        .catalog()
        .find_by_id(&request.item_id)
        .ok_or_else(|| CartError::UnknownItem(request.item_id.clone()))?;

    check_option(item, "size", item.sizes.as_ref(), request.options.size.as_ref())?;
    check_option(item, "crust", item.crusts.as_ref(), request.options.crust.as_ref())?;
    check_option(
        item,
        "topping",
        item.toppings.as_ref(),
        request.options.topping.as_ref(),
    )?;

    let line = CartLine::from_item(item, request.options, request.quantity);
    cart.with_cart_mut(|c| c.add(line));
    Ok(CartResponse::snapshot(cart))
}

/// Removes the line at `index`. Out-of-range indices are a no-op.
pub fn remove_line(cart: &CartState, index: usize) -> CartResponse {
    debug!(index, "remove_line command");
    cart.with_cart_mut(|c| c.remove_at(index));
    CartResponse::snapshot(cart)
}

/// Increments the quantity of the line at `index` (no-op out of range).
pub fn increment_line(cart: &CartState, index: usize) -> CartResponse {
    debug!(index, "increment_line command");
    cart.with_cart_mut(|c| c.increment(index));
    CartResponse::snapshot(cart)
}

/// Decrements the quantity of the line at `index`, flooring at 1
/// (no-op out of range).
pub fn decrement_line(cart: &CartState, index: usize) -> CartResponse {
    debug!(index, "decrement_line command");
    cart.with_cart_mut(|c| c.decrement(index));
    CartResponse::snapshot(cart)
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| c.clear());
    CartResponse::snapshot(cart)
}
