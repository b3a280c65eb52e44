//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in the Kiosk                      │
//! │                                                                   │
//! │  REPL input                 Command handler                       │
//! │  ──────────                 ───────────────                       │
//! │                                                                   │
//! │  add zz9 ─────────────────► CartError::UnknownItem ──┐            │
//! │                                                      ▼            │
//! │  checkout (bad expiry) ───► CheckoutError ────────► ApiError ───► │
//! │                                                      │            │
//! │                                                      ▼            │
//! │                             rendered as "Use MM/YY" etc.          │
//! │                                                                   │
//! │  Out-of-range cart indices never get here: they are no-ops        │
//! │  inside the Cart Store by design.                                 │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Serializable so a non-terminal frontend would receive both a
//! machine-readable `code` and a human-readable `message`.

use serde::Serialize;

use ace_core::{CartError, CheckoutError};

/// API error returned from kiosk commands.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested menu item does not exist.
    NotFound,

    /// A checkout field failed validation.
    ValidationError,

    /// Add-to-cart request referenced an option the item doesn't offer.
    CartError,

    /// Checkout attempted with an empty cart (distinct from field
    /// validation).
    EmptyCart,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match err {
            CartError::UnknownItem(_) => ErrorCode::NotFound,
            CartError::InvalidOption { .. } => ErrorCode::CartError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        let code = match err {
            CheckoutError::EmptyCart => ErrorCode::EmptyCart,
            _ => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}
