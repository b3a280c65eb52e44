//! # Configuration State
//!
//! Session configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ACE_*`)
//! 2. Defaults (this file + ace-core constants)
//!
//! ## Thread Safety
//! Read-only after initialization, so no lock is needed.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use ace_core::{TaxRate, DEFAULT_ETA_MINUTES, DEFAULT_ORDER_PREFIX, DEFAULT_TAX_RATE_BPS};

/// Default debounce delay between the last keystroke and a search run.
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 250;

/// Session configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Tax rate in basis points (700 = 7.00%).
    pub tax_rate_bps: u32,

    /// Prefix for generated order ids.
    pub order_prefix: String,

    /// Minutes added to the placement time for the delivery estimate.
    pub eta_minutes: i64,

    /// Debounce delay for search input, in milliseconds.
    pub search_debounce_ms: u64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
            eta_minutes: DEFAULT_ETA_MINUTES,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl ConfigState {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    ///
    /// Separated from `from_env` so tests can inject variables without
    /// mutating process state. Unparseable values are logged and ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("ACE_TAX_RATE_BPS") {
            match raw.parse::<u32>() {
                Ok(bps) => config.tax_rate_bps = bps,
                Err(_) => warn!(value = %raw, "ignoring invalid ACE_TAX_RATE_BPS"),
            }
        }
        if let Some(prefix) = lookup("ACE_ORDER_PREFIX") {
            if !prefix.trim().is_empty() {
                config.order_prefix = prefix.trim().to_string();
            }
        }
        if let Some(raw) = lookup("ACE_ETA_MINUTES") {
            match raw.parse::<i64>() {
                Ok(minutes) if minutes >= 0 => config.eta_minutes = minutes,
                _ => warn!(value = %raw, "ignoring invalid ACE_ETA_MINUTES"),
            }
        }
        if let Some(raw) = lookup("ACE_SEARCH_DEBOUNCE_MS") {
            match raw.parse::<u64>() {
                Ok(ms) => config.search_debounce_ms = ms,
                Err(_) => warn!(value = %raw, "ignoring invalid ACE_SEARCH_DEBOUNCE_MS"),
            }
        }

        config
    }

    /// The session tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// The search debounce delay.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.tax_rate_bps, 700);
        assert_eq!(config.order_prefix, "ACE");
        assert_eq!(config.eta_minutes, 35);
        assert_eq!(config.tax_rate().bps(), 700);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_vars(|name| match name {
            "ACE_TAX_RATE_BPS" => Some("825".to_string()),
            "ACE_ORDER_PREFIX" => Some("DEMO".to_string()),
            "ACE_SEARCH_DEBOUNCE_MS" => Some("100".to_string()),
            _ => None,
        });
        assert_eq!(config.tax_rate_bps, 825);
        assert_eq!(config.order_prefix, "DEMO");
        assert_eq!(config.eta_minutes, 35); // untouched default
        assert_eq!(config.search_debounce(), Duration::from_millis(100));
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = ConfigState::from_vars(|name| match name {
            "ACE_TAX_RATE_BPS" => Some("seven".to_string()),
            "ACE_ETA_MINUTES" => Some("-5".to_string()),
            "ACE_ORDER_PREFIX" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.tax_rate_bps, 700);
        assert_eq!(config.eta_minutes, 35);
        assert_eq!(config.order_prefix, "ACE");
    }
}
