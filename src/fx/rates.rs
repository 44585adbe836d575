//! The exchange-rate table fetched fresh for every conversion.
use std::collections::HashMap;

use serde::Deserialize;

use crate::fx::types::{CurrencyCode, Rate};

/// A snapshot of exchange rates, each expressed relative to one fixed base
/// currency chosen by the provider (Open Exchange Rates uses USD).
///
/// Fetched per submission and discarded after use; never cached. Extra
/// provider fields (disclaimer, license, timestamp) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The base currency all rates are relative to.
    base: CurrencyCode,

    /// Rates by currency code: one unit of `base` buys `rate` units.
    rates: HashMap<CurrencyCode, Rate>,
}

impl RateTable {
    /// Gets the base currency code.
    pub fn get_base(&self) -> &str {
        &self.base
    }

    /// Gets the rate for a currency relative to the base, if the provider
    /// quoted one.
    pub fn get_rate(&self, code: &str) -> Option<Rate> {
        self.rates.get(code).copied()
    }

    #[cfg(test)]
    pub fn from_rates(base: &str, rates: &[(&str, Rate)]) -> Self {
        RateTable {
            base: base.to_string(),
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RateTable;

    #[test]
    fn test_deserialize_latest_response() {
        let json = r#"{
            "disclaimer": "Usage subject to terms",
            "license": "https://openexchangerates.org/license",
            "timestamp": 1719936000,
            "base": "USD",
            "rates": {"EUR": 0.84, "USD": 1.0, "JPY": 107.6}
        }"#;
        let table: RateTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.get_base(), "USD");
        assert_eq!(table.get_rate("EUR"), Some(0.84));
        assert_eq!(table.get_rate("USD"), Some(1.0));
        assert_eq!(table.get_rate("XXX"), None);
    }

    #[test]
    fn test_missing_rates_field_is_an_error() {
        let json = r#"{"base": "USD"}"#;
        assert!(serde_json::from_str::<RateTable>(json).is_err());
    }
}
