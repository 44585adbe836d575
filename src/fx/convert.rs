//! Pure conversion between two currencies over a table of relative rates.
use thiserror::Error;

use crate::fx::{RateTable, types::AMOUNT_DECIMALS};

/// Errors that can occur while converting or normalizing an amount.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("No exchange rate available for currency {0}")]
    MissingRate(String),
    #[error("Amount is not a valid number: {0:?}")]
    InvalidAmount(String),
}

/// Converts `amount` from one currency to another using rates expressed
/// relative to a common base currency.
///
/// Both rates being relative to the same base, the conversion is
/// `amount * (rate(to) / rate(from))`. The result is returned as a string
/// with exactly `decimals` fractional digits, preserving trailing zeros.
/// A currency absent from the table is a [`ConvertError::MissingRate`].
pub fn convert(
    amount: f64,
    rates: &RateTable,
    from: &str,
    to: &str,
    decimals: usize,
) -> Result<String, ConvertError> {
    let from_rate = rates
        .get_rate(from)
        .ok_or_else(|| ConvertError::MissingRate(from.to_string()))?;
    let to_rate = rates
        .get_rate(to)
        .ok_or_else(|| ConvertError::MissingRate(to.to_string()))?;
    Ok(format!(
        "{:.prec$}",
        amount * (to_rate / from_rate),
        prec = decimals
    ))
}

/// Normalizes raw amount input to exactly two decimal places.
///
/// Runs whenever the amount field changes; non-numeric input is a
/// [`ConvertError::InvalidAmount`] rather than a silent NaN.
pub fn normalize_amount(input: &str) -> Result<String, ConvertError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidAmount(input.to_string()))?;
    if !value.is_finite() {
        return Err(ConvertError::InvalidAmount(input.to_string()));
    }
    Ok(format!("{:.prec$}", value, prec = AMOUNT_DECIMALS))
}
