//! Types used throughout the converter.

/// Number of fractional digits when formatting a full conversion result.
pub const AMOUNT_DECIMALS: usize = 2;

/// Number of fractional digits when formatting unit exchange rates.
/// Higher than [`AMOUNT_DECIMALS`] to stay meaningful at small magnitudes.
pub const UNIT_DECIMALS: usize = 6;

/// Currency code type, a short uppercase identifier such as "USD".
pub type CurrencyCode = String;

/// Exchange rate type, expressed relative to the provider's base currency.
pub type Rate = f64;
