//! HTTP client for the Open Exchange Rates provider.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::fx::{Catalog, RateTable};

/// Production endpoint of Open Exchange Rates.
const DEFAULT_BASE_URL: &str = "https://openexchangerates.org/api";

/// Timeout applied to every provider request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while talking to the provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request to provider failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider returned status {0}")]
    Status(StatusCode),
    #[error("Provider response did not match the expected shape: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

/// A source of current exchange rates.
///
/// The form controller requests a fresh table through this trait on every
/// submission; tests substitute scripted implementations.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the current exchange-rate table.
    async fn latest(&self) -> Result<RateTable, ProviderError>;
}

/// Client for the Open Exchange Rates JSON API.
///
/// Both endpoints require an application id, passed as the `app_id` query
/// parameter. Rates are quoted relative to the provider's base currency.
pub struct OpenExchangeRates {
    client: Client,
    base_url: String,
    app_id: String,
}

impl OpenExchangeRates {
    /// Creates a client for the production endpoint.
    pub fn new(app_id: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, app_id)
    }

    /// Creates a client against an arbitrary endpoint.
    pub fn with_base_url(base_url: &str, app_id: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        OpenExchangeRates {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
        }
    }

    /// Fetches the catalog of supported currencies
    /// (`GET <base_url>/currencies.json?app_id=<ID>`).
    pub async fn currencies(&self) -> Result<Catalog, ProviderError> {
        self.get_json("currencies.json").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        let url = format!("{}/{}?app_id={}", self.base_url, path, self.app_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }
        response
            .json::<T>()
            .await
            .map_err(ProviderError::MalformedResponse)
    }
}

#[async_trait]
impl RateSource for OpenExchangeRates {
    /// Fetches the current rate table
    /// (`GET <base_url>/latest.json?app_id=<ID>`).
    async fn latest(&self) -> Result<RateTable, ProviderError> {
        self.get_json("latest.json").await
    }
}
