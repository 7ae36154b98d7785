//! Merchant credentials and endpoint configuration.

use serde::{Deserialize, Serialize};
use url::Url;

/// Credentials and endpoint for one RIS merchant account.
///
/// Supplied by the caller before any request is built; there is no default
/// endpoint. Derives serde so it can be loaded straight from application
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    merchant_id: String,
    ris_url: Url,
    api_key: String,
    config_key: String,
}

impl Settings {
    /// Creates settings for one merchant account.
    ///
    /// `config_key` is carried for callers that hash payment tokens
    /// out-of-band; the core never reads it.
    #[must_use]
    pub fn new(
        merchant_id: impl Into<String>,
        ris_url: Url,
        api_key: impl Into<String>,
        config_key: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            ris_url,
            api_key: api_key.into(),
            config_key: config_key.into(),
        }
    }

    /// The merchant id assigned by Kount.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// The RIS endpoint URL.
    #[must_use]
    pub fn ris_url(&self) -> &Url {
        &self.ris_url
    }

    /// The API key used to authenticate requests.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The configuration key issued alongside the API key.
    #[must_use]
    pub fn config_key(&self) -> &str {
        &self.config_key
    }
}
