//! The RIS HTTP client.
//!
//! [`RisClient`] performs the one synchronous-in-spirit exchange the RIS
//! protocol defines: serialize the request's field store as
//! `application/x-www-form-urlencoded`, POST it with the API-key and
//! merchant-id headers, and digest whatever body comes back.

use std::time::Duration;

use kount_ris::request::{RIS_VERSION, Request};
use kount_ris::response::Response;
use kount_ris::settings::Settings;

use crate::constants::{API_KEY_HEADER, DEFAULT_TIMEOUT, MERCHANT_ID_HEADER};
use crate::error::RisHttpError;

/// Configuration for [`RisClient`].
pub struct RisClientConfig {
    /// Merchant credentials and RIS endpoint.
    pub settings: Settings,

    /// Whole-call timeout applied to each request. Defaults to 30 seconds.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl RisClientConfig {
    /// Creates a config with the given settings and the default timeout.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Sets the whole-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl std::fmt::Debug for RisClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RisClientConfig")
            .field("ris_url", &self.settings.ris_url().as_str())
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

/// HTTP client for the RIS endpoint.
///
/// Makes exactly one POST per [`RisClient::send`] call. A failed call
/// surfaces its error immediately; the caller owns any retry policy.
///
/// # Example
///
/// ```no_run
/// use kount_ris::Settings;
/// use kount_ris::request::Inquiry;
/// use kount_ris_http::{RisClient, RisClientConfig};
///
/// # async fn run() -> Result<(), kount_ris_http::RisHttpError> {
/// let settings = Settings::new(
///     "123456",
///     "https://risk.test.kount.net/".parse().unwrap(),
///     "api-key",
///     "config-key",
/// );
/// let client = RisClient::new(RisClientConfig::new(settings.clone()));
///
/// let mut inquiry = Inquiry::new(&settings);
/// inquiry.set_session_id("session-0001");
/// let response = client.send(&inquiry).await?;
/// println!("score: {}", response.score());
/// # Ok(())
/// # }
/// ```
pub struct RisClient {
    settings: Settings,
    client: reqwest::Client,
}

impl RisClient {
    /// Creates a new RIS client from the given configuration.
    #[must_use]
    pub fn new(config: RisClientConfig) -> Self {
        let client = config.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("failed to build reqwest::Client")
        });

        Self {
            settings: config.settings,
            client,
        }
    }

    /// Returns the settings this client sends with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sends the request and digests the response body.
    ///
    /// The protocol version field is forced to [`RIS_VERSION`] immediately
    /// before transmission, overwriting any caller-set value. The body is
    /// digested regardless of HTTP status: the service reports RIS-level
    /// errors in-band through the response fields.
    ///
    /// # Errors
    ///
    /// Returns [`RisHttpError::Request`] on any transport failure (DNS,
    /// connect, timeout, body read). Nothing is retried.
    pub async fn send(&self, request: &Request) -> Result<Response, RisHttpError> {
        let mut form = request.fields().clone();
        form.set("VERS", RIS_VERSION);
        let merchant_id = form.get("MERC").unwrap_or_default().to_owned();

        #[cfg(feature = "telemetry")]
        tracing::debug!(fields = form.len(), merchant_id = %merchant_id, "sending RIS request");

        let response = self
            .client
            .post(self.settings.ris_url().as_str())
            .header(API_KEY_HEADER, self.settings.api_key())
            .header(MERCHANT_ID_HEADER, merchant_id)
            .form(&form)
            .send()
            .await?;

        let raw = response.text().await?;

        #[cfg(feature = "telemetry")]
        tracing::debug!(bytes = raw.len(), "received RIS response");

        Ok(Response::from_raw(raw))
    }
}

impl std::fmt::Debug for RisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RisClient")
            .field("ris_url", &self.settings.ris_url().as_str())
            .finish_non_exhaustive()
    }
}
