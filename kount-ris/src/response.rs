//! Response digestion and typed accessors.
//!
//! The RIS service answers with newline-delimited `KEY=VALUE` text rather
//! than JSON. [`Response`] keeps the exact raw body and a digested key/value
//! map derived from it; every accessor is a pure lookup against that map.

use std::collections::HashMap;
use std::fmt;

use crate::data::KcEvent;

/// A digested RIS response.
///
/// Built from the raw response body by [`Response::from_raw`]. `digest`
/// rebuilds the derived map from scratch and is idempotent; no accessor
/// mutates it. Every scalar accessor returns the empty string when the field
/// is absent, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    raw: String,
    data: HashMap<String, String>,
}

impl Response {
    /// Creates a response from the raw body text and digests it.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let mut response = Self {
            raw: raw.into(),
            data: HashMap::new(),
        };
        response.digest();
        response
    }

    /// Rebuilds the derived key/value map from the raw body.
    ///
    /// The body is split on newlines and each line on `=`; only lines that
    /// split into exactly two parts contribute an entry. Malformed lines
    /// (no `=`, or more than one) are silently dropped, which also means
    /// values themselves cannot contain `=`. Lossy by design.
    pub fn digest(&mut self) {
        let mut data = HashMap::new();
        for line in self.raw.split('\n') {
            let parts: Vec<&str> = line.split('=').collect();
            if let [key, value] = parts[..] {
                data.insert(key.to_owned(), value.to_owned());
            }
        }
        self.data = data;
    }

    /// The exact raw body returned by the service.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns an explicit parameter, or `""` when absent.
    #[must_use]
    pub fn param(&self, key: &str) -> &str {
        self.data.get(key).map_or("", String::as_str)
    }

    /// Parses a count field, silently falling back to 0 when the field is
    /// absent or non-numeric.
    fn count(&self, key: &str) -> usize {
        self.param(key).parse().unwrap_or(0)
    }

    /// The protocol version number.
    #[must_use]
    pub fn version(&self) -> &str {
        self.param("VERS")
    }

    /// The RIS mode the request was processed in.
    #[must_use]
    pub fn mode(&self) -> &str {
        self.param("MODE")
    }

    /// The transaction id.
    #[must_use]
    pub fn transaction_id(&self) -> &str {
        self.param("TRAN")
    }

    /// The merchant id.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        self.param("MERC")
    }

    /// The merchant gateway's customer id for Kount Central.
    #[must_use]
    pub fn kc_customer_id(&self) -> &str {
        self.param("KC_CUSTOMER_ID")
    }

    /// The session id.
    #[must_use]
    pub fn session_id(&self) -> &str {
        self.param("SESS")
    }

    /// The website id associated with the transaction.
    #[must_use]
    pub fn site(&self) -> &str {
        self.param("SITE")
    }

    /// The merchant order number.
    #[must_use]
    pub fn order_number(&self) -> &str {
        self.param("ORDR")
    }

    /// The automated decision: `A`pprove, `R`eview, or `D`ecline.
    #[must_use]
    pub fn auto(&self) -> &str {
        self.param("AUTO")
    }

    /// The merchant-defined decision reason code.
    #[must_use]
    pub fn reason_code(&self) -> &str {
        self.param("REASON_CODE")
    }

    /// The Kount score.
    #[must_use]
    pub fn score(&self) -> &str {
        self.param("SCOR")
    }

    /// The Kount Omniscore.
    #[must_use]
    pub fn omniscore(&self) -> &str {
        self.param("OMNISCORE")
    }

    /// The geox.
    #[must_use]
    pub fn geox(&self) -> &str {
        self.param("GEOX")
    }

    /// The card brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        self.param("BRND")
    }

    /// The 6-week velocity.
    #[must_use]
    pub fn velo(&self) -> &str {
        self.param("VELO")
    }

    /// The 6-hour velocity.
    #[must_use]
    pub fn vmax(&self) -> &str {
        self.param("VMAX")
    }

    /// The network type.
    #[must_use]
    pub fn network(&self) -> &str {
        self.param("NETW")
    }

    /// The "know your customer" flag.
    #[must_use]
    pub fn know_your_customer(&self) -> &str {
        self.param("KYCF")
    }

    /// The region.
    #[must_use]
    pub fn region(&self) -> &str {
        self.param("REGN")
    }

    /// The Kaptcha flag, enabled upon request.
    #[must_use]
    pub fn kaptcha(&self) -> &str {
        self.param("KAPT")
    }

    /// Whether the remote device is using a proxy (`Y` or `N`).
    #[must_use]
    pub fn proxy(&self) -> &str {
        self.param("PROXY")
    }

    /// The number of transactions associated with the email.
    #[must_use]
    pub fn emails(&self) -> &str {
        self.param("EMAILS")
    }

    /// The two-character country code set in the remote device's browser.
    #[must_use]
    pub fn http_country(&self) -> &str {
        self.param("HTTP_COUNTRY")
    }

    /// The time zone of the customer as a three-digit number.
    #[must_use]
    pub fn time_zone(&self) -> &str {
        self.param("TIMEZONE")
    }

    /// The number of transactions associated with the credit card.
    #[must_use]
    pub fn cards(&self) -> &str {
        self.param("CARDS")
    }

    /// Whether the end device is a remotely controlled computer.
    #[must_use]
    pub fn pc_remote(&self) -> &str {
        self.param("PC_REMOTE")
    }

    /// The number of transactions associated with the particular device.
    #[must_use]
    pub fn devices(&self) -> &str {
        self.param("DEVICES")
    }

    /// The five layers (OS, SSL, HTTP, Flash, JavaScript) of the remote
    /// device.
    #[must_use]
    pub fn device_layers(&self) -> &str {
        self.param("DEVICE_LAYERS")
    }

    /// The mobile device's wireless application protocol.
    #[must_use]
    pub fn mobile_forwarder(&self) -> &str {
        self.param("MOBILE_FORWARDER")
    }

    /// Whether the remote device is voice controlled.
    #[must_use]
    pub fn voice_device(&self) -> &str {
        self.param("VOICE_DEVICE")
    }

    /// Local time of the remote device in the YYYY-MM-DD format.
    #[must_use]
    pub fn local_time(&self) -> &str {
        self.param("LOCALTIME")
    }

    /// The mobile device type.
    #[must_use]
    pub fn mobile_type(&self) -> &str {
        self.param("MOBILE_TYPE")
    }

    /// The device fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        self.param("FINGERPRINT")
    }

    /// Whether the remote device allows Flash.
    #[must_use]
    pub fn flash(&self) -> &str {
        self.param("FLASH")
    }

    /// The language setting on the remote device.
    #[must_use]
    pub fn language(&self) -> &str {
        self.param("LANGUAGE")
    }

    /// The remote device's country of origin as a two-character code.
    #[must_use]
    pub fn country(&self) -> &str {
        self.param("COUNTRY")
    }

    /// Whether the remote device allows JavaScript.
    #[must_use]
    pub fn javascript(&self) -> &str {
        self.param("JAVASCRIPT")
    }

    /// Whether the remote device allows cookies.
    #[must_use]
    pub fn cookies(&self) -> &str {
        self.param("COOKIES")
    }

    /// Whether the remote device is a mobile device.
    #[must_use]
    pub fn mobile_device(&self) -> &str {
        self.param("MOBILE_DEVICE")
    }

    /// The MasterCard Fraud Score associated with the transaction.
    #[must_use]
    pub fn mastercard_fraud_score(&self) -> &str {
        self.param("MASTERCARD")
    }

    /// The pierced IP address.
    #[must_use]
    pub fn pierced_ip_address(&self) -> &str {
        self.param("PIP_IPAD")
    }

    /// Latitude of the pierced IP address.
    #[must_use]
    pub fn pierced_ip_address_latitude(&self) -> &str {
        self.param("PIP_LAT")
    }

    /// Longitude of the pierced IP address.
    #[must_use]
    pub fn pierced_ip_address_longitude(&self) -> &str {
        self.param("PIP_LON")
    }

    /// Country of the pierced IP address.
    #[must_use]
    pub fn pierced_ip_address_country(&self) -> &str {
        self.param("PIP_COUNTRY")
    }

    /// Region of the pierced IP address.
    #[must_use]
    pub fn pierced_ip_address_region(&self) -> &str {
        self.param("PIP_REGION")
    }

    /// City of the pierced IP address.
    #[must_use]
    pub fn pierced_ip_address_city(&self) -> &str {
        self.param("PIP_CITY")
    }

    /// Organization of the pierced IP address.
    #[must_use]
    pub fn pierced_ip_address_organization(&self) -> &str {
        self.param("PIP_ORG")
    }

    /// The proxy IP address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        self.param("IP_IPAD")
    }

    /// Latitude of the proxy IP address.
    #[must_use]
    pub fn ip_address_latitude(&self) -> &str {
        self.param("IP_LAT")
    }

    /// Longitude of the proxy IP address.
    #[must_use]
    pub fn ip_address_longitude(&self) -> &str {
        self.param("IP_LON")
    }

    /// Country of the proxy IP address.
    #[must_use]
    pub fn ip_address_country(&self) -> &str {
        self.param("IP_COUNTRY")
    }

    /// Region of the proxy IP address.
    #[must_use]
    pub fn ip_address_region(&self) -> &str {
        self.param("IP_REGION")
    }

    /// City of the proxy IP address.
    #[must_use]
    pub fn ip_address_city(&self) -> &str {
        self.param("IP_CITY")
    }

    /// Organization of the proxy IP address.
    #[must_use]
    pub fn ip_address_organization(&self) -> &str {
        self.param("IP_ORG")
    }

    /// Date the device was first seen.
    #[must_use]
    pub fn date_device_first_seen(&self) -> &str {
        self.param("DDFS")
    }

    /// The user agent string.
    #[must_use]
    pub fn user_agent_string(&self) -> &str {
        self.param("UAS")
    }

    /// The device screen resolution.
    #[must_use]
    pub fn device_screen_resolution(&self) -> &str {
        self.param("DSR")
    }

    /// The operating system, derived from the user agent string.
    #[must_use]
    pub fn os(&self) -> &str {
        self.param("OS")
    }

    /// The browser, derived from the user agent string.
    #[must_use]
    pub fn browser(&self) -> &str {
        self.param("BROWSER")
    }

    /// A possible error code.
    #[must_use]
    pub fn error_code(&self) -> &str {
        self.param("ERRO")
    }

    /// The number of rules triggered by the response, 0 when absent.
    #[must_use]
    pub fn number_rules_triggered(&self) -> usize {
        self.count("RULES_TRIGGERED")
    }

    /// The triggered rules as a rule-id to description map.
    #[must_use]
    pub fn rules_triggered(&self) -> HashMap<String, String> {
        let mut rules = HashMap::new();
        for i in 0..self.number_rules_triggered() {
            rules.insert(
                self.param(&format!("RULE_ID_{i}")).to_owned(),
                self.param(&format!("RULE_DESCRIPTION_{i}")).to_owned(),
            );
        }
        rules
    }

    /// The number of warnings in the response, 0 when absent.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count("WARNING_COUNT")
    }

    /// The warnings associated with this response.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        (0..self.warning_count())
            .map(|i| self.param(&format!("WARNING_{i}")).to_owned())
            .collect()
    }

    /// The number of errors in the response, 0 when absent.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count("ERROR_COUNT")
    }

    /// The errors associated with this response.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        (0..self.error_count())
            .map(|i| self.param(&format!("ERROR_{i}")).to_owned())
            .collect()
    }

    /// The number of rules counters triggered, 0 when absent.
    #[must_use]
    pub fn number_counters_triggered(&self) -> usize {
        self.count("COUNTERS_TRIGGERED")
    }

    /// The triggered rules counters as a name to value map.
    #[must_use]
    pub fn counters_triggered(&self) -> HashMap<String, String> {
        let mut counters = HashMap::new();
        for i in 0..self.number_counters_triggered() {
            counters.insert(
                self.param(&format!("COUNTER_NAME_{i}")).to_owned(),
                self.param(&format!("COUNTER_VALUE_{i}")).to_owned(),
            );
        }
        counters
    }

    /// The number of Kount Central warnings, 0 when absent.
    #[must_use]
    pub fn kc_warning_count(&self) -> usize {
        self.count("KC_WARNING_COUNT")
    }

    /// The Kount Central warnings associated with the response.
    #[must_use]
    pub fn kc_warnings(&self) -> Vec<String> {
        (0..self.kc_warning_count())
            .map(|i| self.param(&format!("KC_WARNING_{i}")).to_owned())
            .collect()
    }

    /// The number of Kount Central errors, 0 when absent.
    #[must_use]
    pub fn kc_error_count(&self) -> usize {
        self.count("KC_ERROR_COUNT")
    }

    /// The Kount Central errors associated with the response.
    #[must_use]
    pub fn kc_errors(&self) -> Vec<String> {
        (0..self.kc_error_count())
            .map(|i| self.param(&format!("KC_ERROR_{i}")).to_owned())
            .collect()
    }

    /// The number of Kount Central threshold events, 0 when absent.
    #[must_use]
    pub fn kc_event_count(&self) -> usize {
        self.count("KC_TRIGGERED_COUNT")
    }

    /// The Kount Central threshold events associated with the decision.
    #[must_use]
    pub fn kc_events(&self) -> Vec<KcEvent> {
        (0..self.kc_event_count())
            .map(|i| KcEvent {
                decision: self.param(&format!("KC_EVENT_{i}_DECISION")).to_owned(),
                expression: self.param(&format!("KC_EVENT_{i}_EXPRESSION")).to_owned(),
                code: self.param(&format!("KC_EVENT_{i}_CODE")).to_owned(),
            })
            .collect()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
