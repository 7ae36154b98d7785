//! Request builders for the RIS service.
//!
//! A [`Request`] owns the [`FieldStore`] for one outbound call and exposes
//! the setters shared by both call modes. The two public builders,
//! [`Inquiry`] and [`Update`], each hold a `Request` and deref to it, so
//! shared setters are available directly on either builder. One builder is
//! created per logical call and discarded afterwards; builders are never
//! shared between calls.

pub mod inquiry;
pub mod update;

pub use inquiry::{Address, Gender, Inquiry, InquiryMode};
pub use update::{RefundChargebackStatus, Update, UpdateMode};

use crate::error::RisError;
use crate::fields::FieldStore;
use crate::payment::{NO_PAYMENT_TAG, PaymentType, mask_payment_token};
use crate::settings::Settings;

/// RIS protocol version transmitted as `VERS` with every request.
///
/// The transport overwrites any caller-set `VERS` value with this constant
/// immediately before transmission.
pub const RIS_VERSION: &str = "0700";

/// SDK identifier transmitted as `SDK` with every request.
pub const SDK_TYPE: &str = "CUST";

/// The field-store-owning core shared by [`Inquiry`] and [`Update`].
///
/// Every setter is a fixed mapping from one semantic parameter to one or
/// more wire fields; none performs remote validation. Enumerated parameters
/// (payment method, modes, gender) are closed enums, so unsupported values
/// are unrepresentable; [`Request::set_param`] remains the escape hatch for
/// arbitrary custom fields.
#[derive(Debug, Clone)]
pub struct Request {
    fields: FieldStore,
}

impl Request {
    /// Creates a request core carrying the merchant id from `settings`.
    pub(crate) fn new(settings: &Settings) -> Self {
        let mut request = Self {
            fields: FieldStore::new(),
        };
        request.set_merchant_id(settings.merchant_id());
        request
    }

    /// Returns the accumulated wire fields.
    #[must_use]
    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Sets an arbitrary wire field, overwriting any prior value.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.set(key, value);
    }

    /// Sets the merchant id assigned by Kount.
    pub fn set_merchant_id(&mut self, id: impl Into<String>) {
        self.fields.set("MERC", id);
    }

    /// Sets the merchant gateway's customer id for Kount Central.
    pub fn set_kc_customer_id(&mut self, id: impl Into<String>) {
        self.fields.set("CUSTOMER_ID", id);
    }

    /// Sets the protocol version number.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.fields.set("VERS", version);
    }

    /// Sets the session id. Must be unique over a 30-day span.
    pub fn set_session_id(&mut self, id: impl Into<String>) {
        self.fields.set("SESS", id);
    }

    /// Sets the merchant order number.
    pub fn set_order_number(&mut self, order_number: impl Into<String>) {
        self.fields.set("ORDR", order_number);
    }

    /// Sets the merchant acknowledgement (MACK) flag.
    pub fn set_mack(&mut self, mack: impl Into<String>) {
        self.fields.set("MACK", mack);
    }

    /// Sets the authorization status returned by the payment processor.
    pub fn set_authorization_status(&mut self, auth: impl Into<String>) {
        self.fields.set("AUTH", auth);
    }

    /// Sets the bankcard AVS zip code reply.
    ///
    /// `M` for match, `N` for no match, `X` for unsupported or unavailable.
    pub fn set_avs_zip_reply(&mut self, avsz: impl Into<String>) {
        self.fields.set("AVSZ", avsz);
    }

    /// Sets the bankcard AVS street address reply.
    ///
    /// `M` for match, `N` for no match, `X` for unsupported or unavailable.
    pub fn set_avs_street_reply(&mut self, avst: impl Into<String>) {
        self.fields.set("AVST", avst);
    }

    /// Sets the bankcard CVV/CVC/CVV2 reply.
    ///
    /// `M` for match, `N` for no match, `X` for unsupported or unavailable.
    pub fn set_cvv_reply(&mut self, cvvr: impl Into<String>) {
        self.fields.set("CVVR", cvvr);
    }

    /// Sets the payment method and raw (non-hashed) payment token.
    pub fn set_payment_method(&mut self, payment_type: PaymentType, token: impl Into<String>) {
        self.fields.set("PTYP", payment_type.tag());
        self.fields.set("PTOK", token);
    }

    /// Sets the payment method and token, back-filling `LAST4`.
    ///
    /// If the `LAST4` field is not already present it is derived from the
    /// token: the trailing 4 characters when the token has at least 4,
    /// otherwise the whole token.
    pub fn set_payment(&mut self, payment_type: PaymentType, token: &str) {
        if !self.fields.contains("LAST4") {
            let count = token.chars().count();
            let last4: String = if count >= 4 {
                token.chars().skip(count - 4).collect()
            } else {
                token.to_owned()
            };
            self.fields.set("LAST4", last4);
        }
        self.set_payment_method(payment_type, token);
    }

    /// Sets a card payment with a masked token and `PENC=MASK`.
    ///
    /// # Errors
    ///
    /// Returns [`RisError::PaymentTokenTooShort`] if the card number has
    /// fewer than 10 characters; no field is written in that case.
    pub fn set_payment_masked(&mut self, card_number: &str) -> Result<(), RisError> {
        let masked = mask_payment_token(card_number)?;
        self.set_payment_method(PaymentType::Card, masked);
        self.fields.set("PENC", "MASK");
        Ok(())
    }

    /// Marks the transaction as carrying no payment.
    ///
    /// Removes any payment token outright; the wire protocol distinguishes
    /// an absent `PTOK` from an empty one.
    pub fn set_no_payment(&mut self) {
        self.fields.set("PTYP", NO_PAYMENT_TAG);
        self.fields.remove("PTOK");
    }

    /// Sets the last 4 characters of the payment token.
    pub fn set_payment_token_last4(&mut self, last4: impl Into<String>) {
        self.fields.set("LAST4", last4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings::new(
            "123456",
            "https://risk.test.kount.net/".parse().unwrap(),
            "api-key",
            "config-key",
        )
    }

    fn test_request() -> Request {
        Request::new(&test_settings())
    }

    #[test]
    fn test_new_request_carries_merchant_id() {
        let request = test_request();
        assert_eq!(request.fields().get("MERC"), Some("123456"));
    }

    #[test]
    fn test_setters_are_last_write_wins() {
        let mut request = test_request();
        request.set_session_id("first");
        request.set_session_id("second");
        assert_eq!(request.fields().get("SESS"), Some("second"));
    }

    #[test]
    fn test_payment_method_sets_tag_and_token() {
        let mut request = test_request();
        request.set_payment_method(PaymentType::PayPal, "paypal-id-1");
        assert_eq!(request.fields().get("PTYP"), Some("PYPL"));
        assert_eq!(request.fields().get("PTOK"), Some("paypal-id-1"));
        assert!(!request.fields().contains("LAST4"));
    }

    #[test]
    fn test_no_payment_removes_token_after_card() {
        let mut request = test_request();
        request.set_payment_method(PaymentType::Card, "4111111111111111");
        request.set_no_payment();
        assert_eq!(request.fields().get("PTYP"), Some("NONE"));
        assert!(!request.fields().contains("PTOK"));
    }

    #[test]
    fn test_set_payment_backfills_last4_from_token() {
        let mut request = test_request();
        request.set_payment(PaymentType::Card, "4111111111111111");
        assert_eq!(request.fields().get("LAST4"), Some("1111"));
        assert_eq!(request.fields().get("PTOK"), Some("4111111111111111"));
    }

    #[test]
    fn test_set_payment_uses_whole_short_token_as_last4() {
        let mut request = test_request();
        request.set_payment(PaymentType::Token, "abc");
        assert_eq!(request.fields().get("LAST4"), Some("abc"));
    }

    // LAST4 presence is checked on the field store key, not on a default
    // value read; an explicit LAST4 always wins over the derived one.
    #[test]
    fn test_set_payment_keeps_existing_last4() {
        let mut request = test_request();
        request.set_payment_token_last4("9999");
        request.set_payment(PaymentType::Card, "4111111111111111");
        assert_eq!(request.fields().get("LAST4"), Some("9999"));
    }

    #[test]
    fn test_masked_payment_sets_card_and_encoding() {
        let mut request = test_request();
        request.set_payment_masked("0007380568572514").unwrap();
        assert_eq!(request.fields().get("PTOK"), Some("000738XXXXXX2514"));
        assert_eq!(request.fields().get("PTYP"), Some("CARD"));
        assert_eq!(request.fields().get("PENC"), Some("MASK"));
    }

    #[test]
    fn test_masked_payment_rejects_short_card_number_without_writes() {
        let mut request = test_request();
        let err = request.set_payment_masked("12345").unwrap_err();
        assert_eq!(err, RisError::PaymentTokenTooShort { len: 5 });
        assert!(!request.fields().contains("PTOK"));
        assert!(!request.fields().contains("PENC"));
    }
}
