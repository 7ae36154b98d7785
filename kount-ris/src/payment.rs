//! Payment method tags and token masking.
//!
//! Every payment method the RIS service accepts is identified by a fixed
//! `PTYP` wire tag paired with a raw `PTOK` token. [`PaymentType`] is the
//! closed set of supported methods; "no payment" is not a method and is
//! handled by [`crate::request::Request::set_no_payment`] instead.

use std::fmt;

use crate::error::RisError;

/// Wire tag transmitted as `PTYP` when a transaction carries no payment.
pub const NO_PAYMENT_TAG: &str = "NONE";

/// A payment method supported by the RIS service.
///
/// Each variant carries a fixed wire tag, giving compile-time exhaustiveness
/// over the methods the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentType {
    /// Credit or debit card.
    Card,
    /// Check (MICR line).
    Check,
    /// Opaque payment token.
    Token,
    /// PayPal.
    PayPal,
    /// Google payment.
    Google,
    /// Gift card.
    GiftCard,
    /// Green Dot MoneyPak.
    GreenDotMoneyPak,
    /// Bill Me Later.
    BillMeLater,
    /// Apple Pay.
    ApplePay,
    /// BPAY.
    Bpay,
    /// Carte Bleue.
    CarteBleue,
    /// ELV (Elektronisches Lastschriftverfahren).
    Elv,
    /// GiroPay.
    GiroPay,
    /// Interac.
    Interac,
    /// Mercado Pago.
    MercadoPago,
    /// Neteller.
    Neteller,
    /// POLi.
    Poli,
    /// Single Euro Payments Area direct debit.
    Sepa,
    /// Skrill / Moneybookers.
    Skrill,
    /// Sofort.
    Sofort,
}

impl PaymentType {
    /// Returns the fixed `PTYP` wire tag for this method.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::Check => "CHEK",
            Self::Token => "TOKEN",
            Self::PayPal => "PYPL",
            Self::Google => "GOOG",
            Self::GiftCard => "GIFT",
            Self::GreenDotMoneyPak => "GDMP",
            Self::BillMeLater => "BLML",
            Self::ApplePay => "APAY",
            Self::Bpay => "BPAY",
            Self::CarteBleue => "CARTE_BLEUE",
            Self::Elv => "ELV",
            Self::GiroPay => "GIROPAY",
            Self::Interac => "INTERAC",
            // The service spells the tag this way; it is not a typo here.
            Self::MercadoPago => "MERCADE_PAGO",
            Self::Neteller => "NETELLER",
            Self::Poli => "POLI",
            Self::Sepa => "SEPA",
            Self::Skrill => "SKRILL",
            Self::Sofort => "SOFORT",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Masks a payment token for `PENC=MASK` transmission.
///
/// The first 6 and last 4 characters are kept verbatim; every character
/// strictly between them is replaced with `X`. The output always has the
/// same character length as the input.
///
/// ```
/// use kount_ris::payment::mask_payment_token;
///
/// let masked = mask_payment_token("0007380568572514").unwrap();
/// assert_eq!(masked, "000738XXXXXX2514");
/// ```
///
/// # Errors
///
/// Returns [`RisError::PaymentTokenTooShort`] for tokens of fewer than 10
/// characters, since the kept prefix and suffix would overlap.
pub fn mask_payment_token(token: &str) -> Result<String, RisError> {
    let len = token.chars().count();
    if len < 10 {
        return Err(RisError::PaymentTokenTooShort { len });
    }

    let mut masked = String::with_capacity(token.len());
    masked.extend(token.chars().take(6));
    masked.extend(std::iter::repeat_n('X', len - 10));
    masked.extend(token.chars().skip(len - 4));
    Ok(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_known_card_number() {
        let masked = mask_payment_token("0007380568572514").unwrap();
        assert_eq!(masked, "000738XXXXXX2514");
    }

    #[test]
    fn test_mask_preserves_length_prefix_and_suffix() {
        let token = "4111111111111111119";
        let masked = mask_payment_token(token).unwrap();
        assert_eq!(masked.chars().count(), token.chars().count());
        assert_eq!(&masked[..6], &token[..6]);
        assert_eq!(&masked[masked.len() - 4..], &token[token.len() - 4..]);
        assert!(masked[6..masked.len() - 4].chars().all(|c| c == 'X'));
    }

    #[test]
    fn test_mask_exactly_ten_characters_has_no_middle() {
        let masked = mask_payment_token("0123456789").unwrap();
        assert_eq!(masked, "0123456789");
    }

    #[test]
    fn test_mask_rejects_short_token() {
        let err = mask_payment_token("012345678").unwrap_err();
        assert_eq!(err, RisError::PaymentTokenTooShort { len: 9 });
    }

    #[test]
    fn test_mask_rejects_empty_token() {
        let err = mask_payment_token("").unwrap_err();
        assert_eq!(err, RisError::PaymentTokenTooShort { len: 0 });
    }

    #[test]
    fn test_tags_match_wire_protocol() {
        assert_eq!(PaymentType::Card.tag(), "CARD");
        assert_eq!(PaymentType::Check.tag(), "CHEK");
        assert_eq!(PaymentType::CarteBleue.tag(), "CARTE_BLEUE");
        assert_eq!(PaymentType::MercadoPago.tag(), "MERCADE_PAGO");
        assert_eq!(PaymentType::GreenDotMoneyPak.to_string(), "GDMP");
    }
}
