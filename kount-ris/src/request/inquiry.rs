//! The initial transaction inquiry builder.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::data::CartItem;
use crate::request::{Request, SDK_TYPE};
use crate::settings::Settings;

/// Mode of a transaction inquiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InquiryMode {
    /// Default risk inquiry.
    #[default]
    Q,
    /// Phone-order inquiry.
    P,
    /// Kaptcha full inquiry.
    W,
    /// Kaptcha evaluation inquiry.
    J,
}

impl InquiryMode {
    /// Returns the wire value transmitted as `MODE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q => "Q",
            Self::P => "P",
            Self::W => "W",
            Self::J => "J",
        }
    }
}

impl fmt::Display for InquiryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Transmitted as `M`.
    Male,
    /// Transmitted as `F`.
    Female,
}

impl Gender {
    /// Returns the wire value transmitted as `GENDER`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// A billing or shipping address.
///
/// The six required fields are always transmitted, empty or not; `premise`
/// and `street` are transmitted only when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// First address line.
    pub address1: String,
    /// Second address line.
    pub address2: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Two-character country code.
    pub country: String,
    /// Optional premise identifier.
    pub premise: String,
    /// Optional street identifier.
    pub street: String,
}

/// Builder for an initial fraud-risk-scoring request.
///
/// Created with mode `Q`, currency `USD`, and the fixed SDK identifier.
/// Derefs to [`Request`], so the shared setters (session id, order number,
/// payment methods, ...) are available directly.
///
/// # Example
///
/// ```
/// use kount_ris::Settings;
/// use kount_ris::payment::PaymentType;
/// use kount_ris::request::Inquiry;
///
/// let settings = Settings::new(
///     "123456",
///     "https://risk.test.kount.net/".parse().unwrap(),
///     "api-key",
///     "config-key",
/// );
/// let mut inquiry = Inquiry::new(&settings);
/// inquiry.set_session_id("session-0001");
/// inquiry.set_email("customer@example.com");
/// inquiry.set_total("1299");
/// inquiry.set_payment(PaymentType::Card, "4111111111111111");
/// ```
#[derive(Debug, Clone)]
pub struct Inquiry {
    request: Request,
}

impl Inquiry {
    /// Creates an inquiry with the default mode, currency, and SDK tag.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let mut inquiry = Self {
            request: Request::new(settings),
        };
        inquiry.set_mode(InquiryMode::Q);
        inquiry.set_currency("USD");
        inquiry.set_param("SDK", SDK_TYPE);
        inquiry
    }

    /// Sets the inquiry mode.
    pub fn set_mode(&mut self, mode: InquiryMode) {
        self.request.set_param("MODE", mode.as_str());
    }

    /// Sets the customer's date of birth in the format YYYY-MM-DD.
    pub fn set_date_of_birth(&mut self, dob: impl Into<String>) {
        self.request.set_param("DOB", dob);
    }

    /// Sets the customer's gender.
    pub fn set_gender(&mut self, gender: Gender) {
        self.request.set_param("GENDER", gender.as_str());
    }

    /// Sets the value of a named user-defined field.
    pub fn set_user_defined_field(&mut self, label: &str, value: impl Into<String>) {
        self.request.set_param(format!("UDF[{label}]"), value);
    }

    /// Sets the three-character ISO-4217 currency code.
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.request.set_param("CURR", currency);
    }

    /// Sets the total amount of the transaction in pennies.
    pub fn set_total(&mut self, total: impl Into<String>) {
        self.request.set_param("TOTL", total);
    }

    /// Sets the IP address of the customer.
    pub fn set_ip_address(&mut self, ip_address: impl Into<String>) {
        self.request.set_param("IPAD", ip_address);
    }

    /// Sets the email address of the customer.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.request.set_param("EMAL", email);
    }

    /// Sets the ANI (Automatic Number Identification) received for the
    /// phone transaction.
    pub fn set_anid(&mut self, anid: impl Into<String>) {
        self.request.set_param("ANID", anid);
    }

    /// Sets the name of the customer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.request.set_param("NAME", name);
    }

    /// Sets the customer's unique id or cookie.
    pub fn set_unique(&mut self, unique: impl Into<String>) {
        self.request.set_param("UNIQ", unique);
    }

    /// Sets the unix epoch date when the unique id was first set.
    pub fn set_epoch(&mut self, epoch: impl Into<String>) {
        self.request.set_param("EPOC", epoch);
    }

    /// Sets the cash amount of any feasible goods in the order.
    pub fn set_cash(&mut self, cash: impl Into<String>) {
        self.request.set_param("CASH", cash);
    }

    /// Sets the shipment type.
    pub fn set_ship_type(&mut self, ship_type: impl Into<String>) {
        self.request.set_param("SHTP", ship_type);
    }

    /// Sets the billing address.
    pub fn set_billing_address(&mut self, address: &Address) {
        self.request.set_param("B2A1", &address.address1);
        self.request.set_param("B2A2", &address.address2);
        self.request.set_param("B2CI", &address.city);
        self.request.set_param("B2ST", &address.state);
        self.request.set_param("B2PC", &address.postal_code);
        self.request.set_param("B2CC", &address.country);
        if !address.premise.is_empty() {
            self.request.set_param("BPREMISE", &address.premise);
        }
        if !address.street.is_empty() {
            self.request.set_param("BSTREET", &address.street);
        }
    }

    /// Sets the billing phone number.
    pub fn set_billing_phone_number(&mut self, phone_number: impl Into<String>) {
        self.request.set_param("B2PN", phone_number);
    }

    /// Sets the shipping address.
    pub fn set_shipping_address(&mut self, address: &Address) {
        self.request.set_param("S2A1", &address.address1);
        self.request.set_param("S2A2", &address.address2);
        self.request.set_param("S2CI", &address.city);
        self.request.set_param("S2ST", &address.state);
        self.request.set_param("S2PC", &address.postal_code);
        self.request.set_param("S2CC", &address.country);
        if !address.premise.is_empty() {
            self.request.set_param("SPREMISE", &address.premise);
        }
        if !address.street.is_empty() {
            self.request.set_param("SSTREET", &address.street);
        }
    }

    /// Sets the shipping phone number.
    pub fn set_shipping_phone_number(&mut self, phone_number: impl Into<String>) {
        self.request.set_param("S2PN", phone_number);
    }

    /// Sets the shipping name.
    pub fn set_shipping_name(&mut self, name: impl Into<String>) {
        self.request.set_param("S2NM", name);
    }

    /// Sets the shipping email address.
    pub fn set_shipping_email(&mut self, email_address: impl Into<String>) {
        self.request.set_param("S2EM", email_address);
    }

    /// Sets the user agent string of the customer's browser.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.request.set_param("UAGT", user_agent);
    }

    /// Sets the website id (shortname) associated with this transaction.
    pub fn set_website(&mut self, site: impl Into<String>) {
        self.request.set_param("SITE", site);
    }

    /// Sets the shopping cart.
    ///
    /// Each item at 0-based position `i` expands to five indexed wire
    /// fields, values copied verbatim.
    pub fn set_cart(&mut self, cart: &[CartItem]) {
        for (index, item) in cart.iter().enumerate() {
            self.add_item_to_cart(index, item);
        }
    }

    fn add_item_to_cart(&mut self, index: usize, item: &CartItem) {
        self.request
            .set_param(format!("PROD_TYPE[{index}]"), &item.product_type);
        self.request
            .set_param(format!("PROD_ITEM[{index}]"), &item.item_name);
        self.request
            .set_param(format!("PROD_DESC[{index}]"), &item.description);
        self.request
            .set_param(format!("PROD_QUANT[{index}]"), &item.quantity);
        self.request
            .set_param(format!("PROD_PRICE[{index}]"), &item.price);
    }
}

impl Deref for Inquiry {
    type Target = Request;

    fn deref(&self) -> &Self::Target {
        &self.request
    }
}

impl DerefMut for Inquiry {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.request
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

    fn item(n: u32) -> CartItem {
        CartItem {
            product_type: format!("TYPE{n}"),
            item_name: format!("ITEM{n}"),
            description: format!("DESC{n}"),
            quantity: "1".to_owned(),
            price: "1299".to_owned(),
        }
    }

    #[test]
    fn test_new_inquiry_defaults() {
        let inquiry = Inquiry::new(&test_settings());
        assert_eq!(inquiry.fields().get("MODE"), Some("Q"));
        assert_eq!(inquiry.fields().get("CURR"), Some("USD"));
        assert_eq!(inquiry.fields().get("SDK"), Some("CUST"));
        assert_eq!(inquiry.fields().get("MERC"), Some("123456"));
    }

    #[test]
    fn test_cart_emits_five_fields_per_item() {
        let mut inquiry = Inquiry::new(&test_settings());
        let before = inquiry.fields().len();
        inquiry.set_cart(&[item(0), item(1), item(2)]);
        assert_eq!(inquiry.fields().len(), before + 15);
        assert_eq!(inquiry.fields().get("PROD_TYPE[0]"), Some("TYPE0"));
        assert_eq!(inquiry.fields().get("PROD_ITEM[1]"), Some("ITEM1"));
        assert_eq!(inquiry.fields().get("PROD_DESC[2]"), Some("DESC2"));
        assert_eq!(inquiry.fields().get("PROD_QUANT[2]"), Some("1"));
        assert_eq!(inquiry.fields().get("PROD_PRICE[2]"), Some("1299"));
        assert!(!inquiry.fields().contains("PROD_TYPE[3]"));
    }

    #[test]
    fn test_empty_cart_emits_nothing() {
        let mut inquiry = Inquiry::new(&test_settings());
        let before = inquiry.fields().len();
        inquiry.set_cart(&[]);
        assert_eq!(inquiry.fields().len(), before);
    }

    #[test]
    fn test_billing_address_skips_empty_premise_and_street() {
        let mut inquiry = Inquiry::new(&test_settings());
        inquiry.set_billing_address(&Address {
            address1: "1234 Main St".to_owned(),
            city: "Boise".to_owned(),
            state: "ID".to_owned(),
            postal_code: "83701".to_owned(),
            country: "US".to_owned(),
            ..Address::default()
        });
        assert_eq!(inquiry.fields().get("B2A1"), Some("1234 Main St"));
        assert_eq!(inquiry.fields().get("B2A2"), Some(""));
        assert!(!inquiry.fields().contains("BPREMISE"));
        assert!(!inquiry.fields().contains("BSTREET"));
    }

    #[test]
    fn test_shipping_address_emits_premise_and_street_when_set() {
        let mut inquiry = Inquiry::new(&test_settings());
        inquiry.set_shipping_address(&Address {
            address1: "1234 Main St".to_owned(),
            city: "Boise".to_owned(),
            state: "ID".to_owned(),
            postal_code: "83701".to_owned(),
            country: "US".to_owned(),
            premise: "12".to_owned(),
            street: "Main".to_owned(),
            ..Address::default()
        });
        assert_eq!(inquiry.fields().get("SPREMISE"), Some("12"));
        assert_eq!(inquiry.fields().get("SSTREET"), Some("Main"));
    }

    #[test]
    fn test_user_defined_field_key_carries_label() {
        let mut inquiry = Inquiry::new(&test_settings());
        inquiry.set_user_defined_field("COLOR", "blue");
        assert_eq!(inquiry.fields().get("UDF[COLOR]"), Some("blue"));
    }

    #[test]
    fn test_mode_and_gender_are_wire_values() {
        let mut inquiry = Inquiry::new(&test_settings());
        inquiry.set_mode(InquiryMode::P);
        inquiry.set_gender(Gender::Female);
        assert_eq!(inquiry.fields().get("MODE"), Some("P"));
        assert_eq!(inquiry.fields().get("GENDER"), Some("F"));
    }

    #[test]
    fn test_shared_setters_reachable_through_deref() {
        let mut inquiry = Inquiry::new(&test_settings());
        inquiry.set_order_number("ORD-1");
        inquiry.set_no_payment();
        assert_eq!(inquiry.fields().get("ORDR"), Some("ORD-1"));
        assert_eq!(inquiry.fields().get("PTYP"), Some("NONE"));
    }
}
