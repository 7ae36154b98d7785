//! Plain data records exchanged with the RIS service.

use serde::{Deserialize, Serialize};

/// One line item in a shopping cart.
///
/// All attributes are transmitted verbatim as strings; `price` is the item
/// price in pennies (e.g., `"1299"` for $12.99) and is never parsed to a
/// number by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Merchant-defined product type or category.
    pub product_type: String,
    /// Name of the item.
    pub item_name: String,
    /// Description of the item.
    pub description: String,
    /// Quantity ordered.
    pub quantity: String,
    /// Price of the item in pennies.
    pub price: String,
}

/// A Kount Central threshold event returned with a decision.
///
/// Produced only by response digestion; immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KcEvent {
    /// The decision the event produced.
    pub decision: String,
    /// The threshold expression that fired.
    pub expression: String,
    /// The event code.
    pub code: String,
}
