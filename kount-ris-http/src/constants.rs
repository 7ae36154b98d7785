//! Fixed wire constants for the RIS HTTP transport.

use std::time::Duration;

/// Header carrying the merchant API key.
pub const API_KEY_HEADER: &str = "X-Kount-Api-Key";

/// Header carrying the merchant id.
pub const MERCHANT_ID_HEADER: &str = "X-Kount-Merc-Id";

/// Default whole-call connection timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
