//! The transaction update builder.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::request::{Request, SDK_TYPE};
use crate::settings::Settings;

/// Mode of a transaction update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UpdateMode {
    /// Update without a re-evaluated response.
    #[default]
    U,
    /// Update with a re-evaluated response.
    X,
}

impl UpdateMode {
    /// Returns the wire value transmitted as `MODE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::U => "U",
            Self::X => "X",
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refund or chargeback outcome of a previously scored transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefundChargebackStatus {
    /// Transmitted as `R`.
    Refund,
    /// Transmitted as `C`.
    Chargeback,
}

impl RefundChargebackStatus {
    /// Returns the wire value transmitted as `RFCB`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refund => "R",
            Self::Chargeback => "C",
        }
    }
}

/// Builder for a follow-up request reporting a transaction outcome.
///
/// Created with mode `U` and the fixed SDK identifier. Derefs to
/// [`Request`], so the shared setters are available directly.
#[derive(Debug, Clone)]
pub struct Update {
    request: Request,
}

impl Update {
    /// Creates an update with the default mode and SDK tag.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let mut update = Self {
            request: Request::new(settings),
        };
        update.set_mode(UpdateMode::U);
        update.set_param("SDK", SDK_TYPE);
        update
    }

    /// Sets the update mode.
    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.request.set_param("MODE", mode.as_str());
    }

    /// Sets the transaction id received from the initial inquiry.
    pub fn set_transaction_id(&mut self, transaction_id: impl Into<String>) {
        self.request.set_param("TRAN", transaction_id);
    }

    /// Sets the refund/chargeback status of this transaction.
    pub fn set_refund_chargeback(&mut self, status: RefundChargebackStatus) {
        self.request.set_param("RFCB", status.as_str());
    }
}

impl Deref for Update {
    type Target = Request;

    fn deref(&self) -> &Self::Target {
        &self.request
    }
}

impl DerefMut for Update {
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

    #[test]
    fn test_new_update_defaults() {
        let update = Update::new(&test_settings());
        assert_eq!(update.fields().get("MODE"), Some("U"));
        assert_eq!(update.fields().get("SDK"), Some("CUST"));
        assert_eq!(update.fields().get("MERC"), Some("123456"));
        assert!(!update.fields().contains("CURR"));
    }

    #[test]
    fn test_update_setters() {
        let mut update = Update::new(&test_settings());
        update.set_mode(UpdateMode::X);
        update.set_transaction_id("TRAN-42");
        update.set_refund_chargeback(RefundChargebackStatus::Chargeback);
        assert_eq!(update.fields().get("MODE"), Some("X"));
        assert_eq!(update.fields().get("TRAN"), Some("TRAN-42"));
        assert_eq!(update.fields().get("RFCB"), Some("C"));
    }
}
