//! Error types for RIS request assembly.

/// Errors raised while assembling a RIS request.
///
/// The RIS protocol itself never rejects a field at build time; the only
/// failures the core can produce are local input-validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RisError {
    /// A payment token was too short to mask.
    ///
    /// Masking keeps the first 6 and last 4 characters, so the token must
    /// be at least 10 characters long.
    #[error("payment token must be at least 10 characters to mask, got {len}")]
    PaymentTokenTooShort {
        /// Character length of the rejected token.
        len: usize,
    },
}
