#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the Kount RIS (Risk Inquiry Service) protocol.
//!
//! This crate carries a populated [`kount_ris::request::Inquiry`] or
//! [`kount_ris::request::Update`] to the RIS endpoint as a single
//! form-encoded POST and returns the digested
//! [`kount_ris::response::Response`]. One attempt per call: no retries, no
//! backoff, no pooling beyond what reqwest provides. The caller owns any
//! retry policy.
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod client;
pub mod constants;
pub mod error;

pub use client::{RisClient, RisClientConfig};
pub use error::RisHttpError;
