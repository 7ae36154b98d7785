#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the Kount RIS (Risk Inquiry Service) protocol.
//!
//! This crate provides the building blocks for assembling RIS transaction
//! inquiries and updates and for reading the line-oriented responses the
//! scoring service returns. It is transport-agnostic; the HTTP POST itself
//! lives in the companion `kount-ris-http` crate.
//!
//! # Overview
//!
//! A caller constructs an [`request::Inquiry`] (initial scoring request) or
//! an [`request::Update`] (refund/chargeback follow-up) from [`Settings`],
//! populates it through typed setters, and hands it to the transport. Each
//! setter maps one semantic parameter onto one or more flat wire fields held
//! in a [`fields::FieldStore`]. The service answers with newline-delimited
//! `KEY=VALUE` text, which [`response::Response`] digests into a queryable
//! map with typed accessors.
//!
//! # Modules
//!
//! - [`data`] - Cart line items and Kount Central event records
//! - [`error`] - Validation errors
//! - [`fields`] - The flat wire-field store backing every request
//! - [`payment`] - Payment method tags and token masking
//! - [`request`] - Inquiry and Update request builders
//! - [`response`] - Response digestion and typed accessors
//! - [`settings`] - Merchant credentials and endpoint configuration

pub mod data;
pub mod error;
pub mod fields;
pub mod payment;
pub mod request;
pub mod response;
pub mod settings;

pub use error::RisError;
pub use settings::Settings;
