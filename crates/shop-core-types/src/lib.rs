//! Core types shared across the shop facilities
//!
//! This crate provides foundational pieces used by both the error and the
//! logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Redaction**: e-mail masking for log fields and error context

pub mod redact;
pub mod schema;

pub use redact::mask_email;
