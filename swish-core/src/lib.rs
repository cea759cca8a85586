//! Swish core library.
//!
//! Transport-free building blocks for the Swish payment request API: the
//! JSON wire model, pre-flight validation of payment requests, and the
//! helper that turns a resource location into a payment identifier.
//!
//! The HTTP client lives in `swish-kit`, which re-exports everything here.

pub mod errors;
pub mod location;
pub mod payment;
pub mod types;
