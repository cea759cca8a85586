//! # Swish Kit
//!
//! A client for the Swish payment request API. It creates, retrieves and
//! cancels payment requests over mutual TLS, validates requests before they
//! leave the process, and reports every failure as a typed [`errors::Error`]
//! telling which layer failed.
//!
//! ## Core Components Overview
//!
//! - **[`transport`]**: Builds the mutual-TLS HTTP client from PEM files.
//! - **[`gateway`]**: The [`PaymentGateway`](gateway::PaymentGateway) façade and its configuration.
//! - **[`context`]**: Cancellation and deadlines for individual calls.
//! - **[`errors`]**: The error taxonomy, including the mapping of gateway status codes.
//! - **[`payment`]**, **[`types`]**, **[`location`]**: The wire model re-exported from `swish-core`.
//!
//! ## Create, Retrieve and Cancel
//!
//! ```rust,no_run
//! use swish_kit::{
//!     context::RequestContext,
//!     gateway::{Environment, GatewayConfig, PaymentGateway},
//!     payment::PaymentRequest,
//!     transport::Certificates,
//! };
//!
//! # async fn run() -> Result<(), swish_kit::errors::Error> {
//! let gateway = PaymentGateway::new(
//!     GatewayConfig::builder()
//!         .transport(
//!             Certificates::builder()
//!                 .client_cert_file("/path/to/cert/public.pem")
//!                 .client_key_file("/path/to/cert/private.key")
//!                 .ca_cert_file("/path/to/cert/Swish_TLS_RootCA.pem")
//!                 .build(),
//!         )
//!         .environment(Environment::Test)
//!         .build(),
//! )?;
//!
//! let ctx = RequestContext::background();
//! let created = gateway
//!     .create(
//!         &ctx,
//!         &PaymentRequest::builder()
//!             .payee_alias("1234679304")
//!             .payer_alias("4671234768")
//!             .amount(100u32)
//!             .currency("SEK")
//!             .callback_url("https://myfakehost.se/swishcallback.cfm")
//!             .build(),
//!     )
//!     .await?;
//!
//! let payment = gateway.retrieve(&ctx, created.instruction_id()).await?;
//! println!("status: {}", payment.status);
//!
//! let cancelled = gateway.cancel(&ctx, &payment.id).await?;
//! println!("status: {}", cancelled.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing Against a Stub
//!
//! Pass a plain `reqwest::Client` as the transport and point `host` at the
//! stub server. No certificates are loaded in that case.

pub mod context;
pub mod errors;
pub mod gateway;
pub mod transport;

pub mod payment {
    pub use swish_core::payment::*;
}

pub mod types {
    pub use swish_core::types::*;
}

pub mod location {
    pub use swish_core::location::*;
}

pub use swish_core::errors::{RequiredField, ValidationError};
