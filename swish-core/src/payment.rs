//! Payment request wire model.
//!
//! All JSON field names here are part of the gateway contract.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{RequiredField, ValidationError},
    types::{Amount, ErrorCode, PaymentStatus},
};

/// A request to create a payment, sent as the body of
/// `POST /paymentrequests`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Swish number of the merchant receiving the payment.
    #[builder(into)]
    pub payee_alias: String,
    /// Phone number of the payer. Omit for m-commerce requests.
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_alias: Option<String>,
    /// Amount to pay, must be greater than zero.
    #[builder(into)]
    pub amount: Amount,
    /// ISO 4217 currency code, e.g. `SEK`.
    #[builder(into)]
    pub currency: String,
    /// HTTPS URL the gateway notifies when the payment changes state.
    #[builder(into)]
    pub callback_url: String,
    /// Merchant side reference of the payment, e.g. an order id.
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_payment_reference: Option<String>,
    /// Free text shown to the payer.
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PaymentRequest {
    /// Structural check of the required fields.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported. No business rules (alias format, currency list) apply here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.payee_alias.is_empty() {
            return Err(RequiredField::PayeeAlias.into());
        }
        if !self.amount.is_positive() {
            return Err(RequiredField::Amount.into());
        }
        if self.currency.is_empty() {
            return Err(RequiredField::Currency.into());
        }
        if self.callback_url.is_empty() {
            return Err(RequiredField::CallbackUrl.into());
        }
        Ok(())
    }
}

/// A payment request as stored by the gateway.
///
/// Only produced by decoding gateway responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub payee_alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_alias: Option<String>,
    pub amount: Amount,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub callback_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_payment_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// Absent until the payment is paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_paid: Option<String>,
    /// Reference assigned by the payer's bank once paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
}

/// A JSON patch operation applied to a payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    pub value: String,
}

impl PatchOperation {
    /// The only operation the gateway accepts: set the status to cancelled.
    pub fn cancel() -> Self {
        PatchOperation {
            op: "replace".to_string(),
            path: "/status".to_string(),
            value: "cancelled".to_string(),
        }
    }
}

/// Structured error returned by the gateway on validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayErrorBody {
    pub error_code: ErrorCode,
    #[serde(default)]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
}

/// The gateway sends either a single error object or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GatewayErrorResponse {
    One(GatewayErrorBody),
    Many(Vec<GatewayErrorBody>),
}

impl GatewayErrorResponse {
    /// The first reported error, if any.
    pub fn into_first(self) -> Option<GatewayErrorBody> {
        match self {
            GatewayErrorResponse::One(body) => Some(body),
            GatewayErrorResponse::Many(bodies) => bodies.into_iter().next(),
        }
    }
}
