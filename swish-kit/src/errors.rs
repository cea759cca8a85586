//! Error types for the payment gateway client.
//!
//! Every failure tells the caller which layer failed: client setup, local
//! validation, the network, the gateway itself, or the shape of its answer.

use std::path::PathBuf;

use http::StatusCode;
use swish_core::{
    errors::ValidationError,
    payment::{GatewayErrorBody, GatewayErrorResponse},
};

/// Errors returned by [`PaymentGateway`](crate::gateway::PaymentGateway) and
/// its construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client certificate or private key could not be loaded.
    #[error("Failed to load client certificate: {0}")]
    CertificateLoad(#[source] CertificateError),

    /// The CA bundle could not be read or holds no usable certificate.
    #[error("Failed to load trust store: {0}")]
    TrustStore(#[source] CertificateError),

    /// The configured host cannot serve as a base URL.
    #[error("Invalid gateway host: {0}")]
    InvalidHost(String),

    /// The payment request failed pre-flight validation. Nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An empty payment request identifier was passed. Nothing was sent.
    #[error("Payment request identifier is required")]
    MissingIdentifier,

    /// The gateway could not be reached or the call was aborted.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The gateway answered with a non-success status.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The gateway answered with a body or headers of an unexpected shape.
    #[error("Failed to decode gateway response: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Whether the gateway was never reached or the call was aborted.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The gateway rejection, if this error is one.
    pub fn as_gateway(&self) -> Option<&GatewayError> {
        match self {
            Error::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

/// Why a certificate file could not be turned into TLS material.
#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse PEM data: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("no certificate found in {0}")]
    Empty(PathBuf),

    #[error("cannot build TLS client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Network level failures, kept apart from gateway rejections.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("response body exceeds {0} bytes")]
    BodyTooLarge(usize),
}

impl TransportError {
    /// Whether the call was cut short by the caller's context or a timeout.
    pub fn is_aborted(&self) -> bool {
        match self {
            TransportError::Request(err) => err.is_timeout(),
            TransportError::Cancelled | TransportError::DeadlineExceeded => true,
            TransportError::BodyTooLarge(_) => false,
        }
    }
}

/// The response did not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing {0} header")]
    MissingHeader(&'static str),

    #[error("{0} header is not valid text")]
    InvalidHeader(&'static str),
}

/// Rejections reported by the gateway through its HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("The payment request was malformed (400)")]
    BadRequest,

    #[error(
        "Authentication failed: the certificate is invalid or its Swish number is not enrolled (401)"
    )]
    Unauthorized,

    #[error("The payeeAlias does not match the merchant's Swish number (403)")]
    Forbidden,

    #[error("The Content-Type header was not accepted (415)")]
    UnsupportedMediaType,

    #[error("Validation failed: {}, {} (422)", .0.error_code, .0.error_message)]
    UnprocessableEntity(GatewayErrorBody),

    #[error("Too many requests (429)")]
    TooManyRequests,

    #[error("The gateway failed to process the request (500)")]
    InternalServerError,

    #[error("The gateway returned {status}: {body}")]
    Generic { status: StatusCode, body: String },
}

impl GatewayError {
    /// Map a non-success status to its error kind.
    ///
    /// Only `422` reads the body, which must hold the gateway's structured
    /// error. Any other status ignores it except to keep it for `Generic`.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Result<Self, DecodeError> {
        let error = match status {
            StatusCode::BAD_REQUEST => GatewayError::BadRequest,
            StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
            StatusCode::FORBIDDEN => GatewayError::Forbidden,
            StatusCode::UNSUPPORTED_MEDIA_TYPE => GatewayError::UnsupportedMediaType,
            StatusCode::UNPROCESSABLE_ENTITY => {
                let response: GatewayErrorResponse = serde_json::from_slice(body)?;
                let first = response.into_first().ok_or_else(|| {
                    <serde_json::Error as serde::de::Error>::custom("empty error list")
                })?;
                GatewayError::UnprocessableEntity(first)
            }
            StatusCode::TOO_MANY_REQUESTS => GatewayError::TooManyRequests,
            StatusCode::INTERNAL_SERVER_ERROR => GatewayError::InternalServerError,
            status => GatewayError::Generic {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            },
        };
        Ok(error)
    }

    /// The HTTP status the gateway answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::Forbidden => StatusCode::FORBIDDEN,
            GatewayError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            GatewayError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Generic { status, .. } => *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;

    use super::{DecodeError, GatewayError};

    #[test]
    fn test_fixed_status_mapping() {
        let cases = [
            (StatusCode::BAD_REQUEST, GatewayError::BadRequest),
            (StatusCode::UNAUTHORIZED, GatewayError::Unauthorized),
            (StatusCode::FORBIDDEN, GatewayError::Forbidden),
            (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                GatewayError::UnsupportedMediaType,
            ),
            (StatusCode::TOO_MANY_REQUESTS, GatewayError::TooManyRequests),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                GatewayError::InternalServerError,
            ),
        ];

        for (status, expected) in cases {
            let error = GatewayError::from_response(status, b"").unwrap();
            assert_eq!(error, expected);
            assert_eq!(error.status(), status);
        }
    }

    #[test]
    fn test_unprocessable_entity_embeds_gateway_error() {
        let body = json!({
            "errorCode": "FF08",
            "errorMessage": "PayeePaymentReference is invalid."
        })
        .to_string();

        let error =
            GatewayError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body.as_bytes()).unwrap();

        let GatewayError::UnprocessableEntity(ref detail) = error else {
            panic!("expected UnprocessableEntity, got {error:?}");
        };
        assert_eq!(detail.error_code.as_str(), "FF08");
        assert_eq!(detail.error_message, "PayeePaymentReference is invalid.");
        assert!(error.to_string().contains("FF08"));
    }

    #[test]
    fn test_unprocessable_entity_bad_body() {
        let result = GatewayError::from_response(StatusCode::UNPROCESSABLE_ENTITY, b"oops");
        assert!(matches!(result, Err(DecodeError::Json(_))));

        let result = GatewayError::from_response(StatusCode::UNPROCESSABLE_ENTITY, b"[]");
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_other_status_is_generic() {
        let error = GatewayError::from_response(StatusCode::NOT_FOUND, b"not here").unwrap();
        assert_eq!(
            error,
            GatewayError::Generic {
                status: StatusCode::NOT_FOUND,
                body: "not here".to_string()
            }
        );
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
