//! The payment gateway façade.
//!
//! [`PaymentGateway`] creates, retrieves and cancels payment requests. It
//! holds no mutable state: one instance can serve concurrent calls, and
//! clones share the same connection pool.

use bon::Builder;
use http::{
    HeaderMap, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, LOCATION},
};
use serde::de::DeserializeOwned;
use swish_core::{
    location::instruction_id,
    payment::{PatchOperation, Payment, PaymentRequest},
};
use url::Url;

use crate::{
    context::RequestContext,
    errors::{DecodeError, Error, GatewayError, TransportError},
    transport::{Certificates, build_client},
};

pub const PRODUCTION_HOST: &str = "https://cpc.getswish.net";
pub const TEST_HOST: &str = "https://mss.cpc.getswish.net";
pub const DEFAULT_BASE_PATH: &str = "swish-cpcapi/api/v1";
/// Largest response body read from the gateway, 1 MiB.
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

const PAYMENT_REQUESTS: &str = "paymentrequests";
const PAYMENT_REQUEST_TOKEN: &str = "PaymentRequestToken";
const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_PATCH_JSON: &str = "application/json-patch+json";

/// Which gateway installation to talk to when no host override is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    /// The merchant simulator used for integration testing.
    Test,
}

impl Environment {
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_HOST,
            Environment::Test => TEST_HOST,
        }
    }
}

/// How the gateway obtains its HTTP client.
#[derive(Debug, Clone)]
pub enum Transport {
    /// Build a mutual-TLS client from certificate files.
    Certificates(Certificates),
    /// Use a pre-built client as is, e.g. one pointed at a stub server.
    Client(reqwest::Client),
}

impl From<Certificates> for Transport {
    fn from(certificates: Certificates) -> Self {
        Transport::Certificates(certificates)
    }
}

impl From<reqwest::Client> for Transport {
    fn from(client: reqwest::Client) -> Self {
        Transport::Client(client)
    }
}

/// Construction time configuration of a [`PaymentGateway`].
#[derive(Builder, Debug, Clone)]
pub struct GatewayConfig {
    /// Certificates to build the client from, or a client override.
    #[builder(into)]
    pub transport: Transport,
    /// Selects the default host.
    #[builder(default)]
    pub environment: Environment,
    /// Replaces the environment host.
    pub host: Option<Url>,
    /// Replaces the API path prefix, `swish-cpcapi/api/v1` by default.
    #[builder(into)]
    pub base_path: Option<String>,
    /// Responses with a longer body fail with
    /// [`TransportError::BodyTooLarge`].
    #[builder(default = DEFAULT_MAX_BODY_SIZE)]
    pub max_body_size: usize,
}

/// Answer to a successful create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequestCreated {
    /// URL of the new payment request resource.
    pub location: String,
    /// Token for opening the Swish app on the same device. Only issued for
    /// m-commerce requests.
    pub payment_request_token: Option<String>,
}

impl PaymentRequestCreated {
    /// Identifier of the new payment, taken from the location.
    ///
    /// Empty when the location carries none.
    pub fn instruction_id(&self) -> &str {
        instruction_id(&self.location)
    }
}

/// A fully read gateway response.
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// Client for the payment request endpoints of the gateway.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    client: reqwest::Client,
    base_url: Url,
    max_body_size: usize,
}

impl PaymentGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        let client = match config.transport {
            Transport::Certificates(certificates) => build_client(&certificates)?,
            Transport::Client(client) => client,
        };

        let mut base_url = match config.host {
            Some(host) => host,
            None => Url::parse(config.environment.host())
                .map_err(|err| Error::InvalidHost(err.to_string()))?,
        };
        let base_path = config
            .base_path
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidHost(base_url.to_string()));
        }
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(base_path.split('/').filter(|segment| !segment.is_empty()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Payment gateway configured: base_url='{}'", base_url);

        Ok(PaymentGateway {
            client,
            base_url,
            max_body_size: config.max_body_size,
        })
    }

    /// Gateway for the production environment using the given certificates.
    pub fn from_certificates(certificates: Certificates) -> Result<Self, Error> {
        PaymentGateway::new(GatewayConfig::builder().transport(certificates).build())
    }

    /// The URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create a payment request.
    ///
    /// The request is validated first; an invalid request never reaches the
    /// network. On success the gateway returns the location of the new
    /// resource. Use [`PaymentRequestCreated::instruction_id`] to get the
    /// identifier for [`retrieve`](Self::retrieve) and
    /// [`cancel`](Self::cancel).
    ///
    /// Not idempotent: every call creates a new payment.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: &PaymentRequest,
    ) -> Result<PaymentRequestCreated, Error> {
        request.validate()?;

        let builder = self
            .client
            .post(self.endpoint(None))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .json(request);

        let response = self.execute(ctx, builder).await?;

        let location = header_value(&response.headers, LOCATION.as_str(), "Location")?
            .ok_or(DecodeError::MissingHeader("Location"))?;
        let payment_request_token =
            header_value(&response.headers, PAYMENT_REQUEST_TOKEN, PAYMENT_REQUEST_TOKEN)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Payment request created: location='{}'", location);

        Ok(PaymentRequestCreated {
            location,
            payment_request_token,
        })
    }

    /// Fetch the current state of a payment request.
    ///
    /// An empty `id` fails with [`Error::MissingIdentifier`] without a call.
    pub async fn retrieve(&self, ctx: &RequestContext, id: &str) -> Result<Payment, Error> {
        if id.is_empty() {
            return Err(Error::MissingIdentifier);
        }

        let builder = self
            .client
            .get(self.endpoint(Some(id)))
            .header(ACCEPT, CONTENT_TYPE_JSON);

        let response = self.execute(ctx, builder).await?;
        decode(&response)
    }

    /// Cancel a payment request that has not been paid yet.
    ///
    /// Cancelling an already terminal payment is left to the gateway; its
    /// answer is mapped like any other status.
    pub async fn cancel(&self, ctx: &RequestContext, id: &str) -> Result<Payment, Error> {
        if id.is_empty() {
            return Err(Error::MissingIdentifier);
        }

        let builder = self
            .client
            .patch(self.endpoint(Some(id)))
            .header(CONTENT_TYPE, CONTENT_TYPE_PATCH_JSON)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .json(&[PatchOperation::cancel()]);

        let response = self.execute(ctx, builder).await?;
        decode(&response)
    }

    fn endpoint(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(PAYMENT_REQUESTS);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    /// Send the request and read the whole body under the context, then map
    /// non-success statuses.
    async fn execute(
        &self,
        ctx: &RequestContext,
        builder: reqwest::RequestBuilder,
    ) -> Result<RawResponse, Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Sending gateway request: {:?}", builder);

        let max_body_size = self.max_body_size;
        let result = ctx
            .run(async move {
                let mut response = builder.send().await?;
                let status = response.status();
                let headers = response.headers().clone();
                if response
                    .content_length()
                    .is_some_and(|length| length > max_body_size as u64)
                {
                    return Err(TransportError::BodyTooLarge(max_body_size));
                }
                let mut body = Vec::new();
                while let Some(chunk) = response.chunk().await? {
                    if body.len() + chunk.len() > max_body_size {
                        return Err(TransportError::BodyTooLarge(max_body_size));
                    }
                    body.extend_from_slice(&chunk);
                }
                Ok::<_, TransportError>(RawResponse {
                    status,
                    headers,
                    body,
                })
            })
            .await;

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::debug!("Gateway request failed in transport: {}", err);
            }
        }

        let response = result?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Gateway responded: status={}", response.status);

        if response.status.is_success() {
            return Ok(response);
        }

        let error = GatewayError::from_response(response.status, &response.body)?;

        #[cfg(feature = "tracing")]
        tracing::warn!("Gateway rejected request: {}", error);

        Err(error.into())
    }
}

fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, Error> {
    serde_json::from_slice(&response.body)
        .map_err(DecodeError::Json)
        .map_err(Error::from)
}

/// Read a header as text. Absent headers yield `None`.
fn header_value(
    headers: &HeaderMap,
    name: &str,
    label: &'static str,
) -> Result<Option<String>, DecodeError> {
    headers
        .get(name)
        .map(|value| {
            value
                .to_str()
                .map(str::to_string)
                .map_err(|_| DecodeError::InvalidHeader(label))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{Environment, GatewayConfig, PaymentGateway, PaymentRequestCreated};
    use crate::errors::Error;

    fn stub_gateway(host: Option<&str>, base_path: Option<&str>) -> PaymentGateway {
        let config = GatewayConfig::builder()
            .transport(reqwest::Client::new())
            .maybe_host(host.map(|h| Url::parse(h).unwrap()))
            .maybe_base_path(base_path)
            .build();
        PaymentGateway::new(config).unwrap()
    }

    #[test]
    fn test_default_production_endpoint() {
        let gateway = stub_gateway(None, None);
        assert_eq!(
            gateway.endpoint(None).as_str(),
            "https://cpc.getswish.net/swish-cpcapi/api/v1/paymentrequests"
        );
    }

    #[test]
    fn test_test_environment() {
        let config = GatewayConfig::builder()
            .transport(reqwest::Client::new())
            .environment(Environment::Test)
            .build();
        let gateway = PaymentGateway::new(config).unwrap();
        assert_eq!(
            gateway.base_url().as_str(),
            "https://mss.cpc.getswish.net/swish-cpcapi/api/v1"
        );
    }

    #[test]
    fn test_host_and_base_path_overrides() {
        let gateway = stub_gateway(Some("http://127.0.0.1:8080/"), Some("/custom/api/"));
        assert_eq!(
            gateway.endpoint(Some("ABC123")).as_str(),
            "http://127.0.0.1:8080/custom/api/paymentrequests/ABC123"
        );
    }

    #[test]
    fn test_identifier_is_a_single_segment() {
        let gateway = stub_gateway(Some("http://localhost"), None);
        assert_eq!(
            gateway.endpoint(Some("a/b c")).as_str(),
            "http://localhost/swish-cpcapi/api/v1/paymentrequests/a%2Fb%20c"
        );
    }

    #[test]
    fn test_host_without_path_support_is_rejected() {
        let config = GatewayConfig::builder()
            .transport(reqwest::Client::new())
            .host(Url::parse("mailto:merchant@example.com").unwrap())
            .build();
        assert!(matches!(
            PaymentGateway::new(config),
            Err(Error::InvalidHost(_))
        ));
    }

    #[test]
    fn test_created_instruction_id() {
        let created = PaymentRequestCreated {
            location: "https://mss.cpc.getswish.net/swish-cpcapi/api/v1/paymentrequests/0409C36FD37C4DAD838E227C5FFF3859".to_string(),
            payment_request_token: None,
        };
        assert_eq!(created.instruction_id(), "0409C36FD37C4DAD838E227C5FFF3859");
    }
}
