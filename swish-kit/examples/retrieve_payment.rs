use std::time::Duration;

use swish_kit::{
    context::RequestContext,
    gateway::{Environment, GatewayConfig, PaymentGateway},
    transport::Certificates,
};

fn env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let certificates = Certificates::builder()
        .client_cert_file(env("SWISH_CLIENT_CERT", "/path/to/cert/public.pem"))
        .client_key_file(env("SWISH_CLIENT_KEY", "/path/to/cert/private.key"))
        .ca_cert_file(env("SWISH_CA_CERT", "/path/to/cert/Swish_TLS_RootCA.pem"))
        .build();

    let gateway = PaymentGateway::new(
        GatewayConfig::builder()
            .transport(certificates)
            .environment(Environment::Test)
            .build(),
    )
    .expect("Failed to set up the payment gateway");

    let id = std::env::args()
        .nth(1)
        .expect("Usage: retrieve_payment <payment id>");
    let ctx = RequestContext::background().with_timeout(Duration::from_secs(10));

    match gateway.retrieve(&ctx, &id).await {
        Ok(payment) => tracing::info!(
            "Payment {}: status={}, amount={} {}, paid={:?}",
            payment.id,
            payment.status,
            payment.amount,
            payment.currency,
            payment.date_paid
        ),
        Err(err) => tracing::error!("Payment retrieval failed: {}", err),
    }
}
