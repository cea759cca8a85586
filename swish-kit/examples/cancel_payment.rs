use swish_kit::{
    context::RequestContext,
    gateway::{Environment, GatewayConfig, PaymentGateway},
    transport::Certificates,
};
use tokio_util::sync::CancellationToken;

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
        .expect("Usage: cancel_payment <payment id>");

    // Abort the call on Ctrl-C.
    let token = CancellationToken::new();
    let ctx = RequestContext::background().with_cancellation(token.clone());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    match gateway.cancel(&ctx, &id).await {
        Ok(payment) => tracing::info!("Payment {} is now {}", payment.id, payment.status),
        Err(err) if err.is_transport() => tracing::warn!("Could not reach the gateway: {}", err),
        Err(err) => tracing::error!("Payment cancellation failed: {}", err),
    }
}
