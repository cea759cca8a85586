use swish_kit::{
    context::RequestContext,
    gateway::{Environment, GatewayConfig, PaymentGateway},
    payment::PaymentRequest,
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

    let request = PaymentRequest::builder()
        .payee_alias("1234679304")
        .payer_alias("4671234768")
        .amount(1u32)
        .currency("SEK")
        .callback_url("https://myfakehost.se/swishcallback.cfm")
        .payee_payment_reference("0123456789")
        .message("Kingston USB Flash Drive 8 GB")
        .build();

    match gateway.create(&RequestContext::background(), &request).await {
        Ok(created) => tracing::info!(
            "Payment created: id={}, location={}, token={:?}",
            created.instruction_id(),
            created.location,
            created.payment_request_token
        ),
        Err(err) => tracing::error!("Payment creation failed: {}", err),
    }
}
