//! Mutual-TLS HTTP client construction.
//!
//! The client presents the merchant certificate on every connection and
//! trusts only the certificates of the supplied CA bundle. No network I/O
//! happens here.

use std::path::{Path, PathBuf};

use bon::Builder;

use crate::errors::{CertificateError, Error};

/// Locations of the PEM files used for mutual TLS.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct Certificates {
    /// Merchant client certificate (chain).
    #[builder(into)]
    pub client_cert_file: PathBuf,
    /// Private key matching the client certificate.
    #[builder(into)]
    pub client_key_file: PathBuf,
    /// CA bundle used as the sole trust anchor for the gateway.
    #[builder(into)]
    pub ca_cert_file: PathBuf,
}

/// Build a mutual-TLS client from the given certificate files.
///
/// Fails with [`Error::CertificateLoad`] when the certificate and key cannot
/// be read, parsed, or used together, and with [`Error::TrustStore`] when the
/// CA bundle cannot be read or holds no certificate.
pub fn build_client(certificates: &Certificates) -> Result<reqwest::Client, Error> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Loading client certificate: cert='{}', key='{}', ca='{}'",
        certificates.client_cert_file.display(),
        certificates.client_key_file.display(),
        certificates.ca_cert_file.display()
    );

    let identity = load_identity(
        &certificates.client_cert_file,
        &certificates.client_key_file,
    )
    .map_err(Error::CertificateLoad)?;
    let roots = load_trust_store(&certificates.ca_cert_file).map_err(Error::TrustStore)?;

    roots
        .into_iter()
        .fold(
            reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()),
            |builder, certificate| builder.add_root_certificate(certificate),
        )
        .use_rustls_tls()
        .tls_built_in_root_certs(false)
        .identity(identity)
        .https_only(true)
        .build()
        .map_err(|err| Error::CertificateLoad(CertificateError::Client(err)))
}

fn read(path: &Path) -> Result<Vec<u8>, CertificateError> {
    std::fs::read(path).map_err(|source| CertificateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_identity(cert_file: &Path, key_file: &Path) -> Result<reqwest::Identity, CertificateError> {
    let certificate = read(cert_file)?;
    let mut pem = read(key_file)?;
    pem.push(b'\n');
    pem.extend_from_slice(&certificate);

    reqwest::Identity::from_pem(&pem).map_err(CertificateError::Parse)
}

fn load_trust_store(ca_file: &Path) -> Result<Vec<reqwest::Certificate>, CertificateError> {
    let bundle = read(ca_file)?;
    let certificates =
        reqwest::Certificate::from_pem_bundle(&bundle).map_err(CertificateError::Parse)?;

    if certificates.is_empty() {
        return Err(CertificateError::Empty(ca_file.to_path_buf()));
    }
    Ok(certificates)
}
