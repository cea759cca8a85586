use std::{io::Write, path::PathBuf};

use swish_kit::{
    errors::{CertificateError, Error},
    gateway::PaymentGateway,
    transport::{Certificates, build_client},
};
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_certificates() -> Certificates {
    Certificates::builder()
        .client_cert_file(fixture("client.pem"))
        .client_key_file(fixture("client.key"))
        .ca_cert_file(fixture("ca.pem"))
        .build()
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_build_client_from_pem_files() {
    assert!(build_client(&fixture_certificates()).is_ok());
    assert!(PaymentGateway::from_certificates(fixture_certificates()).is_ok());
}

#[test]
fn test_missing_client_certificate() {
    let certificates = Certificates {
        client_cert_file: fixture("does-not-exist.pem"),
        ..fixture_certificates()
    };

    let err = build_client(&certificates).unwrap_err();
    assert!(matches!(
        err,
        Error::CertificateLoad(CertificateError::Read { .. })
    ));
}

#[test]
fn test_unparseable_private_key() {
    let key = temp_file("this is not a private key\n");
    let certificates = Certificates {
        client_key_file: key.path().to_path_buf(),
        ..fixture_certificates()
    };

    let err = build_client(&certificates).unwrap_err();
    assert!(matches!(
        err,
        Error::CertificateLoad(CertificateError::Parse(_))
    ));
}

#[test]
fn test_certificate_and_key_mismatch() {
    let certificates = Certificates {
        client_key_file: fixture("other.key"),
        ..fixture_certificates()
    };

    let err = build_client(&certificates).unwrap_err();
    assert!(matches!(
        err,
        Error::CertificateLoad(CertificateError::Client(_))
    ));
}

#[test]
fn test_missing_ca_bundle() {
    let certificates = Certificates {
        ca_cert_file: fixture("missing-ca.pem"),
        ..fixture_certificates()
    };

    let err = build_client(&certificates).unwrap_err();
    assert!(matches!(err, Error::TrustStore(CertificateError::Read { .. })));
}

#[test]
fn test_ca_bundle_without_certificates() {
    let empty = temp_file("no certificates in here\n");
    let certificates = Certificates {
        ca_cert_file: empty.path().to_path_buf(),
        ..fixture_certificates()
    };
    let err = build_client(&certificates).unwrap_err();
    assert!(matches!(err, Error::TrustStore(CertificateError::Empty(_))));

    // A private key is PEM but not a certificate.
    let certificates = Certificates {
        ca_cert_file: fixture("client.key"),
        ..fixture_certificates()
    };
    let err = build_client(&certificates).unwrap_err();
    assert!(matches!(err, Error::TrustStore(CertificateError::Empty(_))));
}

#[test]
fn test_setup_error_aborts_gateway_construction() {
    let certificates = Certificates {
        ca_cert_file: fixture("missing-ca.pem"),
        ..fixture_certificates()
    };

    assert!(matches!(
        PaymentGateway::from_certificates(certificates),
        Err(Error::TrustStore(_))
    ));
}
