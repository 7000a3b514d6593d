//! Certificate decoding and subject extraction.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;
use x509_parser::prelude::*;

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// Errors decoding or reading a presented client certificate.
#[derive(Debug, Error)]
pub enum CertificateError {
    /// A PEM block was missing its BEGIN or END marker.
    #[error("invalid PEM: missing {0} marker")]
    MissingPemMarker(&'static str),
    /// The certificate payload was not valid base64.
    #[error("invalid certificate base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The DER bytes did not parse as an X.509 certificate.
    #[error("invalid X.509 certificate: {0}")]
    X509(String),
}

/// A client certificate as presented by the transport layer.
///
/// Opaque to the login core except for its subject DN. Chain validation,
/// revocation, and validity periods are the transport layer's concern and
/// have already been settled by the time this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerCertificate {
    der: Vec<u8>,
}

impl PeerCertificate {
    /// Wrap a DER-encoded certificate as handed over by the TLS stack.
    pub fn from_der(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Decode a certificate forwarded by a TLS-terminating proxy.
    ///
    /// Proxies commonly URL-encode the PEM before putting it in a header;
    /// raw base64-encoded DER is accepted as well.
    pub fn from_forwarded_header(value: &str) -> Result<Self, CertificateError> {
        let value = value.trim();

        let decoded = if value.contains('%') {
            urlencoding::decode(value)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| value.to_string())
        } else {
            value.to_string()
        };

        let der = if decoded.contains(PEM_BEGIN) {
            decode_pem(&decoded)?
        } else {
            STANDARD.decode(decoded.as_bytes())?
        };

        Ok(Self { der })
    }

    /// Render the subject distinguished name as `key=value, key=value, ...`.
    pub fn subject_dn(&self) -> Result<String, CertificateError> {
        let (_, cert) = X509Certificate::from_der(&self.der)
            .map_err(|e| CertificateError::X509(format!("{:?}", e)))?;

        Ok(cert.subject().to_string())
    }
}

/// Extract the DER payload from a PEM certificate block.
fn decode_pem(pem: &str) -> Result<Vec<u8>, CertificateError> {
    let start = pem
        .find(PEM_BEGIN)
        .ok_or(CertificateError::MissingPemMarker("BEGIN"))?;

    let body = &pem[start + PEM_BEGIN.len()..];
    let end = body
        .find(PEM_END)
        .ok_or(CertificateError::MissingPemMarker("END"))?;

    let base64_content: String = body[..end].chars().filter(|c| !c.is_whitespace()).collect();

    Ok(STANDARD.decode(base64_content.as_bytes())?)
}
