//! Peer-certificate ingestion.
//!
//! Accepts the client certificate as the transport layer hands it over,
//! either raw DER from the TLS stack or a forwarded header from a
//! TLS-terminating reverse proxy, and exposes the one field the login core
//! reads: the subject distinguished name.

pub mod peer;

pub use peer::{CertificateError, PeerCertificate};
