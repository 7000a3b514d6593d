//! Client-certificate login core.
//!
//! Authenticates a web client from the certificate it presented during a
//! mutually-authenticated TLS handshake: the certificate subject's
//! distinguished name is parsed, the common-name attribute is selected and
//! validated, and the resulting username is bound into the request's
//! security context as an authenticated principal.
//!
//! TLS termination, trust-chain validation, session transport, and
//! authorization all belong to the surrounding system. This crate only
//! establishes who the caller claims to be, based on a certificate the
//! transport layer has already accepted.

pub mod cert;
pub mod dn;
pub mod identity;
pub mod login;
pub mod principal;

pub use cert::{CertificateError, PeerCertificate};
pub use dn::{parse_dn, parse_dn_lenient, DnAttribute, MalformedAttributeError};
pub use identity::extract_username;
pub use login::{login, AuthConfig, AuthConfigJson, CredentialError, LoginOutcome};
pub use principal::{AuthenticatedPrincipal, SecurityContext};

#[cfg(test)]
pub(crate) mod test_certs;
