//! The login flow, from presented certificate to authenticated principal.

use thiserror::Error;
use tracing::{debug, info};

use crate::cert::{CertificateError, PeerCertificate};
use crate::dn::{self, MalformedAttributeError};
use crate::identity;
use crate::principal::{AuthenticatedPrincipal, SecurityContext};

use super::config::AuthConfig;

/// Terminal outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// An authenticated principal was installed; proceed to the landing view.
    Proceed,
    /// No usable identity; present the login view. The security context is
    /// left untouched.
    ShowLogin,
}

/// A presented credential that could not be decoded under strict parsing.
///
/// Only produced when [`AuthConfig::strict_dn`] is set; the lenient default
/// degrades every malformed credential to [`LoginOutcome::ShowLogin`].
/// Distinct from "no credential", which is never an error.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("unreadable client certificate: {0}")]
    Certificate(#[from] CertificateError),
    #[error("malformed subject DN: {0}")]
    MalformedAttribute(#[from] MalformedAttributeError),
}

/// Authenticate a request from its presented certificate chain.
///
/// Only the first certificate (the end-entity leaf) is considered; the rest
/// of the chain is ignored. An empty slice means the transport layer saw no
/// client certificate, and the caller stays unauthenticated.
pub fn login(
    config: &AuthConfig,
    certs: &[PeerCertificate],
    ctx: &mut SecurityContext,
) -> Result<LoginOutcome, CredentialError> {
    let cert = match certs.first() {
        Some(cert) => cert,
        None => {
            debug!("No client certificate presented");
            return Ok(LoginOutcome::ShowLogin);
        }
    };

    let subject = match cert.subject_dn() {
        Ok(subject) => subject,
        Err(e) if config.strict_dn => return Err(e.into()),
        Err(e) => {
            debug!(error = %e, "Unreadable client certificate");
            return Ok(LoginOutcome::ShowLogin);
        }
    };

    if config.log_certs {
        debug!(subject_dn = %subject, "Client certificate subject");
    }

    let entries = if config.strict_dn {
        dn::parse_dn(&subject)?
    } else {
        dn::parse_dn_lenient(&subject)
    };

    let username = match identity::extract_username(&entries) {
        Some(username) => username,
        None => {
            debug!("No usable CN in certificate subject");
            return Ok(LoginOutcome::ShowLogin);
        }
    };

    info!(username = %username, "Client certificate login");

    ctx.install(AuthenticatedPrincipal::new(username));
    Ok(LoginOutcome::Proceed)
}
