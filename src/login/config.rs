//! Login configuration.

use serde::{Deserialize, Serialize};

/// Client-certificate login configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Fail the whole DN parse on a malformed attribute token instead of
    /// skipping it.
    #[serde(default)]
    pub strict_dn: bool,

    /// Header containing the client certificate (from proxy).
    /// Default: X-Client-Cert
    #[serde(default = "default_cert_header")]
    pub client_cert_header: String,

    /// Log certificate subject and resolved username for debugging.
    #[serde(default)]
    pub log_certs: bool,
}

fn default_cert_header() -> String {
    "X-Client-Cert".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            strict_dn: false,
            client_cert_header: default_cert_header(),
            log_certs: false,
        }
    }
}

impl AuthConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.client_cert_header.trim().is_empty() {
            return Err("client_cert_header must not be empty".to_string());
        }
        Ok(())
    }
}

/// JSON configuration for dynamic reconfiguration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AuthConfigJson {
    pub strict_dn: Option<bool>,
    pub client_cert_header: Option<String>,
    pub log_certs: Option<bool>,
}

impl AuthConfigJson {
    /// Apply JSON config to existing config.
    pub fn apply_to(&self, config: &mut AuthConfig) {
        if let Some(strict) = self.strict_dn {
            config.strict_dn = strict;
        }
        if let Some(ref header) = self.client_cert_header {
            config.client_cert_header = header.clone();
        }
        if let Some(log) = self.log_certs {
            config.log_certs = log;
        }
    }
}
