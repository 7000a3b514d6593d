//! Subject-DN string parsing.

use thiserror::Error;
use tracing::warn;

/// A single `key=value` attribute of a distinguished name.
///
/// Keys are not unique within a DN, and attribute ordering is significant;
/// parsing preserves the original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnAttribute {
    pub key: String,
    pub value: String,
}

/// A DN attribute token that did not split into `key=value`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed DN attribute token: {token:?}")]
pub struct MalformedAttributeError {
    /// The offending token as it appeared in the subject string.
    pub token: String,
}

/// Parse a subject DN, failing on the first malformed attribute token.
pub fn parse_dn(dn: &str) -> Result<Vec<DnAttribute>, MalformedAttributeError> {
    dn.split(',').map(parse_token).collect()
}

/// Parse a subject DN, skipping malformed attribute tokens.
pub fn parse_dn_lenient(dn: &str) -> Vec<DnAttribute> {
    dn.split(',')
        .filter_map(|token| match parse_token(token) {
            Ok(attr) => Some(attr),
            Err(e) => {
                warn!(token = %e.token, "Skipping malformed DN attribute");
                None
            }
        })
        .collect()
}

/// Split one attribute token on the first `=`.
///
/// Surrounding whitespace is trimmed from both key and value, so
/// `"CN=alice"` and `" CN = alice "` produce the same attribute.
fn parse_token(token: &str) -> Result<DnAttribute, MalformedAttributeError> {
    match token.split_once('=') {
        Some((key, value)) => Ok(DnAttribute {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        }),
        None => Err(MalformedAttributeError {
            token: token.to_string(),
        }),
    }
}
