//! Common-name selection and validation.

use tracing::debug;

use crate::dn::DnAttribute;

/// Attribute key conventionally holding the subject's identity.
const COMMON_NAME_KEY: &str = "cn";

/// Select the username from parsed DN attributes.
///
/// The first attribute whose key equals `cn` (ASCII-case-insensitive,
/// surrounding whitespace ignored) wins; later CN attributes are ignored.
/// Returns `None` when no CN attribute exists or its value is empty after
/// trimming. Absence of a usable identity is a normal outcome, not a fault.
pub fn extract_username(entries: &[DnAttribute]) -> Option<String> {
    let entry = entries
        .iter()
        .find(|entry| entry.key.trim().eq_ignore_ascii_case(COMMON_NAME_KEY))?;

    let value = entry.value.trim();
    if value.is_empty() {
        debug!("Subject CN attribute present but empty");
        return None;
    }

    Some(value.to_string())
}
