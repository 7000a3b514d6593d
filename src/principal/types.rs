//! Principal and security-context types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An authenticated caller, as established from a client certificate.
///
/// Carries an empty role set: the login core authenticates, it does not
/// authorize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    username: String,
    roles: HashSet<String>,
}

impl AuthenticatedPrincipal {
    /// Bind a validated username to a principal with no granted roles.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            roles: HashSet::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &HashSet<String> {
        &self.roles
    }
}

/// Per-request holder of the current principal.
///
/// One context per request, passed explicitly through the request pipeline.
/// Holds at most one principal; installing a new one replaces the old.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityContext {
    principal: Option<AuthenticatedPrincipal>,
}

impl SecurityContext {
    /// An unauthenticated context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the principal, replacing any prior value.
    pub fn install(&mut self, principal: AuthenticatedPrincipal) {
        self.principal = Some(principal);
    }

    /// The currently bound principal, if any.
    pub fn current_principal(&self) -> Option<&AuthenticatedPrincipal> {
        self.principal.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// Drop the current principal (logout, session end).
    pub fn clear(&mut self) {
        self.principal = None;
    }
}
