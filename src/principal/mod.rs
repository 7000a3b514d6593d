//! Authenticated principal and per-request security context.

pub mod types;

pub use types::{AuthenticatedPrincipal, SecurityContext};
