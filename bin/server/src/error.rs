//! Domain error types for server operations.
//!
//! Each error carries details for logs and converts to a user-safe
//! `ServerFnError` for the client.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors while determining the visitor's AuthState.
///
/// Provider failures are not listed here: they degrade to a signed-out
/// presentation instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStateError {
    /// Shared application state was not attached to the request.
    StateUnavailable,
}

impl fmt::Display for AuthStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateUnavailable => write!(f, "application state unavailable"),
        }
    }
}

impl std::error::Error for AuthStateError {}

impl AuthStateError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            AuthStateError::StateUnavailable => ServerFnError::new("Service unavailable"),
        }
    }
}

/// Errors while handing off to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffError {
    /// A provider or public URL could not be built.
    InvalidUrl { details: String },
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { details } => {
                write!(f, "cannot build identity provider URL: {}", details)
            }
        }
    }
}

impl std::error::Error for HandoffError {}
