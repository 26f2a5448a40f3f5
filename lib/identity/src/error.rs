//! Error types for the identity crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `ProviderError`: failures talking to, or configuring, the hosted provider

use std::fmt;

/// Errors from identity provider operations.
///
/// Rejected or expired sessions are not errors; they resolve to a signed-out
/// state. These variants cover the provider being unreachable or misconfigured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// A configured provider URL is invalid.
    Configuration { reason: String },
    /// The request to the provider failed in transport.
    Request { endpoint: String, reason: String },
    /// The provider answered with an unexpected status.
    UnexpectedStatus { endpoint: String, status: u16 },
    /// The provider's response body could not be understood.
    InvalidResponse { endpoint: String, reason: String },
    /// A return path resolved to a different origin than this site.
    OffSite { path: String, resolved: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => {
                write!(f, "identity provider configuration error: {reason}")
            }
            Self::Request { endpoint, reason } => {
                write!(f, "request to '{endpoint}' failed: {reason}")
            }
            Self::UnexpectedStatus { endpoint, status } => {
                write!(f, "'{endpoint}' answered with unexpected status {status}")
            }
            Self::InvalidResponse { endpoint, reason } => {
                write!(f, "invalid response from '{endpoint}': {reason}")
            }
            Self::OffSite { path, resolved } => {
                write!(f, "return path '{path}' leaves this site for '{resolved}'")
            }
        }
    }
}

impl std::error::Error for ProviderError {}
