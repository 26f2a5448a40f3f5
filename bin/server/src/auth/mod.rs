//! Hand-off to the hosted identity provider.
//!
//! This module provides:
//! - Redirect routes into the provider's hosted sign-in, sign-out and
//!   account pages
//! - AuthState resolution for incoming requests
//!
//! The provider owns credentials, sessions and token verification. Nothing
//! here stores a session or inspects a token beyond forwarding it.

pub mod routes;
pub mod session;

use codex_tutorial_identity::{IdentityProvider, ProviderConfig};
use std::sync::Arc;

pub use routes::{account, sign_in, sign_out};

/// Shared application state.
pub struct AppState {
    /// Resolves AuthState for a provider session.
    pub provider: Arc<dyn IdentityProvider>,
    /// Where the provider lives.
    pub provider_config: ProviderConfig,
    /// Public base URL of this site, used for provider return URLs.
    pub public_url: String,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        provider_config: ProviderConfig,
        public_url: String,
    ) -> Self {
        Self {
            provider,
            provider_config,
            public_url,
        }
    }
}
