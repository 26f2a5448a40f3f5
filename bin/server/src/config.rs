//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`ProviderConfig`](codex_tutorial_identity::ProviderConfig) for the
//! identity provider settings, read from `PROVIDER__*` variables.

use codex_tutorial_identity::ProviderConfig;
use config::{ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Public base URL of this site (e.g., "https://codex.example.com").
    /// The provider returns visitors here after sign-in and sign-out.
    pub public_url: String,

    /// Hosted identity provider configuration.
    pub provider: ProviderConfig,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(
            config::Config::builder().add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    /// Builds and deserializes configuration from prepared sources.
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
