//! Resolving the current visitor's AuthState from the hosted provider.

use crate::claims::UserInfoClaims;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use codex_tutorial_core::{AuthState, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

/// Source of truth for whether a visitor is signed in.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the AuthState for the provider session token, if any.
    ///
    /// A missing, rejected or expired session resolves to
    /// [`AuthState::SignedOut`]; errors mean the provider could not answer.
    async fn resolve(&self, session_token: Option<&str>) -> Result<AuthState, ProviderError>;
}

/// Provider reached over HTTP through its OIDC UserInfo endpoint.
///
/// Token validation happens at the provider; a successful UserInfo response
/// is taken as proof of a live session.
#[derive(Debug, Clone)]
pub struct HostedIdentityProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl HostedIdentityProvider {
    /// Creates a provider client from configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProviderError::Configuration {
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl IdentityProvider for HostedIdentityProvider {
    #[instrument(skip_all, fields(has_token = session_token.is_some()))]
    async fn resolve(&self, session_token: Option<&str>) -> Result<AuthState, ProviderError> {
        let Some(token) = session_token.filter(|t| !t.is_empty()) else {
            return Ok(AuthState::signed_out());
        };

        let endpoint = self.config.userinfo_url();
        let response = self
            .http
            .get(endpoint)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ProviderError::Request {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!(status = status.as_u16(), "provider rejected session");
            return Ok(AuthState::signed_out());
        }
        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let claims: UserInfoClaims =
            response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                })?;

        debug!(subject = %claims.sub, "provider confirmed session");
        Ok(AuthState::signed_in(claims.into_display_identity()))
    }
}
