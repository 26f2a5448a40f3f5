//! Hosted identity provider configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the hosted identity provider.
///
/// The provider serves its own sign-in and sign-out pages and exposes an
/// OIDC UserInfo endpoint that answers for the session cookie it issued.
///
/// Fields with defaults can be omitted when loading from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Hosted sign-in page (e.g., "https://accounts.example.com/sign-in").
    sign_in_url: String,
    /// Hosted sign-out endpoint.
    sign_out_url: String,
    /// OIDC UserInfo endpoint used to resolve the current visitor.
    userinfo_url: String,
    /// Hosted account management page, if the provider offers one.
    #[serde(default)]
    account_url: Option<String>,
    /// Name of the session cookie the provider sets on this site.
    /// Default: "__session"
    #[serde(default = "default_session_cookie")]
    session_cookie: String,
    /// Query parameter carrying the return URL on provider redirects.
    /// Default: "redirect_url"
    #[serde(default = "default_redirect_param")]
    redirect_param: String,
    /// Timeout for UserInfo requests, in seconds.
    /// Default: 5
    #[serde(default = "default_request_timeout_seconds")]
    request_timeout_seconds: u64,
}

fn default_session_cookie() -> String {
    "__session".to_string()
}

fn default_redirect_param() -> String {
    "redirect_url".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    5
}

impl ProviderConfig {
    /// Creates a provider configuration with defaults for optional fields.
    #[must_use]
    pub fn new(sign_in_url: String, sign_out_url: String, userinfo_url: String) -> Self {
        Self {
            sign_in_url,
            sign_out_url,
            userinfo_url,
            account_url: None,
            session_cookie: default_session_cookie(),
            redirect_param: default_redirect_param(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }

    /// Creates a configuration builder for more customization.
    #[must_use]
    pub fn builder(
        sign_in_url: String,
        sign_out_url: String,
        userinfo_url: String,
    ) -> ProviderConfigBuilder {
        ProviderConfigBuilder::new(sign_in_url, sign_out_url, userinfo_url)
    }

    /// Returns the hosted sign-in page URL.
    #[must_use]
    pub fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }

    /// Returns the hosted sign-out endpoint URL.
    #[must_use]
    pub fn sign_out_url(&self) -> &str {
        &self.sign_out_url
    }

    /// Returns the UserInfo endpoint URL.
    #[must_use]
    pub fn userinfo_url(&self) -> &str {
        &self.userinfo_url
    }

    /// Returns the account management page URL.
    #[must_use]
    pub fn account_url(&self) -> Option<&str> {
        self.account_url.as_deref()
    }

    /// Returns the provider session cookie name.
    #[must_use]
    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    /// Returns the return-URL query parameter name.
    #[must_use]
    pub fn redirect_param(&self) -> &str {
        &self.redirect_param
    }

    /// Returns the UserInfo request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Builder for `ProviderConfig`.
#[derive(Debug)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    /// Creates a new builder with required fields.
    #[must_use]
    pub fn new(sign_in_url: String, sign_out_url: String, userinfo_url: String) -> Self {
        Self {
            config: ProviderConfig::new(sign_in_url, sign_out_url, userinfo_url),
        }
    }

    /// Sets the account management page.
    #[must_use]
    pub fn account_url(mut self, url: String) -> Self {
        self.config.account_url = Some(url);
        self
    }

    /// Sets the session cookie name.
    #[must_use]
    pub fn session_cookie(mut self, name: String) -> Self {
        self.config.session_cookie = name;
        self
    }

    /// Sets the return-URL query parameter name.
    #[must_use]
    pub fn redirect_param(mut self, name: String) -> Self {
        self.config.redirect_param = name;
        self
    }

    /// Sets the UserInfo request timeout in seconds.
    #[must_use]
    pub fn request_timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.request_timeout_seconds = seconds;
        self
    }

    /// Builds the `ProviderConfig`.
    #[must_use]
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}
