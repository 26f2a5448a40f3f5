//! Hand-off URLs for the provider's hosted sign-in and sign-out flows.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use codex_tutorial_core::Result;
use reqwest::Url;

/// URL of the hosted sign-in page, returning to `return_to` afterwards.
pub fn sign_in_url(config: &ProviderConfig, return_to: &str) -> Result<String, ProviderError> {
    with_return_url(config.sign_in_url(), config.redirect_param(), return_to)
}

/// URL of the hosted sign-out endpoint, returning to `return_to` afterwards.
pub fn sign_out_url(config: &ProviderConfig, return_to: &str) -> Result<String, ProviderError> {
    with_return_url(config.sign_out_url(), config.redirect_param(), return_to)
}

/// Resolves a site-local `path` against the public base URL of this site.
///
/// The result must keep the origin of `public_url`.
pub fn absolute_url(public_url: &str, path: &str) -> Result<String, ProviderError> {
    let base = parse(public_url)?;
    let url = base.join(path).map_err(|e| ProviderError::Configuration {
        reason: format!("cannot resolve '{path}' against '{public_url}': {e}"),
    })?;
    if url.origin() != base.origin() {
        return Err(ProviderError::OffSite {
            path: path.to_string(),
            resolved: url.into(),
        }
        .into());
    }
    Ok(url.into())
}

fn with_return_url(endpoint: &str, param: &str, return_to: &str) -> Result<String, ProviderError> {
    let mut url = parse(endpoint)?;
    url.query_pairs_mut().append_pair(param, return_to);
    Ok(url.into())
}

fn parse(url: &str) -> Result<Url, ProviderError> {
    Ok(Url::parse(url).map_err(|e| ProviderError::Configuration {
        reason: format!("invalid URL '{url}': {e}"),
    })?)
}
