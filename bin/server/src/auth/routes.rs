//! Hand-off routes for sign-in, sign-out and account management.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use codex_tutorial_identity::{ProviderError, redirect};
use codex_tutorial_landing::SignOutRedirect;
use rootcause::prelude::Report;
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::error::HandoffError;

/// Query parameters for the sign-out route.
#[derive(Debug, Default, Deserialize)]
pub struct SignOutQuery {
    redirect_url: Option<String>,
}

/// Sends the visitor to the provider's hosted sign-in page.
///
/// The provider returns the visitor to the site root afterwards.
pub async fn sign_in(State(state): State<Arc<AppState>>) -> Result<Redirect, HandoffError> {
    let return_to = redirect::absolute_url(&state.public_url, "/").map_err(handoff_error)?;
    let url = redirect::sign_in_url(&state.provider_config, &return_to).map_err(handoff_error)?;

    tracing::info!("handing off to provider sign-in");
    Ok(Redirect::to(&url))
}

/// Sends the visitor to the provider's sign-out endpoint.
///
/// The requested destination must be a local path; otherwise the visitor
/// returns to the page root.
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SignOutQuery>,
) -> Result<Redirect, HandoffError> {
    let destination = match query.redirect_url {
        Some(path) if SignOutRedirect::is_local_path(&path) => SignOutRedirect::new(path),
        Some(path) => {
            tracing::warn!(requested = ?path, "ignoring non-local sign-out destination");
            SignOutRedirect::page_root()
        }
        None => SignOutRedirect::page_root(),
    };

    let return_to =
        redirect::absolute_url(&state.public_url, destination.as_str()).map_err(handoff_error)?;
    let url =
        redirect::sign_out_url(&state.provider_config, &return_to).map_err(handoff_error)?;

    tracing::info!(destination = %destination, "handing off to provider sign-out");
    Ok(Redirect::to(&url))
}

/// Sends the visitor to the provider's account page, or home if there is none.
pub async fn account(State(state): State<Arc<AppState>>) -> Redirect {
    match state.provider_config.account_url() {
        Some(url) => Redirect::to(url),
        None => Redirect::to("/"),
    }
}

fn handoff_error(report: Report<ProviderError>) -> HandoffError {
    HandoffError::InvalidUrl {
        details: report.to_string(),
    }
}

impl IntoResponse for HandoffError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "identity provider hand-off failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Sign-in is temporarily unavailable",
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{Router, body::Body, http::Request, http::header::LOCATION, routing::get};
    use codex_tutorial_core::AuthState;
    use codex_tutorial_identity::{IdentityProvider, ProviderConfig};
    use tower::ServiceExt;

    struct SignedOutProvider;

    #[async_trait]
    impl IdentityProvider for SignedOutProvider {
        async fn resolve(&self, _: Option<&str>) -> Result<AuthState, Report<ProviderError>> {
            Ok(AuthState::signed_out())
        }
    }

    fn router(config: ProviderConfig) -> Router {
        let state = Arc::new(AppState::new(
            Arc::new(SignedOutProvider),
            config,
            "https://codex.example.com".to_string(),
        ));

        Router::new()
            .route("/auth/sign-in", get(sign_in))
            .route("/auth/sign-out", get(sign_out))
            .route("/auth/account", get(account))
            .with_state(state)
    }

    fn provider_config() -> ProviderConfig {
        ProviderConfig::new(
            "https://accounts.example.com/sign-in".to_string(),
            "https://accounts.example.com/sign-out".to_string(),
            "https://accounts.example.com/oauth/userinfo".to_string(),
        )
    }

    async fn get_location(router: Router, uri: &str) -> (StatusCode, Option<String>) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        (response.status(), location)
    }

    #[tokio::test]
    async fn sign_in_redirects_to_provider_with_site_root() {
        let (status, location) = get_location(router(provider_config()), "/auth/sign-in").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            location.as_deref(),
            Some(
                "https://accounts.example.com/sign-in?redirect_url=https%3A%2F%2Fcodex.example.com%2F"
            )
        );
    }

    #[tokio::test]
    async fn sign_out_defaults_to_page_root() {
        let (status, location) = get_location(router(provider_config()), "/auth/sign-out").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            location.as_deref(),
            Some(
                "https://accounts.example.com/sign-out?redirect_url=https%3A%2F%2Fcodex.example.com%2F"
            )
        );
    }

    #[tokio::test]
    async fn sign_out_honours_local_destination() {
        let (_, location) = get_location(
            router(provider_config()),
            "/auth/sign-out?redirect_url=%2Fcourses",
        )
        .await;

        assert_eq!(
            location.as_deref(),
            Some(
                "https://accounts.example.com/sign-out?redirect_url=https%3A%2F%2Fcodex.example.com%2Fcourses"
            )
        );
    }

    #[tokio::test]
    async fn sign_out_ignores_foreign_destination() {
        let (_, location) = get_location(
            router(provider_config()),
            "/auth/sign-out?redirect_url=https%3A%2F%2Fevil.example",
        )
        .await;

        assert_eq!(
            location.as_deref(),
            Some(
                "https://accounts.example.com/sign-out?redirect_url=https%3A%2F%2Fcodex.example.com%2F"
            )
        );
    }

    #[tokio::test]
    async fn sign_out_ignores_destinations_hidden_by_stripped_characters() {
        for encoded in ["%2F%09%2Fevil.example", "%2F%0A%2Fevil.example", "%2F%0D%2Fevil.example"] {
            let uri = format!("/auth/sign-out?redirect_url={encoded}");
            let (status, location) = get_location(router(provider_config()), &uri).await;

            assert_eq!(status, StatusCode::SEE_OTHER);
            assert_eq!(
                location.as_deref(),
                Some(
                    "https://accounts.example.com/sign-out?redirect_url=https%3A%2F%2Fcodex.example.com%2F"
                ),
                "{encoded} must not leave the site"
            );
        }
    }

    #[tokio::test]
    async fn account_redirects_home_when_unconfigured() {
        let (status, location) = get_location(router(provider_config()), "/auth/account").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn account_redirects_to_provider_portal() {
        let config = ProviderConfig::builder(
            "https://accounts.example.com/sign-in".to_string(),
            "https://accounts.example.com/sign-out".to_string(),
            "https://accounts.example.com/oauth/userinfo".to_string(),
        )
        .account_url("https://accounts.example.com/user".to_string())
        .build();

        let (_, location) = get_location(router(config), "/auth/account").await;
        assert_eq!(location.as_deref(), Some("https://accounts.example.com/user"));
    }

    #[tokio::test]
    async fn invalid_provider_url_is_a_server_error() {
        let config = ProviderConfig::new(
            "not a url".to_string(),
            "https://accounts.example.com/sign-out".to_string(),
            "https://accounts.example.com/oauth/userinfo".to_string(),
        );

        let (status, location) = get_location(router(config), "/auth/sign-in").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(location, None);
    }
}
