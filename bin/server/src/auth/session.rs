//! AuthState resolution for incoming requests.

use super::AppState;
use axum_extra::extract::CookieJar;
use codex_tutorial_core::AuthState;

/// Resolves the AuthState for the provider session cookie in `jar`.
///
/// Provider failures are logged and resolve to signed out.
pub async fn resolve_auth_state(state: &AppState, jar: &CookieJar) -> AuthState {
    let token = jar
        .get(state.provider_config.session_cookie())
        .map(|cookie| cookie.value().to_string());

    match state.provider.resolve(token.as_deref()).await {
        Ok(auth) => {
            tracing::debug!(phase = %auth.phase(), "resolved auth state");
            auth
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "identity provider unavailable, rendering signed out"
            );
            AuthState::signed_out()
        }
    }
}
