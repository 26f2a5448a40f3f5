//! Server functions for the visitor's authentication state.

use codex_tutorial_core::AuthState;
use leptos::prelude::*;

/// Server function to get the current visitor's AuthState.
///
/// Asks the identity provider about the provider session cookie. If the
/// provider cannot answer, the visitor is treated as signed out.
#[server]
pub async fn get_auth_state() -> Result<AuthState, ServerFnError> {
    use crate::auth::{AppState, session::resolve_auth_state};
    use crate::error::AuthStateError;
    use axum::Extension;
    use axum_extra::extract::CookieJar;
    use std::sync::Arc;

    let jar: CookieJar = leptos_axum::extract().await?;
    let Extension(state): Extension<Arc<AppState>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "app state missing from request");
            AuthStateError::StateUnavailable.into_server_error()
        })?;

    Ok(resolve_auth_state(&state, &jar).await)
}
