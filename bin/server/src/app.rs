//! Main Leptos application component and routing.

use crate::pages::LandingPage;
use crate::triggers::browser_actions;
use crate::user::get_auth_state;
use codex_tutorial_core::{AuthState, AuthStateChannel, AuthStateSource};
use codex_tutorial_landing::content;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=content::BRAND_NAME/>
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Loads the visitor's AuthState and renders the landing page with it.
///
/// Until the state arrives the page renders with no state, which shows the
/// signed-out presentation.
#[component]
fn HomePage() -> impl IntoView {
    let auth = Resource::new(|| (), |_| get_auth_state());
    let channel = AuthStateChannel::new();
    let actions = browser_actions();

    let pending: Arc<dyn AuthStateSource> = Arc::new(AuthStateChannel::new());
    let fallback_actions = actions.clone();

    view! {
        <Suspense fallback=move || view! {
            <LandingPage source=pending.clone() actions=fallback_actions.clone()/>
        }>
            {move || {
                auth.get().map(|result| {
                    let state = result.unwrap_or_else(|e| {
                        leptos::logging::warn!("failed to load auth state: {e}");
                        AuthState::signed_out()
                    });
                    channel.publish(state);
                    let source: Arc<dyn AuthStateSource> = Arc::new(channel.clone());
                    view! { <LandingPage source actions=actions.clone()/> }
                })
            }}
        </Suspense>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a href="/">"Back to " {content::BRAND_NAME}</a>
        </div>
    }
}
