//! Browser implementations of the sign-in and sign-out triggers.
//!
//! Both navigate the whole page to this server's `/auth/*` routes, which hand
//! off to the identity provider's hosted flows.

use codex_tutorial_landing::{LandingActions, SignInTrigger, SignOutRedirect, SignOutTrigger};
use std::sync::Arc;

/// Route that hands off to the provider's sign-in page.
pub const SIGN_IN_PATH: &str = "/auth/sign-in";

/// Route that hands off to the provider's sign-out endpoint.
pub const SIGN_OUT_PATH: &str = "/auth/sign-out";

/// Route that hands off to the provider's account page.
pub const ACCOUNT_PATH: &str = "/auth/account";

/// Query parameter carrying the post-sign-out destination.
pub const REDIRECT_PARAM: &str = "redirect_url";

/// Starts sign-in by navigating to [`SIGN_IN_PATH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateSignIn;

impl SignInTrigger for NavigateSignIn {
    fn begin_sign_in(&self) {
        navigate(SIGN_IN_PATH);
    }
}

/// Starts sign-out by navigating to [`SIGN_OUT_PATH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateSignOut;

impl SignOutTrigger for NavigateSignOut {
    fn begin_sign_out(&self, redirect: &SignOutRedirect) {
        navigate(&sign_out_href(redirect));
    }
}

/// Page actions backed by full-page navigation.
pub fn browser_actions() -> LandingActions {
    LandingActions::new(Arc::new(NavigateSignIn), Arc::new(NavigateSignOut))
}

fn sign_out_href(redirect: &SignOutRedirect) -> String {
    format!(
        "{SIGN_OUT_PATH}?{REDIRECT_PARAM}={}",
        urlencoding::encode(redirect.as_str())
    )
}

#[cfg(feature = "hydrate")]
fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        leptos::logging::error!("no window available to navigate to {href}");
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        leptos::logging::error!("navigation to {href} failed: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn navigate(href: &str) {
    leptos::logging::warn!("navigation to {href} requested outside the browser");
}
