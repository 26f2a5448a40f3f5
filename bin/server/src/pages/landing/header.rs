//! Page header: logo, brand and the auth control.

use super::user_menu::UserMenu;
use codex_tutorial_landing::{Action, Control, HeaderControl, LandingActions, content};
use leptos::prelude::*;

#[component]
pub fn Header(control: HeaderControl, actions: LandingActions) -> impl IntoView {
    let auth_control = match control {
        HeaderControl::Login => view! {
            <button
                class="btn btn-outline"
                data-control=Control::Login.as_str()
                on:click=move |_| actions.dispatch(Action::Login)
            >
                {content::LOGIN_LABEL}
            </button>
        }
        .into_any(),
        HeaderControl::UserMenu => view! { <UserMenu actions/> }.into_any(),
    };

    view! {
        <header class="landing-header">
            <a href="/" class="brand">
                <img class="brand-logo" src=content::LOGO_URL alt=content::LOGO_ALT/>
                <span class="brand-name">{content::BRAND_NAME}</span>
            </a>
            <nav class="auth-control">{auth_control}</nav>
        </header>
    }
}
