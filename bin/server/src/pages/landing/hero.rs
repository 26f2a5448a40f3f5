//! Headline, tagline and the optional call to action.

use codex_tutorial_landing::{Action, Control, LandingActions, content};
use leptos::prelude::*;

#[component]
pub fn Hero(cta: Option<Control>, actions: LandingActions) -> impl IntoView {
    let call_to_action = cta.map(|control| {
        view! {
            <button
                class="btn btn-primary"
                data-control=control.as_str()
                on:click=move |_| actions.dispatch(Action::GetStarted)
            >
                {content::GET_STARTED_LABEL}
            </button>
        }
    });

    view! {
        <main class="hero">
            <h1 class="hero-title">
                {content::HEADLINE_PREFIX}
                <span class="highlight">{content::BRAND_NAME}</span>
            </h1>
            <p class="hero-tagline">{content::TAGLINE}</p>
            {call_to_action}
        </main>
    }
}
