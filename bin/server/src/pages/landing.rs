//! Landing page.
//!
//! [`LandingPage`] owns the subscription to AuthState updates and rebuilds a
//! [`LandingView`] whenever a new state arrives. [`LandingLayout`] lays a
//! `LandingView` out and holds no state of its own.

mod footer;
mod header;
mod hero;
mod user_menu;

use codex_tutorial_core::{AuthState, AuthStateSource, ClockHandle};
use codex_tutorial_landing::{LandingActions, LandingView};
use footer::Footer;
use header::Header;
use hero::Hero;
use leptos::prelude::*;
use std::sync::Arc;

/// The landing page, re-rendered for every AuthState `source` emits.
///
/// The subscription is released when the component is torn down.
#[component]
pub fn LandingPage(
    source: Arc<dyn AuthStateSource>,
    actions: LandingActions,
    #[prop(optional)] clock: ClockHandle,
) -> impl IntoView {
    let auth = RwSignal::new(source.current());
    let subscription = source.subscribe(Box::new(move |state: &AuthState| {
        auth.set(Some(state.clone()));
    }));
    on_cleanup(move || subscription.unsubscribe());

    move || {
        let model = LandingView::for_state(auth.get().as_ref(), clock.as_ref());
        view! { <LandingLayout model actions=actions.clone()/> }
    }
}

/// Header, hero and footer for one render model.
#[component]
pub fn LandingLayout(model: LandingView, actions: LandingActions) -> impl IntoView {
    view! {
        <div class="landing" data-phase=model.phase().as_str()>
            <Header control=model.header() actions=actions.clone()/>
            <Hero cta=model.hero_cta() actions/>
            <Footer line=model.copyright_line()/>
        </div>
    }
}
