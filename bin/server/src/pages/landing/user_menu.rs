//! Avatar button with a dropdown offering account management and sign-out.
//!
//! The menu never shows who is signed in; the avatar is a generic glyph.

use crate::triggers::ACCOUNT_PATH;
use codex_tutorial_landing::{Action, Control, LandingActions, content};
use leptos::prelude::*;

#[component]
pub fn UserMenu(actions: LandingActions) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="user-menu" data-control=Control::UserMenu.as_str()>
            <button
                class="avatar"
                aria-label=content::USER_MENU_LABEL
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="avatar-glyph" aria-hidden="true"></span>
            </button>
            <div class="user-menu-dropdown" role="menu" hidden=move || !open.get()>
                <a class="menu-item" role="menuitem" href=ACCOUNT_PATH rel="external">
                    {content::MANAGE_ACCOUNT_LABEL}
                </a>
                <button
                    class="menu-item"
                    role="menuitem"
                    on:click=move |_| {
                        open.set(false);
                        actions.dispatch(Action::SignOut);
                    }
                >
                    {content::SIGN_OUT_LABEL}
                </button>
            </div>
        </div>
    }
}
