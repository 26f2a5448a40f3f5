//! Render model for the landing page.
//!
//! [`LandingView`] captures every decision the page makes. The UI layer only
//! lays it out, so the rules below are testable without a DOM.

use codex_tutorial_core::{AuthPhase, AuthState, Clock};
use serde::{Deserialize, Serialize};

/// Interactive controls the page can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Header button that starts sign-in.
    Login,
    /// Hero call-to-action that starts sign-in.
    GetStarted,
    /// Header identity affordance offering sign-out.
    UserMenu,
}

impl Control {
    /// Stable identifier used as the `data-control` attribute.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::GetStarted => "get-started",
            Self::UserMenu => "user-menu",
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The auth control placed in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderControl {
    Login,
    UserMenu,
}

impl HeaderControl {
    /// Returns the control this header slot renders.
    #[must_use]
    pub const fn control(&self) -> Control {
        match self {
            Self::Login => Control::Login,
            Self::UserMenu => Control::UserMenu,
        }
    }
}

/// Everything the landing page renders for one AuthState.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingView {
    phase: AuthPhase,
    header: HeaderControl,
    hero_cta: Option<Control>,
    copyright_year: i32,
}

impl LandingView {
    /// Builds the view for `state`, reading the year from `clock`.
    ///
    /// A missing state renders as signed out. Only the signed-in flag is
    /// consulted; the display identity belongs to the provider's widgets.
    #[must_use]
    pub fn for_state(state: Option<&AuthState>, clock: &dyn Clock) -> Self {
        Self::for_phase(AuthPhase::resolve(state), clock.current_year())
    }

    /// Builds the view for an already resolved phase and year.
    #[must_use]
    pub fn for_phase(phase: AuthPhase, copyright_year: i32) -> Self {
        let (header, hero_cta) = match phase {
            AuthPhase::SignedOut => (HeaderControl::Login, Some(Control::GetStarted)),
            AuthPhase::SignedIn => (HeaderControl::UserMenu, None),
        };

        Self {
            phase,
            header,
            hero_cta,
            copyright_year,
        }
    }

    /// Returns the display phase.
    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// Returns the header auth control.
    #[must_use]
    pub fn header(&self) -> HeaderControl {
        self.header
    }

    /// Returns the hero call-to-action, if shown.
    #[must_use]
    pub fn hero_cta(&self) -> Option<Control> {
        self.hero_cta
    }

    /// Returns the footer copyright year.
    #[must_use]
    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    /// Returns the footer line.
    #[must_use]
    pub fn copyright_line(&self) -> String {
        crate::content::copyright_line(self.copyright_year)
    }

    /// Lists the interactive controls, header first.
    #[must_use]
    pub fn controls(&self) -> Vec<Control> {
        std::iter::once(self.header.control())
            .chain(self.hero_cta)
            .collect()
    }

    /// Returns true if `control` is rendered.
    #[must_use]
    pub fn has_control(&self, control: Control) -> bool {
        self.controls().contains(&control)
    }
}
