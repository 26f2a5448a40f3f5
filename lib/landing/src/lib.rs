//! Landing page model for the Code X Tutorial site.
//!
//! This crate decides *what* the landing page shows, independent of any
//! UI framework:
//! - [`content`]: the page copy
//! - [`view`]: [`LandingView`], a pure function of the current AuthState
//! - [`actions`]: the sign-in/sign-out triggers the page delegates to
//!
//! # Example
//!
//! ```
//! use codex_tutorial_core::{AuthState, FixedClock};
//! use codex_tutorial_landing::{Control, LandingView};
//!
//! let clock = FixedClock::in_year(2025).expect("valid year");
//! let view = LandingView::for_state(Some(&AuthState::signed_out()), &clock);
//!
//! assert!(view.has_control(Control::Login));
//! assert!(view.has_control(Control::GetStarted));
//! assert_eq!(view.copyright_year(), 2025);
//! ```

pub mod actions;
pub mod content;
pub mod view;

pub use actions::{Action, LandingActions, SignInTrigger, SignOutRedirect, SignOutTrigger};
pub use view::{Control, HeaderControl, LandingView};
