//! Sign-in and sign-out triggers.
//!
//! The page never authenticates anyone. Its buttons call into these traits,
//! which the hosting application implements by handing off to the identity
//! provider.

use std::sync::Arc;

/// Starts the provider's sign-in flow.
pub trait SignInTrigger: Send + Sync {
    fn begin_sign_in(&self);
}

/// Starts the provider's sign-out flow.
pub trait SignOutTrigger: Send + Sync {
    /// Signs out, after which the provider returns the visitor to `redirect`.
    fn begin_sign_out(&self, redirect: &SignOutRedirect);
}

/// Local path the provider returns to after sign-out.
///
/// Only same-origin absolute paths are accepted; anything else falls back to
/// the page root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignOutRedirect(String);

impl SignOutRedirect {
    /// The page root, `/`.
    #[must_use]
    pub fn page_root() -> Self {
        Self("/".to_string())
    }

    /// Creates a redirect to `path`, or the page root if `path` is not a
    /// local absolute path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if Self::is_local_path(&path) {
            Self(path)
        } else {
            Self::page_root()
        }
    }

    /// Returns true for `/`-rooted paths that stay on this origin.
    ///
    /// URL parsers drop tabs and newlines before parsing, so `/\t/host`
    /// would otherwise read as `//host`. Control characters, whitespace and
    /// backslashes are rejected outright.
    #[must_use]
    pub fn is_local_path(path: &str) -> bool {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path
                .chars()
                .any(|c| c == '\\' || c.is_control() || c.is_whitespace())
    }

    /// Returns the path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SignOutRedirect {
    fn default() -> Self {
        Self::page_root()
    }
}

impl std::fmt::Display for SignOutRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-initiated page actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Header "Login" activated.
    Login,
    /// Hero "Get Started" activated.
    GetStarted,
    /// "Sign out" chosen from the user menu.
    SignOut,
}

/// Wires page actions to the provider triggers.
///
/// Sign-out always returns the visitor to the page root.
#[derive(Clone)]
pub struct LandingActions {
    sign_in: Arc<dyn SignInTrigger>,
    sign_out: Arc<dyn SignOutTrigger>,
}

impl LandingActions {
    pub fn new(sign_in: Arc<dyn SignInTrigger>, sign_out: Arc<dyn SignOutTrigger>) -> Self {
        Self { sign_in, sign_out }
    }

    /// Invokes the trigger for `action` exactly once.
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatching landing action");
        match action {
            Action::Login | Action::GetStarted => self.sign_in.begin_sign_in(),
            Action::SignOut => self.sign_out.begin_sign_out(&SignOutRedirect::page_root()),
        }
    }
}

impl std::fmt::Debug for LandingActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LandingActions").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        SignIn,
        SignOut(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Call>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().expect("lock").clone()
        }
    }

    impl SignInTrigger for Recorder {
        fn begin_sign_in(&self) {
            self.calls.lock().expect("lock").push(Call::SignIn);
        }
    }

    impl SignOutTrigger for Recorder {
        fn begin_sign_out(&self, redirect: &SignOutRedirect) {
            self.calls
                .lock()
                .expect("lock")
                .push(Call::SignOut(redirect.as_str().to_string()));
        }
    }

    fn actions() -> (Arc<Recorder>, LandingActions) {
        let recorder = Arc::new(Recorder::default());
        let actions = LandingActions::new(recorder.clone(), recorder.clone());
        (recorder, actions)
    }

    #[test]
    fn login_invokes_sign_in_once() {
        let (recorder, actions) = actions();
        actions.dispatch(Action::Login);
        assert_eq!(recorder.calls(), vec![Call::SignIn]);
    }

    #[test]
    fn get_started_invokes_sign_in_once() {
        let (recorder, actions) = actions();
        actions.dispatch(Action::GetStarted);
        assert_eq!(recorder.calls(), vec![Call::SignIn]);
    }

    #[test]
    fn sign_out_redirects_to_page_root() {
        let (recorder, actions) = actions();
        actions.dispatch(Action::SignOut);
        assert_eq!(recorder.calls(), vec![Call::SignOut("/".to_string())]);
    }

    #[test]
    fn repeated_sign_out_always_targets_page_root() {
        let (recorder, actions) = actions();
        actions.dispatch(Action::SignOut);
        actions.dispatch(Action::SignOut);
        assert_eq!(
            recorder.calls(),
            vec![Call::SignOut("/".to_string()), Call::SignOut("/".to_string())]
        );
    }

    #[test]
    fn redirect_rejects_non_local_paths() {
        assert_eq!(SignOutRedirect::new("https://evil.example"), SignOutRedirect::page_root());
        assert_eq!(SignOutRedirect::new("//evil.example"), SignOutRedirect::page_root());
        assert_eq!(SignOutRedirect::new("/\\evil.example"), SignOutRedirect::page_root());
        assert_eq!(SignOutRedirect::new(""), SignOutRedirect::page_root());
        assert_eq!(SignOutRedirect::new("/courses").as_str(), "/courses");
    }

    #[test]
    fn redirect_rejects_paths_with_stripped_characters() {
        for path in ["/\t/evil.example", "/\n/evil.example", "/\r/evil.example", "/ /evil.example"] {
            assert!(!SignOutRedirect::is_local_path(path), "{path:?} must not be local");
            assert_eq!(SignOutRedirect::new(path), SignOutRedirect::page_root());
        }
        assert!(SignOutRedirect::is_local_path("/courses/rust?week=2"));
    }

    #[test]
    fn default_redirect_is_page_root() {
        assert_eq!(SignOutRedirect::default().to_string(), "/");
    }
}
