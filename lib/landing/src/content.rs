//! Page copy.

/// Product name shown in the header, hero and footer.
pub const BRAND_NAME: &str = "Code X Tutorial";

/// Header logo.
pub const LOGO_URL: &str = "https://png.pngtree.com/png-vector/20220607/ourmid/pngtree-blue-code-icon-on-white-background-png-image_4855266.png";

/// Alt text for the header logo.
pub const LOGO_ALT: &str = "Logo";

/// Hero headline text preceding the highlighted brand name.
pub const HEADLINE_PREFIX: &str = "Welcome to ";

pub const TAGLINE: &str = "The Best Place For Learning Modern Web Development. Join our community of developers and start your coding journey today!";

pub const LOGIN_LABEL: &str = "Login";

pub const GET_STARTED_LABEL: &str = "Get Started";

pub const SIGN_OUT_LABEL: &str = "Sign out";

pub const MANAGE_ACCOUNT_LABEL: &str = "Manage account";

/// Accessible label for the user menu button.
pub const USER_MENU_LABEL: &str = "Open user menu";

/// Footer line for the given year.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {BRAND_NAME}. All rights reserved.")
}
