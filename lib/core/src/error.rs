//! Shared `Result` alias.
//!
//! Crates keep their own error enums and report them through rootcause, so
//! fallible operations read as `Result<T, ProviderError>` rather than
//! spelling out the report type.

use rootcause::Report;

/// `Result` carrying a rootcause [`Report`] of context `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
