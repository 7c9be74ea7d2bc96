//! Error type shared by the component plan layer.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while turning component props into a render plan.
///
/// None of these reach the host application as a failure: components log them through
/// [`leptos::logging`] and fall back to a degraded render.
pub enum UiError {
    /// A link button was configured without a non-empty `href`.
    #[error("Missing href")]
    MissingHref,
    /// A string did not name any token of the given kind.
    #[error("unknown {kind} token `{value}`")]
    UnknownToken {
        /// Token family, for example `button size`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl UiError {
    pub(crate) fn unknown_token(kind: &'static str, value: &str) -> Self {
        Self::UnknownToken {
            kind,
            value: value.to_string(),
        }
    }
}
