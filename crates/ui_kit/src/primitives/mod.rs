//! Button, input, and toggle-button primitives plus their shared style tokens.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UiError;

mod button;
mod input;
mod toggle_button;

pub use button::{Button, ButtonPlan};
pub use input::{dispatch_blur, dispatch_focus, FocusState, Input, InputHandle};
pub use toggle_button::{dispatch_select, toggle_items, Propagation, ToggleButton, ToggleItem};

/// Looks `value` up among `tokens` by its token string.
fn parse_token<T: Copy>(
    kind: &'static str,
    value: &str,
    tokens: &[T],
    token: fn(T) -> &'static str,
) -> Result<T, UiError> {
    tokens
        .iter()
        .copied()
        .find(|candidate| token(*candidate) == value)
        .ok_or_else(|| UiError::unknown_token(kind, value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Rendering behavior of a [`Button`].
pub enum ButtonKind {
    /// Clickable `<button type="button">` that runs `on_click`.
    #[default]
    Button,
    /// Hyperlink styled as a button.
    Link,
    /// Native form submit control.
    Submit,
    /// Native form reset control.
    Reset,
}

impl ButtonKind {
    const ALL: [Self; 4] = [Self::Button, Self::Link, Self::Submit, Self::Reset];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "link",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

impl FromStr for ButtonKind {
    type Err = UiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_token("button type", value, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    S,
    /// Medium.
    #[default]
    M,
    /// Large.
    L,
    /// Extra large.
    Xl,
}

impl ButtonSize {
    const ALL: [Self; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = UiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_token("button size", value, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button appearance.
pub enum ButtonVariation {
    /// Filled button.
    #[default]
    Default,
    /// Outlined button.
    Ghost,
    /// Outlined button for dark backgrounds.
    GhostInverted,
    /// Button that looks like a text link.
    Link,
}

impl ButtonVariation {
    const ALL: [Self; 4] = [Self::Default, Self::Ghost, Self::GhostInverted, Self::Link];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ghost => "ghost",
            Self::GhostInverted => "ghost-inverted",
            Self::Link => "link",
        }
    }
}

impl FromStr for ButtonVariation {
    type Err = UiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_token("button variation", value, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Validation status shown by an [`Input`].
pub enum InputStatus {
    /// Value failed validation.
    Error,
    /// Value passed validation.
    Valid,
}

impl InputStatus {
    const ALL: [Self; 2] = [Self::Error, Self::Valid];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Valid => "valid",
        }
    }
}

impl FromStr for InputStatus {
    type Err = UiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_token("input status", value, &Self::ALL, Self::token)
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
