use leptos::ev::MouseEvent;
use leptos::*;

use super::{bool_token, ButtonKind, ButtonSize, ButtonVariation};
use crate::class_names::{class_with_mods, join_classes};
use crate::data_attrs::{forward_attrs, DataAttrs};
use crate::UiError;

const BASE_CLASS: &str = "ui-button";
const OWNED_ATTRS: &[&str] = &["class", "href", "type", "disabled"];

/// Element a [`Button`] renders for a given configuration.
///
/// Only [`ButtonPlan::Clickable`] attaches `on_click`; links and form controls rely on native
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonPlan {
    /// `<a href=...>`.
    Link {
        /// Link target, never empty.
        href: String,
    },
    /// `<button type="submit">` or `<button type="reset">`.
    FormControl {
        /// Either [`ButtonKind::Submit`] or [`ButtonKind::Reset`].
        kind: ButtonKind,
    },
    /// `<button type="button">` wired to `on_click`.
    Clickable,
}

impl ButtonPlan {
    /// Picks the element for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingHref`] for [`ButtonKind::Link`] without a non-empty `href`.
    pub fn resolve(kind: ButtonKind, href: Option<&str>) -> Result<Self, UiError> {
        match kind {
            ButtonKind::Link => match href {
                Some(href) if !href.is_empty() => Ok(Self::Link {
                    href: href.to_string(),
                }),
                _ => Err(UiError::MissingHref),
            },
            ButtonKind::Submit | ButtonKind::Reset => Ok(Self::FormControl { kind }),
            ButtonKind::Button => Ok(Self::Clickable),
        }
    }

    /// Like [`ButtonPlan::resolve`], but reports a failure through `warn` exactly once and
    /// yields `None` for the degraded render.
    pub fn resolve_or_warn(
        kind: ButtonKind,
        href: Option<&str>,
        warn: impl FnOnce(&UiError),
    ) -> Option<Self> {
        match Self::resolve(kind, href) {
            Ok(plan) => Some(plan),
            Err(err) => {
                warn(&err);
                None
            }
        }
    }

    /// Keeps `on_click` only for [`ButtonPlan::Clickable`].
    pub fn click_handler<H>(&self, on_click: Option<H>) -> Option<H> {
        match self {
            Self::Clickable => on_click,
            Self::Link { .. } | Self::FormControl { .. } => None,
        }
    }
}

/// Custom mods first, then size, variation, and `disabled_true` when disabled.
pub(crate) fn button_mods(
    mods: &[String],
    size: ButtonSize,
    variation: ButtonVariation,
    disabled: bool,
) -> Vec<String> {
    let mut all = mods.to_vec();
    all.push(format!("size_{}", size.token()));
    all.push(format!("variation_{}", variation.token()));
    if disabled {
        all.push(format!("disabled_{}", bool_token(true)));
    }
    all
}

pub(crate) fn button_class(
    mods: &[String],
    size: ButtonSize,
    variation: ButtonVariation,
    disabled: bool,
    class_name: Option<&str>,
) -> String {
    let composed = class_with_mods(BASE_CLASS, &button_mods(mods, size, variation, disabled));
    join_classes([Some(composed.as_str()), class_name])
}

#[component]
/// General-purpose button, or a link that looks like one.
///
/// A link without `href` logs a warning and renders an empty `<noscript>` placeholder.
/// Extra `attr:*` attributes are forwarded to the rendered element.
pub fn Button(
    #[prop(optional)] kind: ButtonKind,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] variation: ButtonVariation,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Extra classes joined after the composed `ui-button` classes.
    #[prop(optional, into)]
    class_name: Option<String>,
    #[prop(optional, into)] data_attrs: Option<DataAttrs>,
    /// Custom modifier tokens, emitted before the derived ones.
    #[prop(optional, into)]
    mods: Vec<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let Some(plan) = ButtonPlan::resolve_or_warn(kind, href.as_deref(), |err| {
        logging::warn!("{err}");
    }) else {
        return view! { <noscript></noscript> }.into_view();
    };
    let on_click = plan.click_handler(on_click);
    let class = move || {
        button_class(
            &mods,
            size,
            variation,
            disabled.get(),
            class_name.as_deref(),
        )
    };
    let data_attrs = data_attrs.as_ref();

    match plan {
        ButtonPlan::Link { href } => {
            let link = view! { <a class=class href=href>{children()}</a> };
            forward_attrs(link, data_attrs, attrs, OWNED_ATTRS).into_view()
        }
        ButtonPlan::FormControl { kind } => {
            let control = view! {
                <button type=kind.token() class=class disabled=move || disabled.get()>
                    {children()}
                </button>
            };
            forward_attrs(control, data_attrs, attrs, OWNED_ATTRS).into_view()
        }
        ButtonPlan::Clickable => {
            let button = view! {
                <button
                    type="button"
                    class=class
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        if let Some(on_click) = on_click.as_ref() {
                            on_click.call(ev);
                        }
                    }
                >
                    {children()}
                </button>
            };
            forward_attrs(button, data_attrs, attrs, OWNED_ATTRS).into_view()
        }
    }
}
