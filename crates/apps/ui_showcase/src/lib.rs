//! Live showcase for the `ui_kit` component set.
//!
//! Every component is rendered with its props bound to one serializable state value, so a host
//! can persist the showcase and restore it later.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ui_kit::prelude::*;

const SIZES: [ButtonSize; 5] = [
    ButtonSize::Xs,
    ButtonSize::S,
    ButtonSize::M,
    ButtonSize::L,
    ButtonSize::Xl,
];
const SIZE_LABELS: [&str; 5] = ["XS", "S", "M", "L", "XL"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ShowcaseState {
    button_size: ButtonSize,
    button_variation: ButtonVariation,
    buttons_disabled: bool,
    email: String,
    notes: String,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            button_size: ButtonSize::M,
            button_variation: ButtonVariation::Default,
            buttons_disabled: false,
            email: String::new(),
            notes: "Every control shares one base class and one modifier grammar.".to_string(),
        }
    }
}

impl ShowcaseState {
    fn restore(value: Option<Value>) -> Self {
        match value.map(serde_json::from_value::<Self>) {
            Some(Ok(restored)) => restored,
            Some(Err(err)) => {
                logging::warn!("ui showcase restore failed: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    fn size_index(&self) -> usize {
        SIZES
            .iter()
            .position(|size| *size == self.button_size)
            .unwrap_or_default()
    }

    fn email_status(&self) -> Option<InputStatus> {
        let email = self.email.trim();
        if email.is_empty() {
            None
        } else if email_looks_valid(email) {
            Some(InputStatus::Valid)
        } else {
            Some(InputStatus::Error)
        }
    }
}

fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[component]
/// Showcase contents.
pub fn UiShowcaseApp(
    /// Previously persisted showcase state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the serialized state after every change.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(ShowcaseState::restore(restored_state));
    let email_input = InputHandle::new();

    create_effect(move |_| {
        let snapshot = state.get();
        match serde_json::to_value(&snapshot) {
            Ok(value) => {
                if let Some(on_state_change) = on_state_change.as_ref() {
                    on_state_change.call(value);
                }
            }
            Err(err) => logging::warn!("ui showcase serialize failed: {err}"),
        }
    });

    let size = create_memo(move |_| state.with(|value| value.button_size));
    let variation = create_memo(move |_| state.with(|value| value.button_variation));
    let disabled = create_memo(move |_| state.with(|value| value.buttons_disabled));

    view! {
        <section class="ui-showcase">
            <h2>"Buttons"</h2>
            <ToggleButton
                items={SIZE_LABELS.iter().map(|label| label.to_string()).collect::<Vec<_>>()}
                selected_index=Signal::derive(move || state.with(ShowcaseState::size_index))
                handle_select=Callback::new(move |(_, index): (ev::MouseEvent, usize)| {
                    if let Some(size) = SIZES.get(index) {
                        state.update(|value| value.button_size = *size);
                    }
                })
                mods=vec!["compact".to_string()]
            />
            {move || {
                let size = size.get();
                let variation = variation.get();
                view! {
                    <div class="ui-showcase__row">
                        <Button
                            size
                            variation
                            disabled
                            data_attrs=[("showcase", "primary")]
                            on_click=Callback::new(move |_| {
                                state.update(|value| value.buttons_disabled = !value.buttons_disabled);
                            })
                        >
                            "Toggle disabled"
                        </Button>
                        <Button
                            size
                            variation=ButtonVariation::Ghost
                            on_click=Callback::new(move |_| {
                                state.update(|value| {
                                    value.button_variation = match value.button_variation {
                                        ButtonVariation::Default => ButtonVariation::GhostInverted,
                                        _ => ButtonVariation::Default,
                                    };
                                });
                            })
                        >
                            "Swap variation"
                        </Button>
                        <Button size kind=ButtonKind::Link href="#inputs" attr:title="Jump to inputs">
                            "Inputs"
                        </Button>
                        <Button size kind=ButtonKind::Reset variation=ButtonVariation::Link>
                            "Reset"
                        </Button>
                    </div>
                }
            }}

            <h2 id="inputs">"Inputs"</h2>
            <Input
                name="email"
                handle=email_input
                value=Signal::derive(move || state.get().email)
                status=Signal::derive(move || state.get().email_status())
                data_attrs=[("field", "email")]
                attr:placeholder="name@example.com"
                on_change=Callback::new(move |ev| {
                    let next = event_target_value(&ev);
                    state.update(|value| value.email = next);
                })
            />
            <Input
                multiline=true
                name="notes"
                value=Signal::derive(move || state.get().notes)
                on_change=Callback::new(move |ev| {
                    let next = event_target_value(&ev);
                    state.update(|value| value.notes = next);
                })
            />
            <div class="ui-showcase__row">
                <Button size=ButtonSize::S on_click=Callback::new(move |_| email_input.focus())>
                    "Focus email"
                </Button>
                <Button size=ButtonSize::S on_click=Callback::new(move |_| email_input.select())>
                    "Select email"
                </Button>
                <Button size=ButtonSize::S on_click=Callback::new(move |_| email_input.blur())>
                    "Blur email"
                </Button>
            </div>
        </section>
    }
}
