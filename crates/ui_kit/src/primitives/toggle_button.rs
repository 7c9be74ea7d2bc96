use leptos::ev::MouseEvent;
use leptos::*;

use crate::class_names::{class_with_mods, join_classes, Modifier};

const BASE_CLASS: &str = "ui-toggle-button";
const ITEM_CLASS: &str = "ui-toggle-button__item";
const MIN_ITEMS: usize = 2;

/// Events whose propagation can be stopped.
pub trait Propagation {
    /// Stops the event from reaching ancestor listeners.
    fn stop(&self);
}

impl Propagation for MouseEvent {
    fn stop(&self) {
        web_sys::Event::stop_propagation(self);
    }
}

/// Stops propagation of a click on item `index`, then hands it to `handle_select`.
pub fn dispatch_select<E, F>(ev: E, index: usize, handle_select: F)
where
    E: Propagation,
    F: FnOnce(E, usize),
{
    ev.stop();
    handle_select(ev, index);
}

/// One rendered option of a [`ToggleButton`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    /// Position in the item list.
    pub index: usize,
    /// Visible text.
    pub label: String,
    /// Composed item class, with `_active` on the selected entry.
    pub class: String,
}

/// Lays out the options, or `None` when there are too few to toggle between.
pub fn toggle_items(items: &[String], selected_index: usize) -> Option<Vec<ToggleItem>> {
    if items.len() < MIN_ITEMS {
        return None;
    }
    Some(
        items
            .iter()
            .enumerate()
            .map(|(index, label)| ToggleItem {
                index,
                label: label.clone(),
                class: class_with_mods(
                    ITEM_CLASS,
                    [Modifier::when("active", index == selected_index)],
                ),
            })
            .collect(),
    )
}

pub(crate) fn toggle_class(mods: &[String], class_name: Option<&str>) -> String {
    let composed = class_with_mods(BASE_CLASS, mods);
    join_classes([Some(composed.as_str()), class_name])
}

#[component]
/// Single-select control over a fixed list of options.
///
/// Renders nothing for fewer than two items. The active entry always follows
/// `selected_index`; clicks only report the chosen index through `handle_select`.
pub fn ToggleButton(
    #[prop(optional, into)] items: Vec<String>,
    #[prop(optional, into)] selected_index: MaybeSignal<usize>,
    #[prop(optional)] handle_select: Option<Callback<(MouseEvent, usize)>>,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] mods: Vec<String>,
) -> impl IntoView {
    if items.len() < MIN_ITEMS {
        return ().into_view();
    }
    let class = toggle_class(&mods, class_name.as_deref());

    let entries = move || {
        toggle_items(&items, selected_index.get())
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                let handle_select = handle_select.clone();
                let index = item.index;
                view! {
                    <li
                        class=item.class
                        on:click=move |ev: MouseEvent| {
                            dispatch_select(ev, index, |ev, index| {
                                if let Some(handle_select) = handle_select.as_ref() {
                                    handle_select.call((ev, index));
                                }
                            });
                        }
                    >
                        {item.label}
                    </li>
                }
            })
            .collect_view()
    };

    view! { <ul class=class>{entries}</ul> }.into_view()
}
