use leptos::ev::FocusEvent;
use leptos::*;

use super::InputStatus;
use crate::class_names::class_with_mods;
use crate::data_attrs::{forward_attrs, DataAttrs};

const BASE_CLASS: &str = "ui-input";
const OWNED_ATTRS: &[&str] = &["class", "disabled", "name", "value"];

/// Focus tracking for one [`Input`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Initial state.
    #[default]
    Unfocused,
    /// The native element holds focus.
    Focused,
}

impl FocusState {
    /// Whether the element is currently focused.
    pub fn is_focused(self) -> bool {
        self == Self::Focused
    }

    /// Applies a native focus event and reports whether `on_focus` should run.
    ///
    /// Disabled inputs ignore focus entirely.
    pub fn receive_focus(&mut self, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        *self = Self::Focused;
        true
    }

    /// Applies a native blur event and reports whether `on_blur` should run.
    ///
    /// Blur always clears focus and always forwards, even when disabled.
    pub fn receive_blur(&mut self) -> bool {
        *self = Self::Unfocused;
        true
    }
}

/// Runs one native focus event against `current`.
///
/// `commit` receives the new state only when it differs from `current`, so an ignored or
/// repeated focus never notifies subscribers. `on_focus` runs after the commit.
pub fn dispatch_focus<E>(
    current: FocusState,
    disabled: bool,
    ev: E,
    commit: impl FnOnce(FocusState),
    on_focus: impl FnOnce(E),
) {
    let mut next = current;
    if !next.receive_focus(disabled) {
        return;
    }
    if next != current {
        commit(next);
    }
    on_focus(ev);
}

/// Runs one native blur event against `current`. Same commit rule as [`dispatch_focus`].
pub fn dispatch_blur<E>(
    current: FocusState,
    ev: E,
    commit: impl FnOnce(FocusState),
    on_blur: impl FnOnce(E),
) {
    let mut next = current;
    if !next.receive_blur() {
        return;
    }
    if next != current {
        commit(next);
    }
    on_blur(ev);
}

/// Focus replaces the status modifier while it lasts.
pub(crate) fn input_mods(
    mods: &[String],
    status: Option<InputStatus>,
    focus: FocusState,
) -> Vec<String> {
    let mut all = mods.to_vec();
    match (focus, status) {
        (FocusState::Focused, _) => all.push("focused".to_string()),
        (FocusState::Unfocused, Some(status)) => all.push(status.token().to_string()),
        (FocusState::Unfocused, None) => {}
    }
    all
}

pub(crate) fn input_class(
    mods: &[String],
    status: Option<InputStatus>,
    focus: FocusState,
) -> String {
    class_with_mods(BASE_CLASS, &input_mods(mods, status, focus))
}

/// Imperative access to the native element rendered by an [`Input`].
///
/// Every operation is a no-op while nothing is mounted.
#[derive(Clone, Copy)]
pub struct InputHandle {
    single_line: NodeRef<html::Input>,
    multi_line: NodeRef<html::Textarea>,
}

impl Default for InputHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandle {
    /// Creates an unmounted handle. Pass it to [`Input`] through the `handle` prop.
    pub fn new() -> Self {
        Self {
            single_line: create_node_ref(),
            multi_line: create_node_ref(),
        }
    }

    /// Whether an element is currently attached.
    pub fn is_mounted(&self) -> bool {
        self.single_line.get_untracked().is_some() || self.multi_line.get_untracked().is_some()
    }

    /// Moves keyboard focus into the element.
    pub fn focus(&self) {
        if let Some(input) = self.single_line.get_untracked() {
            let _ = input.focus();
        } else if let Some(area) = self.multi_line.get_untracked() {
            let _ = area.focus();
        }
    }

    /// Removes keyboard focus from the element.
    pub fn blur(&self) {
        if let Some(input) = self.single_line.get_untracked() {
            let _ = input.blur();
        } else if let Some(area) = self.multi_line.get_untracked() {
            let _ = area.blur();
        }
    }

    /// Selects the element's whole text.
    pub fn select(&self) {
        if let Some(input) = self.single_line.get_untracked() {
            input.select();
        } else if let Some(area) = self.multi_line.get_untracked() {
            area.select();
        }
    }
}

#[component]
/// Text field with focus tracking and an optional validation status marker.
///
/// Renders `<textarea>` when `multiline` is set, `<input>` otherwise. `on_change` fires for
/// every edit. Extra `attr:*` attributes are forwarded to the native element.
pub fn Input(
    #[prop(optional)] multiline: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] status: MaybeSignal<Option<InputStatus>>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] mods: Vec<String>,
    #[prop(optional, into)] data_attrs: Option<DataAttrs>,
    /// Handle used for `focus()`, `blur()` and `select()` from outside.
    #[prop(optional)]
    handle: Option<InputHandle>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let focus = create_rw_signal(FocusState::default());
    let handle = handle.unwrap_or_default();
    let class = move || input_class(&mods, status.get(), focus.get());

    let handle_focus = move |ev: FocusEvent| {
        dispatch_focus(
            focus.get_untracked(),
            disabled.get_untracked(),
            ev,
            |next| focus.set(next),
            |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            },
        );
    };
    let handle_blur = move |ev: FocusEvent| {
        dispatch_blur(
            focus.get_untracked(),
            ev,
            |next| focus.set(next),
            |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            },
        );
    };
    let handle_change = move |ev: web_sys::Event| {
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(ev);
        }
    };

    let data_attrs = data_attrs.as_ref();
    let element = if multiline {
        let multi_line = handle.multi_line;
        let area = view! {
            <textarea
                class=class
                name=name
                node_ref=multi_line
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:focus=handle_focus
                on:blur=handle_blur
                on:input=handle_change
            ></textarea>
        };
        forward_attrs(area, data_attrs, attrs, OWNED_ATTRS).into_view()
    } else {
        let single_line = handle.single_line;
        let input = view! {
            <input
                class=class
                name=name
                node_ref=single_line
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:focus=handle_focus
                on:blur=handle_blur
                on:input=handle_change
            />
        };
        forward_attrs(input, data_attrs, attrs, OWNED_ATTRS).into_view()
    };

    view! {
        <div class="ui-input-container">
            {element}
            {move || status.get().map(|_| view! { <span class="ui-input-status"></span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Records commits and forwarded events for one simulated element.
    #[derive(Default)]
    struct Recorder {
        state: Cell<FocusState>,
        commits: Cell<usize>,
        forwarded: RefCell<Vec<&'static str>>,
    }

    impl Recorder {
        fn focus(&self, disabled: bool, ev: &'static str) {
            dispatch_focus(
                self.state.get(),
                disabled,
                ev,
                |next| {
                    self.commits.set(self.commits.get() + 1);
                    self.state.set(next);
                },
                |ev| self.forwarded.borrow_mut().push(ev),
            );
        }

        fn blur(&self, ev: &'static str) {
            dispatch_blur(
                self.state.get(),
                ev,
                |next| {
                    self.commits.set(self.commits.get() + 1);
                    self.state.set(next);
                },
                |ev| self.forwarded.borrow_mut().push(ev),
            );
        }
    }

    #[test]
    fn starts_unfocused() {
        assert_eq!(FocusState::default(), FocusState::Unfocused);
        assert!(!FocusState::default().is_focused());
    }

    #[test]
    fn disabled_focus_is_ignored() {
        let mut state = FocusState::default();
        assert!(!state.receive_focus(true));
        assert_eq!(state, FocusState::Unfocused);
    }

    #[test]
    fn enabled_focus_transitions_and_forwards() {
        let mut state = FocusState::default();
        assert!(state.receive_focus(false));
        assert!(state.is_focused());
    }

    #[test]
    fn blur_always_resets_focus() {
        let mut state = FocusState::Focused;
        assert!(state.receive_blur());
        assert_eq!(state, FocusState::Unfocused);

        assert!(state.receive_blur());
        assert_eq!(state, FocusState::Unfocused);
    }

    #[test]
    fn disabled_focus_event_neither_commits_nor_forwards() {
        let element = Recorder::default();
        element.focus(true, "focus");

        assert_eq!(element.state.get(), FocusState::Unfocused);
        assert_eq!(element.commits.get(), 0);
        assert!(element.forwarded.borrow().is_empty());
    }

    #[test]
    fn enabled_focus_commits_before_forwarding_once() {
        let element = Recorder::default();
        element.focus(false, "focus");

        assert_eq!(element.state.get(), FocusState::Focused);
        assert_eq!(element.commits.get(), 1);
        assert_eq!(*element.forwarded.borrow(), vec!["focus"]);
    }

    #[test]
    fn repeated_focus_forwards_without_recommitting() {
        let element = Recorder::default();
        element.focus(false, "first");
        element.focus(false, "second");

        assert_eq!(element.commits.get(), 1);
        assert_eq!(*element.forwarded.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn blur_forwards_exactly_once_even_when_disabled() {
        let element = Recorder::default();
        element.focus(false, "focus");
        // The element becomes disabled while focused; blur still clears it.
        element.focus(true, "ignored");
        element.blur("blur");

        assert_eq!(element.state.get(), FocusState::Unfocused);
        assert_eq!(element.commits.get(), 2);
        assert_eq!(*element.forwarded.borrow(), vec!["focus", "blur"]);
    }

    #[test]
    fn blur_while_unfocused_still_forwards() {
        let element = Recorder::default();
        element.blur("blur");

        assert_eq!(element.state.get(), FocusState::Unfocused);
        assert_eq!(element.commits.get(), 0);
        assert_eq!(*element.forwarded.borrow(), vec!["blur"]);
    }

    #[test]
    fn status_modifier_shown_while_unfocused() {
        assert_eq!(
            input_class(&[], Some(InputStatus::Error), FocusState::Unfocused),
            "ui-input ui-input_error"
        );
        assert_eq!(
            input_class(&[], None, FocusState::Unfocused),
            "ui-input"
        );
    }

    #[test]
    fn focus_overrides_status_modifier() {
        assert_eq!(
            input_mods(
                &["wide".to_string()],
                Some(InputStatus::Valid),
                FocusState::Focused
            ),
            vec!["wide", "focused"]
        );
    }

    #[test]
    fn handle_operations_are_noops_before_mount() {
        let runtime = create_runtime();
        let handle = InputHandle::new();
        assert!(!handle.is_mounted());
        handle.focus();
        handle.blur();
        handle.select();
        assert!(!handle.is_mounted());
        runtime.dispose();
    }
}
