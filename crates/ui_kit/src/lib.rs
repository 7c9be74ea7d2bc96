//! Presentational Leptos components: button, input, and toggle button.
//!
//! Every component composes its classes from one BEM base name plus modifier tokens
//! (`ui-button ui-button_size_m`), projects caller-provided `data-*` attributes onto the native
//! element, and forwards any extra `attr:*` attributes verbatim. The decision logic behind each
//! component is exposed as plain functions so it can be exercised without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod class_names;
pub mod data_attrs;
mod error;
mod primitives;

pub use class_names::{class_with_mods, join_classes, Modifier};
pub use data_attrs::{project_data_attrs, DataAttrs, DATA_ATTR_PREFIX};
pub use error::UiError;
pub use primitives::{
    dispatch_blur, dispatch_focus, dispatch_select, toggle_items, Button, ButtonKind, ButtonPlan,
    ButtonSize, ButtonVariation, FocusState, Input, InputHandle, InputStatus, Propagation,
    ToggleButton, ToggleItem,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Button, ButtonKind, ButtonSize, ButtonVariation, DataAttrs, Input, InputHandle,
        InputStatus, ToggleButton,
    };
}
