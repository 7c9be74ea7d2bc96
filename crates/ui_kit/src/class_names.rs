//! BEM-style class composition shared by every component.
//!
//! A component has one base class (`ui-button`) and any number of modifier tokens. Each active
//! token becomes `{base}_{token}` and is appended after the base class in declaration order.

/// One modifier token together with its active flag.
///
/// Plain strings are always active. `(token, flag)` pairs are active only when the flag is set,
/// which covers the conditional form (`{"active": index == selected}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier<'a> {
    token: &'a str,
    active: bool,
}

impl<'a> Modifier<'a> {
    /// Modifier that is emitted only when `active` is true.
    pub fn when(token: &'a str, active: bool) -> Self {
        Self { token, active }
    }

    fn class_token(self) -> Option<&'a str> {
        if !self.active {
            return None;
        }
        let token = self.token.trim();
        if token.is_empty() || token.contains(char::is_whitespace) {
            None
        } else {
            Some(token)
        }
    }
}

impl<'a> From<&'a str> for Modifier<'a> {
    fn from(token: &'a str) -> Self {
        Self::when(token, true)
    }
}

impl<'a> From<&'a String> for Modifier<'a> {
    fn from(token: &'a String) -> Self {
        Self::when(token.as_str(), true)
    }
}

impl<'a> From<(&'a str, bool)> for Modifier<'a> {
    fn from((token, active): (&'a str, bool)) -> Self {
        Self::when(token, active)
    }
}

/// Builds `"{base} {base}_{mod} ..."` for every active modifier, keeping input order.
///
/// Inactive, empty, or whitespace-bearing tokens are skipped instead of failing the render.
/// Repeated tokens are kept as given.
pub fn class_with_mods<'a, I>(base: &str, mods: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Modifier<'a>>,
{
    let mut class = base.to_string();
    for token in mods
        .into_iter()
        .filter_map(|modifier| modifier.into().class_token())
    {
        class.push(' ');
        class.push_str(base);
        class.push('_');
        class.push_str(token);
    }
    class
}

/// Joins optional class fragments with single spaces, dropping empty ones.
pub fn join_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_class_alone_when_no_mods() {
        let none: [&str; 0] = [];
        assert_eq!(class_with_mods("ui-button", none), "ui-button");
    }

    #[test]
    fn sequence_mods_follow_declaration_order() {
        let class = class_with_mods("ui-button", ["wide", "size_m", "variation_ghost"]);
        assert_eq!(
            class,
            "ui-button ui-button_wide ui-button_size_m ui-button_variation_ghost"
        );
    }

    #[test]
    fn owned_token_lists_compose_like_slices() {
        let mods = vec!["size_xs".to_string(), "disabled_true".to_string()];
        assert_eq!(
            class_with_mods("ui-button", &mods),
            "ui-button ui-button_size_xs ui-button_disabled_true"
        );
    }

    #[test]
    fn flag_mods_emit_only_active_keys() {
        let class = class_with_mods(
            "ui-toggle-button__item",
            [("active", false), ("first", true)],
        );
        assert_eq!(class, "ui-toggle-button__item ui-toggle-button__item_first");
        assert!(!class.contains("active"));
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        let class = class_with_mods("ui-input", ["", "   ", "two words", " focused "]);
        assert_eq!(class, "ui-input ui-input_focused");
    }

    #[test]
    fn base_class_appears_exactly_once() {
        let class = class_with_mods("ui-input", ["error", "focused"]);
        let bases = class.split(' ').filter(|part| *part == "ui-input").count();
        assert_eq!(bases, 1);
    }

    #[test]
    fn join_classes_drops_missing_and_blank_parts() {
        assert_eq!(
            join_classes([Some("ui-button"), None, Some("  "), Some(" hero-cta ")]),
            "ui-button hero-cta"
        );
        assert_eq!(join_classes([None, None]), "");
    }
}
