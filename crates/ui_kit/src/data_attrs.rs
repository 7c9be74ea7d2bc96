//! `data-*` passthrough attributes and native attribute forwarding.

use leptos::html::{ElementDescriptor, HtmlElement};
use leptos::Attribute;

/// Prefix applied to every key of a [`DataAttrs`] collection.
pub const DATA_ATTR_PREFIX: &str = "data-";

/// Ordered custom-data attributes, for example tracking or test identifiers.
///
/// Keys are given without the `data-` prefix; [`project_data_attrs`] adds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataAttrs(Vec<(String, String)>);

impl DataAttrs {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one key/value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DataAttrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for DataAttrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for DataAttrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// Maps data attributes to native attribute pairs with the `data-` prefix.
///
/// `None` yields no attributes. Values pass through unchanged.
pub fn project_data_attrs(data_attrs: Option<&DataAttrs>) -> Vec<(String, String)> {
    data_attrs
        .map(|attrs| {
            attrs
                .0
                .iter()
                .map(|(key, value)| (format!("{DATA_ATTR_PREFIX}{key}"), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Keeps passthrough attributes whose names the component does not own.
pub(crate) fn passthrough<'a>(
    attrs: Vec<(&'static str, Attribute)>,
    owned: &'a [&'static str],
) -> impl Iterator<Item = (&'static str, Attribute)> + 'a {
    attrs
        .into_iter()
        .filter(move |(name, _)| !owned.contains(name))
}

/// Sets projected data attributes, then the remaining passthrough attributes, on `element`.
pub(crate) fn forward_attrs<El>(
    element: HtmlElement<El>,
    data_attrs: Option<&DataAttrs>,
    attrs: Vec<(&'static str, Attribute)>,
    owned: &[&'static str],
) -> HtmlElement<El>
where
    El: ElementDescriptor + 'static,
{
    let element = project_data_attrs(data_attrs)
        .into_iter()
        .fold(element, |element, (name, value)| element.attr(name, value));
    passthrough(attrs, owned).fold(element, |element, (name, value)| element.attr(name, value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_data_attrs_project_to_nothing() {
        assert!(project_data_attrs(None).is_empty());
        assert!(project_data_attrs(Some(&DataAttrs::new())).is_empty());
    }

    #[test]
    fn single_key_gets_namespaced() {
        let attrs = DataAttrs::from([("id", "x")]);
        assert_eq!(
            project_data_attrs(Some(&attrs)),
            vec![("data-id".to_string(), "x".to_string())]
        );
    }

    #[test]
    fn projection_keeps_insertion_order_and_values() {
        let attrs = DataAttrs::new()
            .with("gtm", "cta-header")
            .with("testid", "signup")
            .with("empty", "");
        assert_eq!(
            project_data_attrs(Some(&attrs)),
            vec![
                ("data-gtm".to_string(), "cta-header".to_string()),
                ("data-testid".to_string(), "signup".to_string()),
                ("data-empty".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn passthrough_drops_owned_names() {
        let attrs = vec![
            ("class", Attribute::String("stolen".into())),
            ("title", Attribute::String("Save".into())),
            ("aria-label", Attribute::String("Save draft".into())),
        ];
        let names: Vec<_> = passthrough(attrs, &["class", "href"])
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["title", "aria-label"]);
    }
}
