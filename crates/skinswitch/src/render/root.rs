//! In-memory document root.

use std::collections::{BTreeMap, BTreeSet};

use super::RenderSink;

/// The attributes the switcher owns on the document root.
///
/// Records CSS custom properties and classes so they can be inspected or
/// written into statically exported markup.
///
/// # Example
///
/// ```rust
/// use skinswitch::{RenderSink, RootScope};
///
/// let mut root = RootScope::new();
/// root.set_property("--skin-color", "#1854b4");
/// root.set_class("dark", true);
///
/// assert_eq!(
///     root.html_attributes(),
///     r#"class="dark" style="--skin-color: #1854b4;""#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootScope {
    properties: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl RootScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a custom property, if set.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Space-separated class list, in sorted order.
    pub fn class_attribute(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inline style declarations, e.g. `--skin-color: #ec1839;`.
    pub fn style_attribute(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `class` and `style` attributes for the root element, omitting empty ones.
    pub fn html_attributes(&self) -> String {
        let mut attrs = Vec::new();
        let class = self.class_attribute();
        if !class.is_empty() {
            attrs.push(format!("class=\"{}\"", escape_attribute(&class)));
        }
        let style = self.style_attribute();
        if !style.is_empty() {
            attrs.push(format!("style=\"{}\"", escape_attribute(&style)));
        }
        attrs.join(" ")
    }
}

impl RenderSink for RootScope {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_class(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.classes.insert(name.to_string());
        } else {
            self.classes.remove(name);
        }
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_has_no_attributes() {
        let root = RootScope::new();
        assert_eq!(root.html_attributes(), "");
        assert_eq!(root.property("--skin-color"), None);
    }

    #[test]
    fn test_set_class_toggles() {
        let mut root = RootScope::new();
        root.set_class("dark", true);
        assert!(root.has_class("dark"));
        root.set_class("dark", true);
        assert_eq!(root.class_attribute(), "dark");
        root.set_class("dark", false);
        assert!(!root.has_class("dark"));
        root.set_class("dark", false);
        assert_eq!(root.class_attribute(), "");
    }

    #[test]
    fn test_property_overwrite() {
        let mut root = RootScope::new();
        root.set_property("--skin-color", "#ec1839");
        root.set_property("--skin-color", "#37b182");
        assert_eq!(root.property("--skin-color"), Some("#37b182"));
        assert_eq!(root.style_attribute(), "--skin-color: #37b182;");
    }

    #[test]
    fn test_style_only_attributes() {
        let mut root = RootScope::new();
        root.set_property("--skin-color", "#ec1839");
        assert_eq!(root.html_attributes(), "style=\"--skin-color: #ec1839;\"");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let mut root = RootScope::new();
        root.set_property("--label", "\"x\"");
        assert_eq!(root.html_attributes(), "style=\"--label: &quot;x&quot;;\"");
    }
}
