//! Names the switcher uses in storage and on the page.

use serde::{Deserialize, Serialize};

/// Storage key for the light/dark mode.
pub const DEFAULT_MODE_KEY: &str = "theme";

/// Storage key for the accent color.
pub const DEFAULT_ACCENT_KEY: &str = "skinColor";

/// CSS custom property receiving the accent hex value.
pub const DEFAULT_ACCENT_PROPERTY: &str = "--skin-color";

/// Root class present while dark mode is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Storage keys and render names used by the controller.
///
/// Every field is optional when deserializing; omitted fields keep their
/// defaults, which match the stylesheet conventions (`darkMode: 'class'`,
/// `var(--skin-color)`).
///
/// # Example
///
/// ```rust
/// use skinswitch::SwitcherConfig;
///
/// let config = SwitcherConfig::from_json(r#"{ "dark_class": "theme-dark" }"#).unwrap();
/// assert_eq!(config.dark_class, "theme-dark");
/// assert_eq!(config.mode_key, "theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitcherConfig {
    pub mode_key: String,
    pub accent_key: String,
    pub accent_property: String,
    pub dark_class: String,
}

impl SwitcherConfig {
    /// Parses a JSON object, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn mode_key(mut self, key: impl Into<String>) -> Self {
        self.mode_key = key.into();
        self
    }

    pub fn accent_key(mut self, key: impl Into<String>) -> Self {
        self.accent_key = key.into();
        self
    }

    pub fn accent_property(mut self, name: impl Into<String>) -> Self {
        self.accent_property = name.into();
        self
    }

    pub fn dark_class(mut self, name: impl Into<String>) -> Self {
        self.dark_class = name.into();
        self
    }
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            mode_key: DEFAULT_MODE_KEY.to_string(),
            accent_key: DEFAULT_ACCENT_KEY.to_string(),
            accent_property: DEFAULT_ACCENT_PROPERTY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwitcherConfig::default();
        assert_eq!(config.mode_key, "theme");
        assert_eq!(config.accent_key, "skinColor");
        assert_eq!(config.accent_property, "--skin-color");
        assert_eq!(config.dark_class, "dark");
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(SwitcherConfig::from_json("{}").unwrap(), SwitcherConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(SwitcherConfig::from_json(r#"{ "colour": "red" }"#).is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SwitcherConfig::default()
            .mode_key("agency.mode")
            .accent_key("agency.accent")
            .accent_property("--brand")
            .dark_class("night");
        assert_eq!(config.mode_key, "agency.mode");
        assert_eq!(config.accent_key, "agency.accent");
        assert_eq!(config.accent_property, "--brand");
        assert_eq!(config.dark_class, "night");
    }
}
