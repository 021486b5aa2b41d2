//! Light/dark color mode.

use serde::{Deserialize, Serialize};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Both modes, light first.
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    /// The value written to storage for this mode.
    pub fn token(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Parses a stored token. Only the exact lowercase tokens are recognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for mode in ColorMode::ALL {
            assert_eq!(ColorMode::from_token(mode.token()), Some(mode));
        }
    }

    #[test]
    fn test_from_token_rejects_unknown() {
        assert_eq!(ColorMode::from_token("Dark"), None);
        assert_eq!(ColorMode::from_token(""), None);
        assert_eq!(ColorMode::from_token("system"), None);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ColorMode::default(), ColorMode::Light);
        assert!(!ColorMode::default().is_dark());
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&ColorMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
