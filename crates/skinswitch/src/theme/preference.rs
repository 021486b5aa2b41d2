//! The combined accent color and mode preference.

use serde::{Deserialize, Serialize};

use super::accent::AccentColor;
use super::mode::ColorMode;

/// A snapshot of the user's visual preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ThemePreference {
    pub accent: AccentColor,
    pub mode: ColorMode,
}

impl ThemePreference {
    pub fn new(accent: AccentColor, mode: ColorMode) -> Self {
        Self { accent, mode }
    }

    /// Returns a copy with the accent replaced.
    pub fn with_accent(self, accent: AccentColor) -> Self {
        Self { accent, ..self }
    }

    /// Returns a copy with the mode replaced.
    pub fn with_mode(self, mode: ColorMode) -> Self {
        Self { mode, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference() {
        let pref = ThemePreference::default();
        assert_eq!(pref.accent, AccentColor::Red);
        assert_eq!(pref.mode, ColorMode::Light);
    }

    #[test]
    fn test_with_helpers_touch_one_axis() {
        let pref = ThemePreference::default()
            .with_accent(AccentColor::Green)
            .with_mode(ColorMode::Dark);
        assert_eq!(pref, ThemePreference::new(AccentColor::Green, ColorMode::Dark));
        assert_eq!(pref.with_mode(ColorMode::Light).accent, AccentColor::Green);
    }
}
