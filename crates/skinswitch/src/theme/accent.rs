//! The fixed accent ("skin") color palette.

use serde::{Deserialize, Serialize};

/// One of the five brand accent colors.
///
/// The palette is closed: arbitrary colors cannot be represented, so a
/// stored value either maps onto a variant or is discarded.
///
/// # Example
///
/// ```rust
/// use skinswitch::AccentColor;
///
/// assert_eq!(AccentColor::default(), AccentColor::Red);
/// assert_eq!(AccentColor::Blue.hex(), "#1854b4");
/// assert_eq!(AccentColor::from_hex("#F021B2"), Some(AccentColor::Pink));
/// assert_eq!(AccentColor::from_hex("#000000"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Red,
    Orange,
    Green,
    Blue,
    Pink,
}

impl AccentColor {
    /// Palette order. The first entry is the default.
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Red,
        AccentColor::Orange,
        AccentColor::Green,
        AccentColor::Blue,
        AccentColor::Pink,
    ];

    /// Lowercase `#rrggbb` value, as stored and as applied to the page.
    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Red => "#ec1839",
            AccentColor::Orange => "#fa5b0f",
            AccentColor::Green => "#37b182",
            AccentColor::Blue => "#1854b4",
            AccentColor::Pink => "#f021b2",
        }
    }

    /// Human-readable name shown on swatches.
    pub fn name(self) -> &'static str {
        match self {
            AccentColor::Red => "Red",
            AccentColor::Orange => "Orange",
            AccentColor::Green => "Green",
            AccentColor::Blue => "Blue",
            AccentColor::Pink => "Pink",
        }
    }

    /// Swatch element id (`color-1` through `color-5`).
    pub fn swatch_id(self) -> String {
        format!("color-{}", self.position() + 1)
    }

    /// Zero-based index in [`AccentColor::ALL`].
    pub fn position(self) -> usize {
        self as usize
    }

    /// Red, green and blue components.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    /// Maps a stored hex string back onto the palette.
    ///
    /// Matching ignores ASCII case and surrounding whitespace; any other
    /// difference (shorthand `#rgb`, missing `#`, a color outside the
    /// palette) yields `None`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
