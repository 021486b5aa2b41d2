//! Preference types and host detection.
//!
//! This module provides:
//!
//! - [`AccentColor`]: The closed five-color accent palette
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`ThemePreference`]: Accent plus mode, the persisted unit
//! - [`ColorSchemeProbe`]: Host preference query, with [`OsProbe`] and [`FixedProbe`]

mod accent;
mod detect;
mod mode;
mod preference;

pub use accent::AccentColor;
pub use detect::{reset_scheme_detector, set_scheme_detector, ColorSchemeProbe, FixedProbe, OsProbe};
pub use mode::ColorMode;
pub use preference::ThemePreference;
