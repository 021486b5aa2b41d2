//! Host color-scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::mode::ColorMode;

/// Answers "which color scheme does the host prefer?".
///
/// Consulted only when no mode has been stored. `None` means the host
/// offers no answer, which resolves to [`ColorMode::Light`].
pub trait ColorSchemeProbe {
    fn prefers(&self) -> Option<ColorMode>;
}

/// A probe with a fixed answer.
///
/// Useful for hosts that learn the preference some other way (a request
/// header, a command-line flag) and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedProbe(pub Option<ColorMode>);

impl FixedProbe {
    pub fn dark() -> Self {
        Self(Some(ColorMode::Dark))
    }

    pub fn light() -> Self {
        Self(Some(ColorMode::Light))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl ColorSchemeProbe for FixedProbe {
    fn prefers(&self) -> Option<ColorMode> {
        self.0
    }
}

/// Probe backed by the operating system's appearance setting.
///
/// Goes through the process-wide detector, which defaults to the
/// `dark-light` crate and can be replaced with [`set_scheme_detector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl ColorSchemeProbe for OsProbe {
    fn prefers(&self) -> Option<ColorMode> {
        detect_color_scheme()
    }
}

type SchemeDetector = fn() -> Option<ColorMode>;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used by [`OsProbe`].
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

/// Restores the `dark-light` backed detector.
pub fn reset_scheme_detector() {
    set_scheme_detector(os_scheme_detector);
}

pub(crate) fn detect_color_scheme() -> Option<ColorMode> {
    let detector = SCHEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    (*detector)()
}

// Newer dark-light releases add an "unspecified" variant.
#[allow(unreachable_patterns)]
fn os_scheme_detector() -> Option<ColorMode> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(ColorMode::Dark),
        OsThemeMode::Light => Some(ColorMode::Light),
        _ => None,
    }
}
