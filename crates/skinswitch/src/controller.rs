//! The theme preference controller.
//!
//! [`ThemePreferenceController`] owns the current [`ThemePreference`] and
//! keeps two collaborators in step with it:
//!
//! - a [`PreferenceStore`], so the choice survives a reload
//! - a [`RenderSink`], so the page reflects the choice right away
//!
//! Storage is best-effort. A store that cannot be read resolves to
//! defaults; a store that cannot be written is logged and ignored, and the
//! current session still shows the new preference.
//!
//! # Resolution on load
//!
//! | Stored mode      | Host probe | Result |
//! |------------------|------------|--------|
//! | `"dark"`         | any        | Dark   |
//! | `"light"`        | any        | Light  |
//! | other value      | any        | Light  |
//! | absent / empty / error | `Dark`  | Dark   |
//! | absent / empty / error | `Light` | Light  |
//! | absent / empty / error | none    | Light  |
//!
//! A stored accent color outside the palette resolves to the first palette
//! entry.

use tracing::{debug, warn};

use crate::config::SwitcherConfig;
use crate::render::RenderSink;
use crate::store::PreferenceStore;
use crate::theme::{AccentColor, ColorMode, ColorSchemeProbe, ThemePreference};

/// Owns the user's accent color and color mode.
///
/// Construct one per application, call [`initialize`](Self::initialize)
/// once the page is interactive, then hand it (or a borrow of it) to the
/// controls that read or change the preference.
///
/// # Example
///
/// ```rust
/// use skinswitch::{
///     AccentColor, ColorMode, FixedProbe, MemoryStore, PreferenceStore, RootScope,
///     ThemePreferenceController,
/// };
///
/// let mut controller =
///     ThemePreferenceController::new(MemoryStore::new(), FixedProbe::unavailable(), RootScope::new());
/// controller.initialize();
///
/// controller.set_accent_color(AccentColor::Blue);
/// controller.set_mode(ColorMode::Dark);
///
/// assert_eq!(controller.sink().property("--skin-color"), Some("#1854b4"));
/// assert!(controller.sink().has_class("dark"));
/// assert_eq!(controller.store().get("theme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug)]
pub struct ThemePreferenceController<S, P, R> {
    config: SwitcherConfig,
    store: S,
    probe: P,
    sink: R,
    current: ThemePreference,
}

impl<S, P, R> ThemePreferenceController<S, P, R>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    R: RenderSink,
{
    /// Creates a controller with the default storage keys and render names.
    pub fn new(store: S, probe: P, sink: R) -> Self {
        Self::with_config(SwitcherConfig::default(), store, probe, sink)
    }

    /// Creates a controller with custom storage keys and render names.
    pub fn with_config(config: SwitcherConfig, store: S, probe: P, sink: R) -> Self {
        Self {
            config,
            store,
            probe,
            sink,
            current: ThemePreference::default(),
        }
    }

    /// Resolves the preference from storage and the host, then applies it.
    ///
    /// Never fails. Storage is only read here, never written.
    pub fn initialize(&mut self) {
        let mode = self.resolve_mode();
        let accent = self.resolve_accent();
        self.current = ThemePreference::new(accent, mode);
        debug!(accent = %accent, mode = %mode, "theme preference initialized");

        self.apply_mode();
        self.apply_accent();
    }

    /// Changes the accent color, applies it, and persists it.
    pub fn set_accent_color(&mut self, accent: AccentColor) {
        self.current.accent = accent;
        self.apply_accent();
        let key = self.config.accent_key.clone();
        self.persist(&key, accent.hex());
    }

    /// Changes the accent color from an untyped hex string.
    ///
    /// Values outside the palette are rejected without touching any state.
    /// Returns whether the value was accepted.
    pub fn set_accent_hex(&mut self, hex: &str) -> bool {
        match AccentColor::from_hex(hex) {
            Some(accent) => {
                self.set_accent_color(accent);
                true
            }
            None => {
                debug!(value = hex, "ignoring accent color outside the palette");
                false
            }
        }
    }

    /// Changes the color mode, applies it, and persists it.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.current.mode = mode;
        self.apply_mode();
        let key = self.config.mode_key.clone();
        self.persist(&key, mode.token());
    }

    /// Flips between light and dark, returning the new mode.
    pub fn toggle_mode(&mut self) -> ColorMode {
        let mode = self.current.mode.toggled();
        self.set_mode(mode);
        mode
    }

    /// The in-memory preference.
    pub fn current_preference(&self) -> ThemePreference {
        self.current
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Consumes the controller, returning its store, probe, and sink.
    pub fn into_parts(self) -> (S, P, R) {
        (self.store, self.probe, self.sink)
    }

    fn resolve_mode(&self) -> ColorMode {
        let stored = self
            .read(&self.config.mode_key)
            .filter(|token| !token.trim().is_empty());
        match stored {
            Some(token) => ColorMode::from_token(&token).unwrap_or_else(|| {
                debug!(value = %token, "unrecognized stored mode, using light");
                ColorMode::Light
            }),
            None => self.probe.prefers().unwrap_or_default(),
        }
    }

    fn resolve_accent(&self) -> AccentColor {
        match self.read(&self.config.accent_key) {
            Some(value) => AccentColor::from_hex(&value).unwrap_or_else(|| {
                debug!(value = %value, "stored accent color outside the palette, using default");
                AccentColor::default()
            }),
            None => AccentColor::default(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "could not read theme preference");
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, value, error = %e, "could not persist theme preference");
        }
    }

    fn apply_mode(&mut self) {
        self.sink
            .set_class(&self.config.dark_class, self.current.mode.is_dark());
    }

    fn apply_accent(&mut self) {
        self.sink
            .set_property(&self.config.accent_property, self.current.accent.hex());
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::render::RootScope;
    use crate::store::MemoryStore;
    use crate::theme::FixedProbe;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stored_accent_resolves_to_palette(value in ".{0,10}") {
            let store = MemoryStore::new().with_entry("skinColor", value.clone());
            let mut c = ThemePreferenceController::new(store, FixedProbe::unavailable(), RootScope::new());
            c.initialize();

            let accent = c.current_preference().accent;
            match AccentColor::from_hex(&value) {
                Some(expected) => prop_assert_eq!(accent, expected),
                None => prop_assert_eq!(accent, AccentColor::Red),
            }
            prop_assert_eq!(c.sink().property("--skin-color"), Some(accent.hex()));
        }

        #[test]
        fn stored_mode_resolves_with_host_only_when_empty(value in "[a-z]{0,6}", host_dark in prop::bool::ANY) {
            let store = MemoryStore::new().with_entry("theme", value.clone());
            let probe = if host_dark { FixedProbe::dark() } else { FixedProbe::light() };
            let mut c = ThemePreferenceController::new(store, probe, RootScope::new());
            c.initialize();

            let expected = match value.as_str() {
                "dark" => ColorMode::Dark,
                "" if host_dark => ColorMode::Dark,
                _ => ColorMode::Light,
            };
            prop_assert_eq!(c.current_preference().mode, expected);
        }
    }
}
