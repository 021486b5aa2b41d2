//! The slide-out style switcher.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::RenderSink;
use crate::controller::ThemePreferenceController;
use crate::store::PreferenceStore;
use crate::theme::{AccentColor, ColorMode, ColorSchemeProbe, ThemePreference};

const TEMPLATE_NAME: &str = "panel.html";
const TEMPLATE_SOURCE: &str = include_str!("templates/panel.html");

/// A user interaction with the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherEvent {
    /// The palette tab was clicked.
    Toggle,
    /// The close button was clicked.
    Close,
    /// The page scrolled; an open panel closes.
    Scroll,
    /// A color swatch was clicked.
    PickAccent(AccentColor),
    /// The Light or Dark button was clicked.
    PickMode(ColorMode),
}

#[derive(Serialize)]
struct SwatchView {
    id: String,
    name: &'static str,
    hex: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct ModeView {
    token: &'static str,
    label: &'static str,
    icon: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct PanelView {
    open: bool,
    swatches: Vec<SwatchView>,
    modes: Vec<ModeView>,
}

/// Open/closed state and markup for the switcher panel.
///
/// The panel only owns whether it is slid out. Preference changes are
/// forwarded to a [`ThemePreferenceController`], and rendering reads a
/// [`ThemePreference`] snapshot.
///
/// # Example
///
/// ```rust
/// use skinswitch::{
///     AccentColor, FixedProbe, MemoryStore, RootScope, SwitcherEvent, SwitcherPanel,
///     ThemePreferenceController,
/// };
///
/// let mut controller =
///     ThemePreferenceController::new(MemoryStore::new(), FixedProbe::unavailable(), RootScope::new());
/// controller.initialize();
///
/// let mut panel = SwitcherPanel::new().unwrap();
/// panel.handle(SwitcherEvent::Toggle, &mut controller);
/// panel.handle(SwitcherEvent::PickAccent(AccentColor::Green), &mut controller);
///
/// let html = panel.render(controller.current_preference()).unwrap();
/// assert!(html.contains(r#"data-open="true""#));
/// ```
pub struct SwitcherPanel {
    open: bool,
    env: Environment<'static>,
}

impl SwitcherPanel {
    /// Creates a closed panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the panel template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { open: false, env })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Applies an event, forwarding preference changes to `controller`.
    pub fn handle<S, P, R>(
        &mut self,
        event: SwitcherEvent,
        controller: &mut ThemePreferenceController<S, P, R>,
    ) where
        S: PreferenceStore,
        P: ColorSchemeProbe,
        R: RenderSink,
    {
        match event {
            SwitcherEvent::Toggle => self.toggle(),
            SwitcherEvent::Close | SwitcherEvent::Scroll => self.close(),
            SwitcherEvent::PickAccent(accent) => controller.set_accent_color(accent),
            SwitcherEvent::PickMode(mode) => controller.set_mode(mode),
        }
    }

    /// Renders the panel markup for the given preference.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, preference: ThemePreference) -> Result<String, Error> {
        let view = PanelView {
            open: self.open,
            swatches: AccentColor::ALL
                .into_iter()
                .map(|color| SwatchView {
                    id: color.swatch_id(),
                    name: color.name(),
                    hex: color.hex(),
                    active: color == preference.accent,
                })
                .collect(),
            modes: ColorMode::ALL
                .into_iter()
                .map(|mode| ModeView {
                    token: mode.token(),
                    label: match mode {
                        ColorMode::Light => "Light",
                        ColorMode::Dark => "Dark",
                    },
                    icon: match mode {
                        ColorMode::Light => "\u{2600}\u{fe0f}",
                        ColorMode::Dark => "\u{1f319}",
                    },
                    active: mode == preference.mode,
                })
                .collect(),
        };

        self.env.get_template(TEMPLATE_NAME)?.render(&view)
    }
}

impl std::fmt::Debug for SwitcherPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitcherPanel")
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}
