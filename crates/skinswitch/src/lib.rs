//! # Skinswitch - accent color and light/dark preference
//!
//! `skinswitch` owns a site's visual preference: one accent color from a
//! fixed palette plus a light or dark mode. It resolves the preference on
//! load, applies it to the document root, and persists changes so the next
//! load looks the same.
//!
//! ## Core Concepts
//!
//! - [`ThemePreferenceController`]: The single owner of the preference
//! - [`AccentColor`] and [`ColorMode`]: Closed enums, so invalid values cannot exist
//! - [`PreferenceStore`]: Where choices persist ([`MemoryStore`], [`FileStore`])
//! - [`ColorSchemeProbe`]: The host's light/dark hint ([`OsProbe`], [`FixedProbe`])
//! - [`RenderSink`]: Where the `--skin-color` property and `dark` class land ([`RootScope`])
//! - [`SwitcherPanel`]: The slide-out switcher and its markup
//!
//! ## Quick Start
//!
//! ```rust
//! use skinswitch::{
//!     AccentColor, ColorMode, FixedProbe, MemoryStore, RootScope, ThemePreference,
//!     ThemePreferenceController,
//! };
//!
//! let mut controller =
//!     ThemePreferenceController::new(MemoryStore::new(), FixedProbe::unavailable(), RootScope::new());
//! controller.initialize();
//! assert_eq!(
//!     controller.current_preference(),
//!     ThemePreference::new(AccentColor::Red, ColorMode::Light)
//! );
//!
//! controller.set_accent_color(AccentColor::Blue);
//! controller.set_mode(ColorMode::Dark);
//!
//! // Reload: a fresh controller over the same store sees the same preference.
//! let (store, probe, _) = controller.into_parts();
//! let mut reloaded = ThemePreferenceController::new(store, probe, RootScope::new());
//! reloaded.initialize();
//! assert_eq!(
//!     reloaded.current_preference(),
//!     ThemePreference::new(AccentColor::Blue, ColorMode::Dark)
//! );
//! assert_eq!(
//!     reloaded.sink().html_attributes(),
//!     r#"class="dark" style="--skin-color: #1854b4;""#
//! );
//! ```
//!
//! ## Failure Handling
//!
//! Nothing here fails loudly. Unreadable storage resolves to the host hint
//! and then to defaults; unwritable storage still updates the current
//! session. Both are reported through `tracing` at `warn` level.

pub mod config;
mod controller;
pub mod render;
pub mod store;
pub mod theme;

pub use config::SwitcherConfig;
pub use controller::ThemePreferenceController;
pub use render::{RenderSink, RootScope, SwitcherEvent, SwitcherPanel};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use theme::{
    reset_scheme_detector, set_scheme_detector, AccentColor, ColorMode, ColorSchemeProbe,
    FixedProbe, OsProbe, ThemePreference,
};
