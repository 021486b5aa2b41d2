//! Reflecting the preference onto the page.
//!
//! This module provides:
//!
//! - [`RenderSink`]: Where the controller writes the accent property and dark class
//! - [`RootScope`]: An in-memory document root that renders its attributes
//! - [`SwitcherPanel`]: The slide-out accent/mode switcher and its markup

mod panel;
mod root;

pub use panel::{SwitcherEvent, SwitcherPanel};
pub use root::RootScope;

/// The document root as seen by the controller.
///
/// Presentational code reads the result through stylesheet rules
/// (`var(--skin-color)`, `.dark` selectors); it never calls back into the
/// controller.
pub trait RenderSink {
    /// Sets a CSS custom property such as `--skin-color`.
    fn set_property(&mut self, name: &str, value: &str);

    /// Adds (`enabled`) or removes a root class such as `dark`.
    fn set_class(&mut self, name: &str, enabled: bool);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value)
    }

    fn set_class(&mut self, name: &str, enabled: bool) {
        (**self).set_class(name, enabled)
    }
}
