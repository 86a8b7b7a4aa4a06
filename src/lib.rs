#![doc(test(attr(deny(warnings))))]

//! Quick Add Widget rebuilds the home-screen "quick add" widget from the
//! preference snapshot its host app shares with it: category labels, the
//! amount display, button visibility and the action bound to every control.

pub mod action;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod preferences;
pub mod render;
pub mod utils;

pub use action::{KeypadValue, WidgetAction, DEFAULT_SCHEME};
pub use config::WidgetConfig;
pub use domain::{Category, CategoryList};
pub use errors::WidgetError;
pub use preferences::{MemoryPreferences, PreferenceStore, PreferenceValue, WidgetState};
pub use render::{
    update_widgets, RenderedWidget, Slot, SlotId, UpdateReport, ViewUpdate, WidgetHost,
    WidgetRenderer,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Quick Add Widget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
