//! Collaborators the panel drives but does not own.
//!
//! The host admin shell owns the source list and the element listing, the
//! element editor owns the creation dialog, and the browser owns history.
//! Implementations must not call back into the panel from inside these
//! methods; the panel updates its own state after each call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use digitalproducts_core::{ElementId, SiteHandle};

use crate::source::SourceDescriptor;

/// Element listing service of the host admin shell.
pub trait ElementIndexHost {
    /// Host default-selection policy (first source, remembered source, ...).
    fn default_source_key(&self, sources: &[SourceDescriptor]) -> Option<String>;

    /// Make `key` the selected source in the host's navigation.
    fn select_source_by_key(&mut self, key: &str);

    /// Reveal and select `id` once the next listing refresh completes.
    fn select_element_after_update(&mut self, id: ElementId);

    /// Refresh the listing.
    fn update_elements(&mut self);
}

/// Element creation/edit dialog.
///
/// `open` returns immediately. The dialog later reports progress through the
/// panel's `EditorLifecycle` hooks, on the same event loop.
pub trait ElementEditor {
    fn open(&mut self, request: EditorRequest);
}

/// Browser history.
pub trait BrowserHistory {
    /// Replace the current entry's location. Must not push a new entry.
    fn replace_current_location(&mut self, uri: &str);
}

/// Lifecycle hooks fired by the creation dialog.
pub trait EditorLifecycle {
    fn on_begin_loading(&mut self);
    fn on_end_loading(&mut self);
    /// The dialog was closed, cancelled or dismissed after a failed save.
    fn on_hidden(&mut self);
    fn on_saved(&mut self, saved: SavedElement);
}

/// What to open in the creation dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorRequest {
    pub element_type: String,
    pub site: Option<SiteHandle>,
    pub attributes: BTreeMap<String, serde_json::Value>,
}

/// Save-success payload from the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedElement {
    pub id: ElementId,
}

/// The panel's collaborators, bundled for construction.
pub struct Ports {
    pub host: Box<dyn ElementIndexHost>,
    pub editor: Box<dyn ElementEditor>,
    /// Absent when there is no browser history to rewrite.
    pub history: Option<Box<dyn BrowserHistory>>,
}

impl core::fmt::Debug for Ports {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ports").field("history", &self.history.is_some()).finish_non_exhaustive()
    }
}
