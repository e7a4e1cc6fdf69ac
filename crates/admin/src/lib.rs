//! `digitalproducts-admin` — control-panel listing logic for digital products.
//!
//! Framework-agnostic: the host admin shell, the element editor and browser
//! history are reached through the traits in [`ports`].

pub mod affordance;
pub mod ports;
pub mod product_index;
pub mod registry;
pub mod source;

pub use affordance::{
    ActionButton, CreateAffordance, IndexContext, MenuEntry, NEW_PRODUCT, Trigger, compute_affordance,
    new_typed_product_label,
};
pub use ports::{
    BrowserHistory, EditorLifecycle, EditorRequest, ElementEditor, ElementIndexHost, Ports, SavedElement,
};
pub use product_index::{
    DraftStatus, IndexSettings, PRODUCT_ELEMENT_TYPE, PanelState, ProductDraft, ProductIndex,
};
pub use registry::{ElementIndex, IndexFactory, Registration, create_index, is_registered, register_once};
pub use source::{NotAProductTypeSource, ProductTypeSource, SourceDescriptor};

/// Register the product index under [`PRODUCT_ELEMENT_TYPE`]. Idempotent.
pub fn register() -> Registration {
    register_once(PRODUCT_ELEMENT_TYPE, ProductIndex::boxed)
}
