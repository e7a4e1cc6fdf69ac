//! Products listing panel: source selection, the create affordance, and the
//! inline creation dialog.
//!
//! State machine over one listing session:
//!
//! ```text
//! Initializing --initialize--> Ready --trigger_create--> CreatingDraft
//!                                ^                            |
//!                                +------ on_hidden/on_saved --+
//! ```
//!
//! Every operation absorbs stale input (unknown ids, unknown handles, late
//! dialog callbacks) as a no-op; the next listing refresh self-corrects.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use digitalproducts_core::{Handle, ProductTypeId, SiteHandle};
use digitalproducts_routes::CpUrls;

use crate::affordance::{CreateAffordance, IndexContext, compute_affordance, new_typed_product_label};
use crate::ports::{
    BrowserHistory, EditorLifecycle, EditorRequest, ElementEditor, ElementIndexHost, Ports, SavedElement,
};
use crate::registry::ElementIndex;
use crate::source::{ProductTypeSource, SourceDescriptor, product_types};

/// Element type identifier of digital products.
pub const PRODUCT_ELEMENT_TYPE: &str = "digitalproducts.product";

/// Per-session settings supplied by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    pub context: IndexContext,
    pub urls: CpUrls,
    /// Product type requested by the page URL (`products/{handle}`).
    pub default_source_handle: Option<String>,
    /// Site the control panel is currently editing.
    pub site: Option<SiteHandle>,
}

impl IndexSettings {
    pub fn new(context: IndexContext, urls: CpUrls) -> Self {
        Self { context, urls, default_source_handle: None, site: None }
    }

    pub fn with_default_source_handle(mut self, handle: impl Into<String>) -> Self {
        self.default_source_handle = Some(handle.into());
        self
    }

    pub fn with_site(mut self, site: SiteHandle) -> Self {
        self.site = Some(site);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Idle,
    Saving,
}

/// A product being created in the inline dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub product_type_id: ProductTypeId,
    pub site: Option<SiteHandle>,
    pub status: DraftStatus,
    /// Primary label to put back when the dialog goes away.
    restore_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Initializing,
    Ready,
    CreatingDraft(ProductDraft),
}

/// Controller of the products listing panel.
#[derive(Debug)]
pub struct ProductIndex {
    settings: IndexSettings,
    ports: Ports,
    sources: Vec<SourceDescriptor>,
    product_types: Vec<ProductTypeSource>,
    can_create_products: bool,
    selected: Option<Handle>,
    affordance: Option<CreateAffordance>,
    state: PanelState,
}

impl ProductIndex {
    pub fn new(settings: IndexSettings, ports: Ports) -> Self {
        Self {
            settings,
            ports,
            sources: Vec::new(),
            product_types: Vec::new(),
            can_create_products: false,
            selected: None,
            affordance: None,
            state: PanelState::Initializing,
        }
    }

    /// Factory signature used by the element index registry.
    pub fn boxed(settings: IndexSettings, ports: Ports) -> Box<dyn ElementIndex> {
        Box::new(Self::new(settings, ports))
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn product_types(&self) -> &[ProductTypeSource] {
        &self.product_types
    }

    pub fn can_create_products(&self) -> bool {
        self.can_create_products
    }

    pub fn selected_handle(&self) -> Option<&Handle> {
        self.selected.as_ref()
    }

    pub fn affordance(&self) -> Option<&CreateAffordance> {
        self.affordance.as_ref()
    }

    /// Parse the navigation sources and select the initial source.
    pub fn initialize(&mut self, sources: &[SourceDescriptor]) {
        self.rebuild_sources(sources);
        self.state = PanelState::Ready;

        let key = self.default_source_key();
        info!(
            context = ?self.settings.context,
            product_types = self.product_types.len(),
            can_create = self.can_create_products,
            default_source = ?key,
            "product index initialized"
        );

        match key {
            Some(key) => {
                self.ports.host.select_source_by_key(&key);
                let handle = self.handle_for_key(&key);
                self.on_source_selected(handle.as_deref());
            }
            None => self.on_source_selected(None),
        }
    }

    /// Rebuild the product-type list after the host's sources changed
    /// (permissions, reconfiguration). The selection is kept.
    pub fn refresh_sources(&mut self, sources: &[SourceDescriptor]) {
        if self.state == PanelState::Initializing {
            self.initialize(sources);
            return;
        }
        self.rebuild_sources(sources);
        self.render_affordance();
    }

    fn rebuild_sources(&mut self, sources: &[SourceDescriptor]) {
        self.sources = sources.to_vec();
        self.product_types = product_types(sources);
        self.can_create_products = self.product_types.iter().any(|t| t.editable);
    }

    /// Handle of the source keyed `key`. Product types resolve through their
    /// parsed handle, which may come from the key suffix.
    fn handle_for_key(&self, key: &str) -> Option<String> {
        self.product_types
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.handle.to_string())
            .or_else(|| self.sources.iter().find(|s| s.key == key).and_then(|s| s.handle.clone()))
    }

    /// The source requested by the page URL wins in index context; otherwise
    /// the host decides.
    fn default_source_key(&self) -> Option<String> {
        if self.settings.context == IndexContext::Index {
            if let Some(requested) = self.settings.default_source_handle.as_deref() {
                if let Some(source) = self.sources.iter().find(|s| s.handle.as_deref() == Some(requested)) {
                    return Some(source.key.clone());
                }
                debug!(requested, "requested product type not among sources");
            }
        }
        self.ports.host.default_source_key(&self.sources)
    }

    /// The host selected a source (`None`: a source without a handle).
    pub fn on_source_selected(&mut self, handle: Option<&str>) {
        self.selected = handle.and_then(|h| Handle::parse(h).ok());
        debug!(selected = ?self.selected, "source selected");

        self.render_affordance();

        if self.settings.context == IndexContext::Index {
            let uri = self.settings.urls.products(self.selected.as_ref());
            if let Some(history) = self.ports.history.as_mut() {
                history.replace_current_location(&uri);
            }
        }
    }

    fn render_affordance(&mut self) {
        self.affordance = compute_affordance(
            self.settings.context,
            &self.product_types,
            self.selected.as_ref(),
            &self.settings.urls,
        );

        // Keep the open dialog's marks across re-renders.
        if let PanelState::CreatingDraft(draft) = &mut self.state {
            let label = self
                .product_types
                .iter()
                .find(|t| t.id == Some(draft.product_type_id))
                .map(|t| new_typed_product_label(&t.name));
            if let Some(primary) = self.affordance.as_mut().map(|a| &mut a.primary) {
                draft.restore_label = primary.label.clone();
                primary.inactive = true;
                primary.loading = draft.status == DraftStatus::Saving;
                if let Some(label) = label {
                    primary.label = label;
                }
            }
        }
    }

    fn find_type(&self, id: ProductTypeId) -> Option<&ProductTypeSource> {
        self.product_types.iter().find(|t| t.id == Some(id))
    }

    /// Open the inline creation dialog for a product type.
    pub fn trigger_create(&mut self, product_type_id: ProductTypeId) {
        match self.state {
            PanelState::Ready => {}
            PanelState::Initializing => {
                debug!(%product_type_id, "create requested before initialization");
                return;
            }
            PanelState::CreatingDraft(_) => {
                debug!(%product_type_id, "creation dialog already open");
                return;
            }
        }

        let Some(product_type) = self.find_type(product_type_id) else {
            debug!(%product_type_id, "unknown product type; ignoring create");
            return;
        };
        let typed_label = new_typed_product_label(&product_type.name);

        let Some(primary) = self.affordance.as_mut().map(|a| &mut a.primary) else {
            return;
        };
        let restore_label = std::mem::replace(&mut primary.label, typed_label);
        primary.inactive = true;

        let draft = ProductDraft {
            product_type_id,
            site: self.settings.site.clone(),
            status: DraftStatus::Idle,
            restore_label,
        };
        let request = EditorRequest {
            element_type: PRODUCT_ELEMENT_TYPE.to_string(),
            site: draft.site.clone(),
            attributes: BTreeMap::from([("typeId".to_string(), serde_json::json!(product_type_id))]),
        };
        self.state = PanelState::CreatingDraft(draft);

        info!(%product_type_id, "opening product creation dialog");
        self.ports.editor.open(request);
    }

    fn set_loading(&mut self, loading: bool) {
        let PanelState::CreatingDraft(draft) = &mut self.state else {
            debug!(loading, "dialog loading callback without an open draft");
            return;
        };
        draft.status = if loading { DraftStatus::Saving } else { DraftStatus::Idle };
        if let Some(affordance) = self.affordance.as_mut() {
            affordance.primary.loading = loading;
        }
    }

    /// Clear the dialog marks and return to `Ready`.
    fn close_draft(&mut self) {
        let previous = std::mem::replace(&mut self.state, PanelState::Ready);
        if let Some(affordance) = self.affordance.as_mut() {
            affordance.primary.loading = false;
            affordance.primary.inactive = false;
            if let PanelState::CreatingDraft(draft) = previous {
                affordance.primary.label = draft.restore_label;
            }
        }
    }
}

impl EditorLifecycle for ProductIndex {
    fn on_begin_loading(&mut self) {
        self.set_loading(true);
    }

    fn on_end_loading(&mut self) {
        self.set_loading(false);
    }

    fn on_hidden(&mut self) {
        if self.state == PanelState::Initializing {
            return;
        }
        self.close_draft();
    }

    fn on_saved(&mut self, saved: SavedElement) {
        let PanelState::CreatingDraft(draft) = &self.state else {
            debug!(id = %saved.id, "save callback without an open draft");
            return;
        };

        let target = self
            .find_type(draft.product_type_id)
            .map(|t| (t.key.clone(), t.handle.clone()));

        if let Some((key, handle)) = target {
            if self.selected.as_ref() != Some(&handle) {
                self.ports.host.select_source_by_key(&key);
                self.on_source_selected(Some(handle.as_str()));
            }
        }

        info!(id = %saved.id, "product created");
        self.ports.host.select_element_after_update(saved.id);
        self.ports.host.update_elements();
        self.close_draft();
    }
}

impl ElementIndex for ProductIndex {
    fn element_type(&self) -> &'static str {
        PRODUCT_ELEMENT_TYPE
    }

    fn initialize(&mut self, sources: &[SourceDescriptor]) {
        ProductIndex::initialize(self, sources);
    }

    fn on_source_selected(&mut self, handle: Option<&str>) {
        ProductIndex::on_source_selected(self, handle);
    }

    fn create_affordance(&self) -> Option<&CreateAffordance> {
        self.affordance()
    }

    fn trigger_create(&mut self, product_type_id: ProductTypeId) {
        ProductIndex::trigger_create(self, product_type_id);
    }
}
