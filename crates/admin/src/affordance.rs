//! The contextual "new product" action.
//!
//! Rendering is data: the panel computes a `CreateAffordance` and the host
//! draws it. Nothing here touches the DOM or the network.

use serde::{Deserialize, Serialize};

use digitalproducts_core::{Handle, ProductTypeId};
use digitalproducts_routes::CpUrls;

use crate::source::ProductTypeSource;

/// Label of the untyped create action.
pub const NEW_PRODUCT: &str = "New product";

/// Label naming the product type being created.
pub fn new_typed_product_label(type_name: &str) -> String {
    format!("New {type_name} product")
}

/// Where the listing is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexContext {
    /// The standalone products index page.
    Index,
    /// Embedded in another screen (element selector modal, relation field).
    Embedded,
}

/// What activating an action does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "target")]
pub enum Trigger {
    /// Navigate to the type's dedicated creation page.
    Href(String),
    /// Open the inline creation dialog for the type.
    Dialog(ProductTypeId),
}

/// The primary control of the affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub label: String,
    /// `None` when the button only opens the menu.
    pub trigger: Option<Trigger>,
    pub opens_menu: bool,
    /// The creation dialog is loading or saving.
    pub loading: bool,
    /// A creation dialog is open for this button.
    pub inactive: bool,
}

impl ActionButton {
    fn new(label: String, trigger: Option<Trigger>, opens_menu: bool) -> Self {
        Self { label, trigger, opens_menu, loading: false, inactive: false }
    }
}

/// One menu option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub label: String,
    pub handle: Handle,
    pub trigger: Trigger,
}

/// The rendered create action: a primary button plus an optional menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAffordance {
    pub primary: ActionButton,
    pub menu: Option<Vec<MenuEntry>>,
}

impl CreateAffordance {
    /// A separate menu button sits next to the primary action.
    pub fn has_secondary_menu_trigger(&self) -> bool {
        self.menu.is_some() && !self.primary.opens_menu
    }

    pub fn menu_labels(&self) -> Vec<&str> {
        self.menu.iter().flatten().map(|e| e.label.as_str()).collect()
    }
}

fn trigger_for(context: IndexContext, product_type: &ProductTypeSource, urls: &CpUrls) -> Trigger {
    match (context, product_type.id) {
        (IndexContext::Embedded, Some(id)) => Trigger::Dialog(id),
        // Without an id the dialog cannot be scoped; fall back to the creation page.
        _ => Trigger::Href(urls.new_product(&product_type.handle)),
    }
}

fn menu_entry(context: IndexContext, product_type: &ProductTypeSource, urls: &CpUrls) -> MenuEntry {
    let label = match context {
        IndexContext::Index => product_type.name.clone(),
        IndexContext::Embedded => new_typed_product_label(&product_type.name),
    };
    MenuEntry { label, handle: product_type.handle.clone(), trigger: trigger_for(context, product_type, urls) }
}

/// Compute the create affordance for the current selection.
///
/// `None` means nothing is shown: no product type is creatable.
pub fn compute_affordance(
    context: IndexContext,
    product_types: &[ProductTypeSource],
    selected: Option<&Handle>,
    urls: &CpUrls,
) -> Option<CreateAffordance> {
    if !product_types.iter().any(|t| t.editable) {
        return None;
    }

    let selected_type = selected
        .and_then(|h| product_types.iter().find(|t| &t.handle == h))
        .filter(|t| t.editable);

    let menu_for = |exclude: Option<&ProductTypeSource>| -> Vec<MenuEntry> {
        product_types
            .iter()
            .filter(|t| context == IndexContext::Index || exclude.is_none_or(|ex| ex.handle != t.handle))
            .map(|t| menu_entry(context, t, urls))
            .collect()
    };

    let affordance = match selected_type {
        Some(current) => {
            let label = match context {
                IndexContext::Index => NEW_PRODUCT.to_string(),
                IndexContext::Embedded => new_typed_product_label(&current.name),
            };
            let primary = ActionButton::new(label, Some(trigger_for(context, current, urls)), false);
            let menu = (product_types.len() > 1).then(|| menu_for(Some(current)));
            CreateAffordance { primary, menu }
        }
        None => CreateAffordance {
            primary: ActionButton::new(NEW_PRODUCT.to_string(), None, true),
            menu: Some(menu_for(None)),
        },
    };

    Some(affordance)
}
