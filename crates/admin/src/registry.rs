//! Process-wide registry of element index controllers, keyed by element type.
//!
//! Registration is idempotent: the first factory registered for an element
//! type wins and later registrations are reported, not rejected. Register
//! during startup, before any `create_index` call for that type.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use tracing::debug;

use digitalproducts_core::ProductTypeId;

use crate::affordance::CreateAffordance;
use crate::ports::{EditorLifecycle, Ports};
use crate::product_index::IndexSettings;
use crate::source::SourceDescriptor;

/// Object-safe face of an element index controller.
pub trait ElementIndex: EditorLifecycle + core::fmt::Debug {
    fn element_type(&self) -> &'static str;
    fn initialize(&mut self, sources: &[SourceDescriptor]);
    fn on_source_selected(&mut self, handle: Option<&str>);
    fn create_affordance(&self) -> Option<&CreateAffordance>;
    fn trigger_create(&mut self, product_type_id: ProductTypeId);
}

/// Builds a controller for one listing session.
pub type IndexFactory = fn(IndexSettings, Ports) -> Box<dyn ElementIndex>;

/// Outcome of `register_once`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    AlreadyRegistered,
}

static REGISTRY: Lazy<Mutex<HashMap<String, IndexFactory>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Register `factory` for `element_type` unless a factory is already present.
pub fn register_once(element_type: &str, factory: IndexFactory) -> Registration {
    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if registry.contains_key(element_type) {
        debug!(element_type, "element index already registered");
        return Registration::AlreadyRegistered;
    }
    registry.insert(element_type.to_string(), factory);
    debug!(element_type, "element index registered");
    Registration::Registered
}

pub fn is_registered(element_type: &str) -> bool {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner).contains_key(element_type)
}

/// Build the registered controller for `element_type`.
pub fn create_index(element_type: &str, settings: IndexSettings, ports: Ports) -> Option<Box<dyn ElementIndex>> {
    let factory = *REGISTRY.lock().unwrap_or_else(PoisonError::into_inner).get(element_type)?;
    Some(factory(settings, ports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_index::ProductIndex;

    fn other_factory(settings: IndexSettings, ports: Ports) -> Box<dyn ElementIndex> {
        ProductIndex::boxed(settings, ports)
    }

    #[test]
    fn duplicate_registration_is_a_reported_no_op() {
        let element_type = "tests.registry.duplicate";
        assert_eq!(register_once(element_type, ProductIndex::boxed), Registration::Registered);
        assert_eq!(register_once(element_type, other_factory), Registration::AlreadyRegistered);
        assert!(is_registered(element_type));
    }

    #[test]
    fn unknown_element_types_are_not_registered() {
        assert!(!is_registered("tests.registry.never"));
    }
}
