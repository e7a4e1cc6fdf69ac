//! End-to-end listing session through the element index registry.

use std::cell::RefCell;
use std::rc::Rc;

use digitalproducts_admin::{
    BrowserHistory, EditorLifecycle, EditorRequest, ElementEditor, ElementIndex, ElementIndexHost, IndexContext,
    IndexSettings, PRODUCT_ELEMENT_TYPE, Ports, Registration, SavedElement, SourceDescriptor, Trigger, create_index,
    register,
};
use digitalproducts_core::{ElementId, ProductTypeId};
use digitalproducts_routes::CpUrls;

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    location: Vec<String>,
}

type Shared = Rc<RefCell<Recorder>>;

struct Host(Shared);
struct Editor(Shared);
struct History(Shared);

impl ElementIndexHost for Host {
    fn default_source_key(&self, sources: &[SourceDescriptor]) -> Option<String> {
        sources.first().map(|s| s.key.clone())
    }
    fn select_source_by_key(&mut self, key: &str) {
        self.0.borrow_mut().events.push(format!("select-source {key}"));
    }
    fn select_element_after_update(&mut self, id: ElementId) {
        self.0.borrow_mut().events.push(format!("select-element {id}"));
    }
    fn update_elements(&mut self) {
        self.0.borrow_mut().events.push("update-elements".to_string());
    }
}

impl ElementEditor for Editor {
    fn open(&mut self, request: EditorRequest) {
        self.0.borrow_mut().events.push(format!("open {} {}", request.element_type, request.attributes["typeId"]));
    }
}

impl BrowserHistory for History {
    fn replace_current_location(&mut self, uri: &str) {
        let mut r = self.0.borrow_mut();
        r.location.clear();
        r.location.push(uri.to_string());
    }
}

fn ports(shared: &Shared) -> Ports {
    Ports {
        host: Box::new(Host(shared.clone())),
        editor: Box::new(Editor(shared.clone())),
        history: Some(Box::new(History(shared.clone()))),
    }
}

fn sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new("productType:1", "Software").with_handle("software").editable(true),
        SourceDescriptor::new("productType:2", "Fonts").with_handle("fonts").editable(true),
        SourceDescriptor::new("productType:3", "Archive").with_handle("archive"),
    ]
}

#[test]
fn registration_is_idempotent() {
    let first = register();
    assert!(matches!(first, Registration::Registered | Registration::AlreadyRegistered));
    assert_eq!(register(), Registration::AlreadyRegistered);
}

#[test]
fn embedded_session_creates_product_in_another_type() {
    register();
    let shared: Shared = Rc::default();
    let settings = IndexSettings::new(IndexContext::Embedded, CpUrls::new("admin", "commerce-digitalproducts"));
    let mut index = create_index(PRODUCT_ELEMENT_TYPE, settings, ports(&shared)).expect("registered");
    assert_eq!(index.element_type(), PRODUCT_ELEMENT_TYPE);

    index.initialize(&sources());
    let affordance = index.create_affordance().expect("creatable types");
    assert_eq!(affordance.primary.label, "New Software product");
    assert_eq!(affordance.menu_labels(), vec!["New Fonts product", "New Archive product"]);

    let Some(Trigger::Dialog(fonts)) = affordance.menu.as_ref().map(|m| m[0].trigger.clone()) else {
        panic!("menu entry should open the dialog");
    };
    index.trigger_create(fonts);
    index.on_begin_loading();
    index.on_end_loading();
    index.on_saved(SavedElement { id: ElementId::new(501) });
    index.on_hidden();

    let events = shared.borrow().events.clone();
    assert_eq!(
        events,
        vec![
            "select-source productType:1",
            "open digitalproducts.product 2",
            "select-source productType:2",
            "select-element 501",
            "update-elements",
        ]
    );
    assert_eq!(index.create_affordance().unwrap().primary.label, "New Fonts product");
    // Embedded panels never touch the address bar.
    assert!(shared.borrow().location.is_empty());
}

#[test]
fn index_session_links_to_creation_pages() {
    register();
    let shared: Shared = Rc::default();
    let settings = IndexSettings::new(IndexContext::Index, CpUrls::new("admin", "commerce-digitalproducts"))
        .with_default_source_handle("fonts");
    let mut index = create_index(PRODUCT_ELEMENT_TYPE, settings, ports(&shared)).expect("registered");

    index.initialize(&sources());
    assert_eq!(shared.borrow().location, vec!["/admin/commerce-digitalproducts/products/fonts"]);

    let affordance = index.create_affordance().unwrap();
    assert_eq!(affordance.primary.label, "New product");
    assert_eq!(
        affordance.primary.trigger,
        Some(Trigger::Href("/admin/commerce-digitalproducts/products/fonts/new".to_string())),
    );
    assert_eq!(affordance.menu_labels(), vec!["Software", "Fonts", "Archive"]);

    // A stale id is ignored.
    index.trigger_create(ProductTypeId::new(404));
    assert!(!shared.borrow().events.iter().any(|e| e.starts_with("open")));

    // Archive is listed, so its entry opens the dialog like any other.
    index.trigger_create(ProductTypeId::new(3));
    assert!(shared.borrow().events.iter().any(|e| e == "open digitalproducts.product 3"));
}
