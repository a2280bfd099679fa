//! Fallible DOM lookups scoped to a page root.
//!
//! Every query returns `Result`/`Option` so behaviors branch on absent elements instead
//! of faulting inside an event handler.

use crate::error::BehaviorError;
use gloo::events::EventListener;
use shared::{id_selector, ClassToggle};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

/// The part of the page behaviors are wired against
#[derive(Debug, Clone)]
pub enum PageRoot {
    Document(Document),
    Element(Element),
}

impl PageRoot {
    /// The document of the current window
    pub fn document() -> Result<Self, BehaviorError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(PageRoot::Document)
            .ok_or(BehaviorError::NoDocument)
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, BehaviorError> {
        let list = match self {
            PageRoot::Document(document) => document.query_selector_all(selector),
            PageRoot::Element(element) => element.query_selector_all(selector),
        }
        .map_err(|err| BehaviorError::invalid_selector(selector, err))?;
        Ok(elements(&list))
    }

    pub fn query(&self, selector: &str) -> Result<Option<Element>, BehaviorError> {
        match self {
            PageRoot::Document(document) => document.query_selector(selector),
            PageRoot::Element(element) => element.query_selector(selector),
        }
        .map_err(|err| BehaviorError::invalid_selector(selector, err))
    }

    /// Look an id up inside the root first, then in the owning document
    pub fn find_by_id(&self, id: &str) -> Result<Option<Element>, BehaviorError> {
        if let PageRoot::Document(document) = self {
            return Ok(document.get_element_by_id(id));
        }
        if let Some(found) = self.query(&id_selector(id))? {
            return Ok(Some(found));
        }
        Ok(self
            .owner_document()
            .and_then(|document| document.get_element_by_id(id)))
    }

    fn owner_document(&self) -> Option<Document> {
        match self {
            PageRoot::Document(document) => Some(document.clone()),
            PageRoot::Element(element) => element.owner_document(),
        }
    }
}

impl From<Document> for PageRoot {
    fn from(document: Document) -> Self {
        PageRoot::Document(document)
    }
}

impl From<Element> for PageRoot {
    fn from(element: Element) -> Self {
        PageRoot::Element(element)
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn toggle_class(element: &Element, class: &str) -> Result<ClassToggle, BehaviorError> {
    element
        .class_list()
        .toggle(class)
        .map(ClassToggle::from_present)
        .map_err(BehaviorError::dom)
}

pub fn add_class(element: &Element, class: &str) -> Result<(), BehaviorError> {
    element.class_list().add_1(class).map_err(BehaviorError::dom)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), BehaviorError> {
    element.class_list().remove_1(class).map_err(BehaviorError::dom)
}

/// Mark `element` as wired for `behavior`. Returns `false` when an earlier
/// initialization already wired it, so listeners never stack.
pub fn claim(element: &Element, behavior: &str) -> Result<bool, BehaviorError> {
    let marker = format!("data-page-behaviors-{}", behavior);
    if element.has_attribute(&marker) {
        return Ok(false);
    }
    element.set_attribute(&marker, "").map_err(BehaviorError::dom)?;
    Ok(true)
}

/// Attach a click listener that lives as long as the page
pub fn on_click<F>(element: &Element, mut handler: F)
where
    F: FnMut() + 'static,
{
    EventListener::new(element, "click", move |_event| handler()).forget();
}
