//! Markup fixtures for browser tests.
//!
//! A fixture is a `<div>` appended to the test document body and removed again when the
//! fixture is dropped, even if the test panics.
use crate::dom::PageRoot;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub struct Fixture {
    container: Element,
}

impl Fixture {
    pub fn new(html: &str) -> Self {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("tests run in a browser");
        let container = document.create_element("div").expect("create fixture");
        container.set_inner_html(html);
        document
            .body()
            .expect("document has a body")
            .append_child(&container)
            .expect("attach fixture");
        Self { container }
    }

    pub fn root(&self) -> PageRoot {
        PageRoot::from(self.container.clone())
    }

    pub fn element(&self, selector: &str) -> Element {
        self.container
            .query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("fixture has no {}", selector))
    }

    pub fn click(&self, selector: &str) {
        self.element(selector)
            .dyn_into::<HtmlElement>()
            .expect("clickable element")
            .click();
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.element(selector).class_list().contains(class)
    }

    pub fn text(&self, selector: &str) -> String {
        self.element(selector).text_content().unwrap_or_default()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.container.remove();
    }
}
