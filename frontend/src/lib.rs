//! Click behaviors for the server-rendered pages: burger menus, dismissible
//! notifications and the flash message modal.
//!
//! The module wires itself on load (see [`start`]); host code that renders markup later,
//! or wants a different root, calls `initPageBehaviors` explicitly. Elements are marked
//! when wired, so calling it on an already wired document only picks up new elements.

pub mod behaviors;
pub mod dom;
pub mod error;
pub mod services;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_utils;

use behaviors::{
    open_flash_modal, wire_dismissers, wire_menu_toggles, wire_modal_closers, FlashOutcome,
};
use gloo::events::EventListener;
use services::logging::Logger;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub use dom::PageRoot;
pub use error::BehaviorError;
pub use shared::{FlashPolicy, LogLevel, PageMarkup};

/// Id of the optional `<script type="application/json">` block overriding [`PageMarkup`]
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

const COMPONENT: &str = "init";

/// What [`init`] wired. Failures are recorded per behavior; one failing behavior does not
/// prevent the others from being wired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitReport {
    pub burgers: usize,
    pub dismissers: usize,
    pub flash: Option<FlashOutcome>,
    pub modal_closers: usize,
    pub errors: Vec<String>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, component: &str, error: BehaviorError) {
        Logger::error_with_component(component, &error.to_string());
        self.errors.push(format!("{}: {}", component, error));
    }
}

/// Wire every behavior once against `root`.
///
/// Elements added to the page afterwards are not picked up; call again if needed.
/// Elements wired by an earlier call are skipped.
pub fn init(root: &PageRoot, markup: &PageMarkup) -> InitReport {
    let mut report = InitReport::default();

    match wire_menu_toggles(root, markup) {
        Ok(count) => report.burgers = count,
        Err(e) => report.record("menu-toggler", e),
    }
    match wire_dismissers(root, markup) {
        Ok(count) => report.dismissers = count,
        Err(e) => report.record("notification-dismisser", e),
    }
    match open_flash_modal(root, markup) {
        Ok(outcome) => report.flash = Some(outcome),
        Err(e) => report.record("flash-modal", e),
    }
    match wire_modal_closers(root, markup) {
        Ok(count) => report.modal_closers = count,
        Err(e) => report.record("flash-modal", e),
    }

    Logger::debug_with_component(
        COMPONENT,
        &format!(
            "wired {} burger(s), {} close control(s), {} modal closer(s)",
            report.burgers, report.dismissers, report.modal_closers
        ),
    );
    report
}

/// Read the configuration block under `root`, falling back to defaults when it is absent
/// or invalid.
pub fn load_markup(root: &PageRoot) -> PageMarkup {
    match read_config(root) {
        Ok(Some(markup)) => markup,
        Ok(None) => PageMarkup::default(),
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("{}, using default markup", e));
            PageMarkup::default()
        }
    }
}

fn read_config(root: &PageRoot) -> Result<Option<PageMarkup>, BehaviorError> {
    let Some(element) = root.find_by_id(CONFIG_ELEMENT_ID)? else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    Ok(Some(PageMarkup::from_json(&json)?))
}

/// Explicit initialization for host code.
///
/// `root` defaults to the whole document. `config_json` overrides the page's
/// configuration block; an invalid override is returned as an error.
#[wasm_bindgen(js_name = initPageBehaviors)]
pub fn init_page_behaviors(
    root: Option<Element>,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let root = match root {
        Some(element) => PageRoot::from(element),
        None => PageRoot::document()?,
    };
    let markup = match config_json {
        Some(json) => PageMarkup::from_json(&json).map_err(BehaviorError::from)?,
        None => load_markup(&root),
    };
    Logger::set_level(markup.log_level);
    init(&root, &markup);
    Ok(())
}

/// Load the page configuration and wire `root` unless `auto_start` is off.
///
/// Returns `None` when auto start is disabled.
fn auto_init(root: &PageRoot) -> Option<InitReport> {
    let markup = load_markup(root);
    Logger::set_level(markup.log_level);
    if !markup.auto_start {
        Logger::debug_with_component(COMPONENT, "auto start disabled");
        return None;
    }
    Some(init(root, &markup))
}

/// Module entry point: wire the document once it is ready.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BehaviorError::NoDocument)?;
    let root = PageRoot::from(document.clone());

    if document.ready_state() == "loading" {
        // The config block may not be parsed yet, so nothing is read before the event
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            auto_init(&root);
        })
        .forget();
    } else {
        auto_init(&root);
    }
    Ok(())
}
