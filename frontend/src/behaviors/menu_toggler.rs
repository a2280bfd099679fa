use crate::dom::{self, PageRoot};
use crate::error::BehaviorError;
use crate::services::logging::Logger;
use shared::PageMarkup;
use web_sys::Element;

const COMPONENT: &str = "menu-toggler";

/// A burger trigger and the attribute naming the panel it opens.
///
/// The panel is resolved on every click, so a panel rendered after initialization is
/// still found as long as its id matches.
struct ToggleTarget {
    root: PageRoot,
    trigger: Element,
    target_attribute: String,
    active_class: String,
}

impl ToggleTarget {
    fn toggle(&self) -> Result<(), BehaviorError> {
        let state = dom::toggle_class(&self.trigger, &self.active_class)?;

        // Used verbatim: no element carries an empty id, and padded ids do not match
        let target_id = self
            .trigger
            .get_attribute(&self.target_attribute)
            .filter(|id| !id.is_empty());
        let Some(target_id) = target_id else {
            Logger::warn_with_component(
                COMPONENT,
                &format!(
                    "burger has no {} attribute, only the trigger was toggled",
                    self.target_attribute
                ),
            );
            return Ok(());
        };

        match self.root.find_by_id(&target_id)? {
            Some(target) => {
                dom::toggle_class(&target, &self.active_class)?;
                let message = format!("#{} {} {}", target_id, self.active_class, state);
                Logger::debug_with_component(COMPONENT, &message);
            }
            None => Logger::warn_with_component(
                COMPONENT,
                &format!("menu target #{} not found, only the trigger was toggled", target_id),
            ),
        }
        Ok(())
    }
}

/// Wire every burger trigger under `root`. Returns how many were newly wired; triggers
/// wired by an earlier initialization are skipped.
pub fn wire_menu_toggles(root: &PageRoot, markup: &PageMarkup) -> Result<usize, BehaviorError> {
    let mut wired = 0;

    for burger in root.query_all(&markup.burger_selector)? {
        if !dom::claim(&burger, "burger")? {
            continue;
        }
        let toggle = ToggleTarget {
            root: root.clone(),
            trigger: burger.clone(),
            target_attribute: markup.burger_target_attribute.clone(),
            active_class: markup.active_class.clone(),
        };
        dom::on_click(&burger, move || {
            if let Err(e) = toggle.toggle() {
                Logger::error_with_component(COMPONENT, &e.to_string());
            }
        });
        wired += 1;
    }

    Logger::debug_with_component(COMPONENT, &format!("wired {} burger(s)", wired));
    Ok(wired)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_utils::Fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const NAVBAR: &str = r#"
        <nav class="navbar">
          <a role="button" class="navbar-burger" data-target="menu-toggler-main">
            <span></span><span></span><span></span>
          </a>
          <div id="menu-toggler-main" class="navbar-menu"></div>
        </nav>"#;

    #[wasm_bindgen_test]
    fn test_click_toggles_trigger_and_target() {
        let fixture = Fixture::new(NAVBAR);
        let wired = wire_menu_toggles(&fixture.root(), &PageMarkup::default()).unwrap();
        assert_eq!(wired, 1);

        fixture.click(".navbar-burger");
        assert!(fixture.has_class(".navbar-burger", "is-active"));
        assert!(fixture.has_class("#menu-toggler-main", "is-active"));

        // Second click restores both
        fixture.click(".navbar-burger");
        assert!(!fixture.has_class(".navbar-burger", "is-active"));
        assert!(!fixture.has_class("#menu-toggler-main", "is-active"));
    }

    #[wasm_bindgen_test]
    fn test_each_burger_drives_its_own_panel() {
        let fixture = Fixture::new(
            r#"
            <a role="button" class="navbar-burger first" data-target="menu-toggler-a"></a>
            <a role="button" class="navbar-burger second" data-target="menu-toggler-b"></a>
            <div id="menu-toggler-a"></div>
            <div id="menu-toggler-b"></div>"#,
        );
        assert_eq!(wire_menu_toggles(&fixture.root(), &PageMarkup::default()).unwrap(), 2);

        fixture.click(".second");
        assert!(!fixture.has_class(".first", "is-active"));
        assert!(!fixture.has_class("#menu-toggler-a", "is-active"));
        assert!(fixture.has_class(".second", "is-active"));
        assert!(fixture.has_class("#menu-toggler-b", "is-active"));
    }

    #[wasm_bindgen_test]
    fn test_missing_target_only_toggles_trigger() {
        let fixture = Fixture::new(
            r#"<a role="button" class="navbar-burger" data-target="menu-toggler-absent"></a>"#,
        );
        wire_menu_toggles(&fixture.root(), &PageMarkup::default()).unwrap();

        fixture.click(".navbar-burger");
        assert!(fixture.has_class(".navbar-burger", "is-active"));
    }

    #[wasm_bindgen_test]
    fn test_missing_target_attribute_only_toggles_trigger() {
        let fixture = Fixture::new(r#"<a role="button" class="navbar-burger"></a>"#);
        wire_menu_toggles(&fixture.root(), &PageMarkup::default()).unwrap();

        fixture.click(".navbar-burger");
        assert!(fixture.has_class(".navbar-burger", "is-active"));
    }

    #[wasm_bindgen_test]
    fn test_custom_markup() {
        let fixture = Fixture::new(
            r#"<button class="menu-button" data-panel="menu-toggler-custom"></button>
               <ul id="menu-toggler-custom"></ul>"#,
        );
        let markup = PageMarkup {
            burger_selector: ".menu-button".to_string(),
            burger_target_attribute: "data-panel".to_string(),
            active_class: "open".to_string(),
            ..PageMarkup::default()
        };
        wire_menu_toggles(&fixture.root(), &markup).unwrap();

        fixture.click(".menu-button");
        assert!(fixture.has_class("#menu-toggler-custom", "open"));
    }

    #[wasm_bindgen_test]
    fn test_no_burgers() {
        let fixture = Fixture::new("<nav></nav>");
        assert_eq!(wire_menu_toggles(&fixture.root(), &PageMarkup::default()).unwrap(), 0);
    }

    #[wasm_bindgen_test]
    fn test_rewiring_keeps_one_toggle_per_click() {
        let fixture = Fixture::new(NAVBAR);
        let markup = PageMarkup::default();
        assert_eq!(wire_menu_toggles(&fixture.root(), &markup).unwrap(), 1);
        assert_eq!(wire_menu_toggles(&fixture.root(), &markup).unwrap(), 0);

        fixture.click(".navbar-burger");
        assert!(fixture.has_class(".navbar-burger", "is-active"));
        assert!(fixture.has_class("#menu-toggler-main", "is-active"));
    }

    #[wasm_bindgen_test]
    fn test_padded_target_id_is_not_trimmed() {
        let fixture = Fixture::new(
            r#"<a role="button" class="navbar-burger" data-target=" menu-toggler-padded "></a>
               <div id="menu-toggler-padded"></div>"#,
        );
        wire_menu_toggles(&fixture.root(), &PageMarkup::default()).unwrap();

        fixture.click(".navbar-burger");
        assert!(fixture.has_class(".navbar-burger", "is-active"));
        assert!(!fixture.has_class("#menu-toggler-padded", "is-active"));
    }
}
