use crate::dom::{self, PageRoot};
use crate::error::BehaviorError;
use crate::services::logging::Logger;
use shared::PageMarkup;
use web_sys::Element;

const COMPONENT: &str = "notification-dismisser";

/// A notification and the class that hides it. Dismissal is one way.
struct DismissibleNotification {
    notification: Element,
    hidden_class: String,
}

impl DismissibleNotification {
    fn dismiss(&self) -> Result<(), BehaviorError> {
        dom::add_class(&self.notification, &self.hidden_class)
    }
}

/// Wire every notification close control under `root`.
///
/// The notification is the closest ancestor matching the notification selector, so the
/// control may sit at any depth inside it. Controls outside a notification, and controls
/// wired by an earlier initialization, are skipped.
pub fn wire_dismissers(root: &PageRoot, markup: &PageMarkup) -> Result<usize, BehaviorError> {
    let mut wired = 0;

    for control in root.query_all(&markup.close_control_selector)? {
        let notification = control
            .closest(&markup.notification_selector)
            .map_err(|err| BehaviorError::invalid_selector(&markup.notification_selector, err))?;
        let Some(notification) = notification else {
            let message = "close control outside of a notification, skipped";
            Logger::warn_with_component(COMPONENT, message);
            continue;
        };
        if !dom::claim(&control, "dismiss")? {
            continue;
        }

        let dismissible = DismissibleNotification {
            notification,
            hidden_class: markup.hidden_class.clone(),
        };
        dom::on_click(&control, move || {
            if let Err(e) = dismissible.dismiss() {
                Logger::error_with_component(COMPONENT, &e.to_string());
            }
        });
        wired += 1;
    }

    Logger::debug_with_component(COMPONENT, &format!("wired {} close control(s)", wired));
    Ok(wired)
}
