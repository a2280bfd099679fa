use crate::dom::{self, PageRoot};
use crate::error::BehaviorError;
use crate::services::logging::Logger;
use shared::{compose, FlashCategory, FlashMessage, PageMarkup};

const COMPONENT: &str = "flash-modal";

/// What happened when the flash modal was populated at load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashOutcome {
    /// The modal root or its message element is not on the page
    ModalMissing,
    /// An earlier initialization already handled this modal
    AlreadyPopulated,
    /// No flash notifications were rendered; the modal is left untouched
    NoMessages,
    /// The modal was filled and opened from `count` notifications
    Shown { count: usize },
}

/// Flash notifications inside the flash container, in document order
pub fn collect_flash_messages(
    root: &PageRoot,
    markup: &PageMarkup,
) -> Result<Vec<FlashMessage>, BehaviorError> {
    let notifications = root.query_all(&markup.flash_notification_selector())?;
    Ok(notifications
        .iter()
        .map(|note| {
            FlashMessage::new(
                &note.text_content().unwrap_or_default(),
                FlashCategory::from_class_list(&note.class_name()),
            )
        })
        .collect())
}

/// Copy the flash notifications into the modal and open it. Runs once per modal, so a
/// modal the user already closed is not reopened by a later initialization.
pub fn open_flash_modal(
    root: &PageRoot,
    markup: &PageMarkup,
) -> Result<FlashOutcome, BehaviorError> {
    let modal = root.find_by_id(&markup.flash_modal_id)?;
    let content = root.find_by_id(&markup.flash_message_id)?;
    let (Some(modal), Some(content)) = (modal, content) else {
        Logger::debug_with_component(COMPONENT, "no flash modal on this page");
        return Ok(FlashOutcome::ModalMissing);
    };
    if !dom::claim(&modal, "flash")? {
        return Ok(FlashOutcome::AlreadyPopulated);
    }

    let messages = collect_flash_messages(root, markup)?;
    let Some(shown) = compose(&messages, markup.flash_policy) else {
        return Ok(FlashOutcome::NoMessages);
    };

    content.set_text_content(Some(&shown.text));
    for category in FlashCategory::ALL {
        dom::remove_class(&content, category.class_name())?;
    }
    if let Some(category) = shown.category {
        dom::add_class(&content, category.class_name())?;
    }
    dom::add_class(&modal, &markup.active_class)?;

    let message = format!("showing flash modal for {} notification(s)", messages.len());
    Logger::info_with_component(COMPONENT, &message);
    Ok(FlashOutcome::Shown { count: messages.len() })
}

/// Wire the close button and background of the flash modal.
///
/// Nothing is wired when the modal itself is absent. Returns the number of closers newly
/// wired; closers wired by an earlier initialization are skipped.
pub fn wire_modal_closers(
    root: &PageRoot,
    markup: &PageMarkup,
) -> Result<usize, BehaviorError> {
    let closers = root.query_all(&markup.modal_closer_selector())?;

    let Some(modal) = root.find_by_id(&markup.flash_modal_id)? else {
        if !closers.is_empty() {
            let message = format!(
                "#{} not found, {} modal closer(s) left unwired",
                markup.flash_modal_id,
                closers.len()
            );
            Logger::warn_with_component(COMPONENT, &message);
        }
        return Ok(0);
    };

    let mut wired = 0;
    for closer in &closers {
        if !dom::claim(closer, "close-modal")? {
            continue;
        }
        let modal = modal.clone();
        let active_class = markup.active_class.clone();
        dom::on_click(closer, move || {
            if let Err(e) = dom::remove_class(&modal, &active_class) {
                Logger::error_with_component(COMPONENT, &e.to_string());
            }
        });
        wired += 1;
    }

    Ok(wired)
}
