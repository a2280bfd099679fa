pub mod flash_modal;
pub mod menu_toggler;
pub mod notification_dismisser;

pub use flash_modal::{open_flash_modal, wire_modal_closers, FlashOutcome};
pub use menu_toggler::wire_menu_toggles;
pub use notification_dismisser::wire_dismissers;
