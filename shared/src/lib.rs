use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Describes the server-rendered markup the page behaviors bind to.
///
/// Every field has a default matching the Bulma markup the server templates emit, so a
/// page only needs to override what differs:
///
/// ```json
/// { "flash_modal_id": "notice-modal", "flash_policy": "show-all" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMarkup {
    /// Selector matching hamburger triggers
    pub burger_selector: String,
    /// Attribute on a trigger holding the id of the panel it toggles
    pub burger_target_attribute: String,
    /// State class for open menus and the open modal
    pub active_class: String,
    /// State class for dismissed notifications
    pub hidden_class: String,
    /// Selector matching a notification element
    pub notification_selector: String,
    /// Selector matching the close control inside a notification
    pub close_control_selector: String,
    /// Selector matching the element wrapping flash notifications
    pub flash_container_selector: String,
    /// Id of the flash modal root
    pub flash_modal_id: String,
    /// Id of the element receiving the flash text
    pub flash_message_id: String,
    /// Selectors of elements that close the modal when clicked
    pub modal_closer_selectors: Vec<String>,
    /// How several flash notifications are combined into the modal
    pub flash_policy: FlashPolicy,
    /// Minimum level written to the console
    pub log_level: LogLevel,
    /// Wire the page automatically once the document is ready
    pub auto_start: bool,
}

impl Default for PageMarkup {
    fn default() -> Self {
        Self {
            burger_selector: ".navbar-burger".to_string(),
            burger_target_attribute: "data-target".to_string(),
            active_class: "is-active".to_string(),
            hidden_class: "is-hidden".to_string(),
            notification_selector: ".notification".to_string(),
            close_control_selector: ".notification .delete".to_string(),
            flash_container_selector: ".notification-container".to_string(),
            flash_modal_id: "flash-modal".to_string(),
            flash_message_id: "flash-message-content".to_string(),
            modal_closer_selectors: vec![
                ".modal-close".to_string(),
                ".modal-background".to_string(),
            ],
            flash_policy: FlashPolicy::default(),
            log_level: LogLevel::default(),
            auto_start: true,
        }
    }
}

impl PageMarkup {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let markup: PageMarkup = serde_json::from_str(json)?;
        markup.validate()?;
        Ok(markup)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("burger_selector", &self.burger_selector),
            ("notification_selector", &self.notification_selector),
            ("close_control_selector", &self.close_control_selector),
            ("flash_container_selector", &self.flash_container_selector),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }

        // Tokens end up in classList calls or id lookups, where whitespace is never valid
        let tokens = [
            ("burger_target_attribute", &self.burger_target_attribute),
            ("active_class", &self.active_class),
            ("hidden_class", &self.hidden_class),
            ("flash_modal_id", &self.flash_modal_id),
            ("flash_message_id", &self.flash_message_id),
        ];
        for (field, value) in tokens {
            if value.is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidToken {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.modal_closer_selectors.is_empty() {
            return Err(ConfigError::NoModalClosers);
        }
        if self.modal_closer_selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptyField("modal_closer_selectors"));
        }

        Ok(())
    }

    /// Selector for notifications rendered inside the flash container
    pub fn flash_notification_selector(&self) -> String {
        format!("{} {}", self.flash_container_selector, self.notification_selector)
    }

    /// Selector group matching every modal closer
    pub fn modal_closer_selector(&self) -> String {
        self.modal_closer_selectors.join(", ")
    }
}

/// Attribute selector for an id. Works on detached fragments and on ids that are not
/// valid CSS identifiers (leading digits, dots, control characters).
pub fn id_selector(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for c in id.chars() {
        match c {
            '\\' | '"' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\0' => escaped.push('\u{FFFD}'),
            // Control characters are only valid in a CSS string as hex escapes
            c if c <= '\u{1F}' || c == '\u{7F}' => {
                escaped.push_str(&format!("\\{:x} ", c as u32));
            }
            c => escaped.push(c),
        }
    }
    format!("[id=\"{}\"]", escaped)
}

/// Bulma color modifier a server flash category renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Info,
    Warning,
    Danger,
    Primary,
    Link,
}

impl FlashCategory {
    pub const ALL: [FlashCategory; 6] = [
        FlashCategory::Success,
        FlashCategory::Info,
        FlashCategory::Warning,
        FlashCategory::Danger,
        FlashCategory::Primary,
        FlashCategory::Link,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            FlashCategory::Success => "is-success",
            FlashCategory::Info => "is-info",
            FlashCategory::Warning => "is-warning",
            FlashCategory::Danger => "is-danger",
            FlashCategory::Primary => "is-primary",
            FlashCategory::Link => "is-link",
        }
    }

    pub fn from_class_name(class_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.class_name() == class_name)
    }

    /// First category modifier found in a space separated class attribute
    pub fn from_class_list(class_list: &str) -> Option<Self> {
        class_list.split_whitespace().find_map(Self::from_class_name)
    }
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A server flash notification present on the page at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    /// Trimmed text content of the notification
    pub text: String,
    pub category: Option<FlashCategory>,
}

impl FlashMessage {
    pub fn new(raw_text: &str, category: Option<FlashCategory>) -> Self {
        Self {
            text: raw_text.trim().to_string(),
            category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// How several flash notifications end up in the single modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashPolicy {
    /// Each notification overwrites the previous one; only the last is shown
    #[default]
    LastWins,
    /// Non-empty notifications are joined line by line
    ShowAll,
}

/// Combine the flash messages found on the page into what the modal displays.
///
/// Returns `None` when there are no messages, in which case the modal is left alone.
pub fn compose(messages: &[FlashMessage], policy: FlashPolicy) -> Option<FlashMessage> {
    let last = messages.last()?;
    match policy {
        // Empty text still overwrites, same as a page with a blank notification
        FlashPolicy::LastWins => Some(last.clone()),
        FlashPolicy::ShowAll => {
            let text = messages
                .iter()
                .filter(|m| !m.is_empty())
                .map(|m| m.text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            Some(FlashMessage {
                text,
                category: last.category,
            })
        }
    }
}

/// Result of toggling a state class on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassToggle {
    Added,
    Removed,
}

impl ClassToggle {
    /// `present` is whether the class is on the element after the toggle
    pub fn from_present(present: bool) -> Self {
        if present {
            ClassToggle::Added
        } else {
            ClassToggle::Removed
        }
    }
}

impl fmt::Display for ClassToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassToggle::Added => write!(f, "added"),
            ClassToggle::Removed => write!(f, "removed"),
        }
    }
}

/// Console verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn allows(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= *self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page behavior config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("config field `{field}` must be a single token, got {value:?}")]
    InvalidToken { field: &'static str, value: String },
    #[error("at least one modal closer selector is required")]
    NoModalClosers,
}
