use shared::LogLevel;
use std::cell::Cell;

thread_local! {
    static LEVEL: Cell<LogLevel> = Cell::new(LogLevel::default());
}

/// Console logger tagged with the component that emitted the message
pub struct Logger;

impl Logger {
    pub fn set_level(level: LogLevel) {
        LEVEL.with(|l| l.set(level));
    }

    pub fn level() -> LogLevel {
        LEVEL.with(|l| l.get())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, Some(component));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, Some(component));
    }

    fn log(level: LogLevel, message: &str, component: Option<&str>) {
        if !Self::level().allows(level) {
            return;
        }

        let line = match component {
            Some(component) => format!("[page-behaviors:{}] {}", component, message),
            None => format!("[page-behaviors] {}", message),
        };

        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
            LogLevel::Off => {}
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_level_round_trip() {
        let previous = Logger::level();
        Logger::set_level(LogLevel::Warn);
        assert_eq!(Logger::level(), LogLevel::Warn);

        // Filtered messages are dropped without touching the console
        Logger::debug_with_component("logging-test", "not shown");
        Logger::warn_with_component("logging-test", "shown");

        Logger::set_level(previous);
    }
}
