use shared::ConfigError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures while wiring or running page behaviors
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no document available")]
    NoDocument,
    #[error("selector {selector:?} rejected by the browser: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BehaviorError {
    pub(crate) fn dom(err: JsValue) -> Self {
        BehaviorError::Dom(describe(&err))
    }

    pub(crate) fn invalid_selector(selector: &str, err: JsValue) -> Self {
        BehaviorError::InvalidSelector {
            selector: selector.to_string(),
            reason: describe(&err),
        }
    }
}

impl From<BehaviorError> for JsValue {
    fn from(err: BehaviorError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// DOMExceptions inherit from Error, so their message is usually available
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
