//! Error types for the page interaction controller
//!
//! Browser calls return `JsValue` errors; they are captured as their debug
//! text so `UiError` stays `Clone` and comparable in tests.

use folio_core::ConfigError;
use wasm_bindgen::JsValue;

/// Errors raised while wiring or running a page subsystem
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiError {
    /// Not running in a browser window
    #[error("window is not available")]
    WindowUnavailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentUnavailable,

    /// A DOM call failed
    #[error("DOM operation '{operation}' failed: {reason}")]
    Dom {
        operation: &'static str,
        reason: String,
    },

    /// Adding or removing an event listener failed
    #[error("listener for '{event}' failed: {reason}")]
    Listener { event: &'static str, reason: String },

    /// `IntersectionObserver` could not be created
    #[error("intersection observer failed: {0}")]
    Observer(String),

    /// The animation capability rejected a request
    #[error("animation failed: {0}")]
    Animation(String),

    /// Request could not be built or the transport failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Response body could not be decoded
    #[error("decode failed: {0}")]
    Decode(String),

    /// Page configuration was rejected
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl UiError {
    /// DOM error from a failed web-sys call.
    #[must_use]
    pub fn dom(operation: &'static str, err: &JsValue) -> Self {
        Self::Dom {
            operation,
            reason: format!("{err:?}"),
        }
    }

    /// Listener error from a failed `addEventListener`/`removeEventListener`.
    #[must_use]
    pub fn listener(event: &'static str, err: &JsValue) -> Self {
        Self::Listener {
            event,
            reason: format!("{err:?}"),
        }
    }
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Http(other.to_string()),
        }
    }
}

impl From<folio_core::ProjectDecodeError> for UiError {
    fn from(err: folio_core::ProjectDecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
