//! Contact form submission
//!
//! Two variants share this module and are told apart by element ids:
//! - [`local`]: validates in the browser and simulates the send
//! - [`remote`]: posts the form to a third-party endpoint
//!
//! The local form is looked up first. At most one variant is wired.
//! Each wired form owns a [`TaskSlot`], so a new submission supersedes the
//! one still in flight.

pub mod local;
pub mod remote;

use std::fmt;

use folio_core::{PortfolioConfig, StatusMessage};
use web_sys::{Document, HtmlElement, HtmlFormElement};

use crate::dom;
use crate::error::Result;
use crate::listener::ListenerHandle;
use crate::task::TaskSlot;

/// Which form variant is present on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Local,
    Remote,
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Text element that reports submission progress
#[derive(Debug, Clone)]
pub struct StatusLine {
    element: HtmlElement,
}

impl StatusLine {
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Replace the text and colour.
    pub fn show(&self, message: &StatusMessage) {
        tracing::debug!(tone = %message.tone, text = %message.text, "status updated");
        self.element.set_text_content(Some(&message.text));
        if let Err(err) = dom::set_style(&self.element, "color", message.tone.color()) {
            tracing::warn!(error = %err, "status colour not applied");
        }
    }

    /// Remove any previous message.
    pub fn clear(&self) {
        self.element.set_text_content(None);
    }
}

/// Submit listener and task slot of the wired form
#[derive(Debug)]
pub struct ContactHandle {
    variant: FormVariant,
    listener: ListenerHandle,
    task: TaskSlot,
}

impl ContactHandle {
    pub(crate) const fn new(variant: FormVariant, listener: ListenerHandle, task: TaskSlot) -> Self {
        Self {
            variant,
            listener,
            task,
        }
    }

    #[must_use]
    pub const fn variant(&self) -> FormVariant {
        self.variant
    }

    /// Abort any pending send and detach the submit listener.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Listener` if removal fails
    pub fn dispose(self) -> Result<()> {
        self.task.cancel();
        self.listener.remove()
    }

    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Detect which variant is present.
#[must_use]
pub fn detect_variant(document: &Document, config: &PortfolioConfig) -> Option<FormVariant> {
    let selectors = &config.selectors;
    if dom::by_id::<HtmlFormElement>(document, &selectors.local_form.form).is_some() {
        Some(FormVariant::Local)
    } else if dom::by_id::<HtmlFormElement>(document, &selectors.remote_form.form).is_some() {
        Some(FormVariant::Remote)
    } else {
        None
    }
}

/// Wire whichever contact form the page has.
///
/// Returns `Ok(None)` when neither form (or one of its required parts) is
/// present.
///
/// # Errors
///
/// Returns `UiError::Listener` if the submit listener cannot be attached
pub fn attach_contact(document: &Document, config: &PortfolioConfig) -> Result<Option<ContactHandle>> {
    match detect_variant(document, config) {
        Some(FormVariant::Local) => local::attach(document, config),
        Some(FormVariant::Remote) => remote::attach(document, config),
        None => {
            tracing::debug!("no contact form found");
            Ok(None)
        }
    }
}
