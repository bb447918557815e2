//! Locally validated contact form with a simulated send.
//!
//! Nothing leaves the browser: a valid submission shows the sending status,
//! waits the configured delay, then reports success and resets the form.

use folio_core::config::{LocalFormIds, Messages};
use folio_core::{ContactSubmission, PortfolioConfig, ValidationError};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{ContactHandle, FormVariant, StatusLine};
use crate::dom;
use crate::error::Result;
use crate::listener::listen;
use crate::task::TaskSlot;

/// Current value of an `<input>` or `<textarea>`; empty if absent.
#[must_use]
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

/// The local form and everything its submit handler touches
#[derive(Debug, Clone)]
pub struct LocalForm {
    document: Document,
    form: HtmlFormElement,
    status: StatusLine,
    ids: LocalFormIds,
    messages: Messages,
    send_delay_ms: u32,
}

impl LocalForm {
    #[must_use]
    pub fn new(
        document: Document,
        form: HtmlFormElement,
        status: StatusLine,
        config: &PortfolioConfig,
    ) -> Self {
        Self {
            document,
            form,
            status,
            ids: config.selectors.local_form.clone(),
            messages: config.messages.clone(),
            send_delay_ms: config.contact.simulated_send_delay_ms,
        }
    }

    /// Read and trim the three fields.
    #[must_use]
    pub fn read(&self) -> ContactSubmission {
        ContactSubmission::from_raw(
            &field_value(&self.document, &self.ids.name),
            &field_value(&self.document, &self.ids.email),
            &field_value(&self.document, &self.ids.message),
        )
    }

    /// Handle one submission.
    ///
    /// Any earlier pending send is cancelled. On success the simulated send
    /// is scheduled in `slot`.
    ///
    /// # Errors
    ///
    /// Returns the validation failure that was shown to the visitor
    pub fn submit(&self, slot: &TaskSlot) -> std::result::Result<ContactSubmission, ValidationError> {
        slot.cancel();

        let submission = self.read();
        if let Err(err) = submission.validate() {
            tracing::debug!(reason = ?err, "contact form rejected");
            self.status.show(&self.messages.validation(err));
            return Err(err);
        }

        self.status.show(&self.messages.sending_status());

        let form = self.form.clone();
        let status = self.status.clone();
        let sent = self.messages.sent_status();
        let delay_ms = self.send_delay_ms;
        slot.spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            status.show(&sent);
            form.reset();
            tracing::info!("contact message sent (simulated)");
        });

        Ok(submission)
    }
}

/// Wire the local form's submit handler.
///
/// Returns `Ok(None)` if the form or its status element is missing.
///
/// # Errors
///
/// Returns `UiError::Listener` if the submit listener cannot be attached
pub fn attach(document: &Document, config: &PortfolioConfig) -> Result<Option<ContactHandle>> {
    let ids = &config.selectors.local_form;
    let Some(form) = dom::by_id::<HtmlFormElement>(document, &ids.form) else {
        return Ok(None);
    };
    let Some(status) = dom::by_id::<HtmlElement>(document, &ids.status) else {
        tracing::warn!(id = %ids.status, "contact status element missing; form left unwired");
        return Ok(None);
    };

    let local = LocalForm::new(document.clone(), form.clone(), StatusLine::new(status), config);
    let task = TaskSlot::new();
    let submit_task = task.clone();

    let listener = listen(&form, "submit", move |event| {
        event.prevent_default();
        // Validation failures are already on screen.
        let _ = local.submit(&submit_task);
    })?;

    tracing::debug!("local contact form attached");
    Ok(Some(ContactHandle::new(FormVariant::Local, listener, task)))
}
