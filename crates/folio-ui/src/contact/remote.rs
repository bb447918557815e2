//! Contact form posted to a third-party form endpoint.
//!
//! The form's own `action` and `method` decide where the multipart body
//! goes. The endpoint answers JSON; a rejection may list field errors,
//! which are shown verbatim. There are no retries: the submit button is
//! re-enabled so the visitor can try again.

use std::rc::Rc;

use folio_core::config::Messages;
use folio_core::remote::rejection_message;
use folio_core::{PortfolioConfig, StatusMessage};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use super::{ContactHandle, FormVariant, StatusLine};
use crate::dom;
use crate::error::{Result, UiError};
use crate::listener::listen;
use crate::task::TaskSlot;

/// How the endpoint answered a delivered request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Success status
    Accepted,
    /// Non-success status with the raw response body
    Rejected { status: u16, body: String },
}

fn request_for(method: &str, action: &str) -> RequestBuilder {
    match method.to_ascii_lowercase().as_str() {
        "put" => Request::put(action),
        "patch" => Request::patch(action),
        _ => Request::post(action),
    }
}

/// Build the submission request for a form's `method` and `action`.
///
/// `put` and `patch` are honoured in any case; every other method,
/// including an unset or `get` one, is sent as POST.
///
/// # Errors
///
/// Returns `UiError::Http` if the body cannot be attached
pub fn build_request(method: &str, action: &str, data: FormData) -> Result<Request> {
    Ok(request_for(method, action)
        .header("Accept", "application/json")
        .body(data)?)
}

/// Send `data` to `action` and classify the response.
///
/// # Errors
///
/// Returns `UiError::Http` when the request never completes
pub async fn send_form(method: &str, action: &str, data: FormData) -> Result<SubmitOutcome> {
    let response = build_request(method, action, data)?.send().await?;

    if response.ok() {
        return Ok(SubmitOutcome::Accepted);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(SubmitOutcome::Rejected { status, body })
}

/// The remote form and everything its submit handler touches
#[derive(Debug, Clone)]
pub struct RemoteForm {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    button_label: String,
    success: Option<HtmlElement>,
    status: StatusLine,
    messages: Messages,
}

impl RemoteForm {
    /// Capture the button's current label so it can be restored later.
    #[must_use]
    pub fn new(
        form: HtmlFormElement,
        button: HtmlButtonElement,
        success: Option<HtmlElement>,
        status: StatusLine,
        messages: Messages,
    ) -> Self {
        let button_label = button.text_content().unwrap_or_default();
        Self {
            form,
            button,
            button_label,
            success,
            status,
            messages,
        }
    }

    /// Put the form into its sending state.
    pub fn begin(&self) {
        self.status.clear();
        self.button.set_disabled(true);
        self.button.set_text_content(Some(&self.messages.sending));
    }

    fn restore_button(&self) {
        self.button.set_disabled(false);
        self.button.set_text_content(Some(&self.button_label));
    }

    /// Apply the result of a submission to the page.
    pub fn finish(&self, outcome: Result<SubmitOutcome>) {
        match outcome {
            Ok(SubmitOutcome::Accepted) => {
                tracing::info!("contact form accepted by endpoint");
                if let Err(err) = dom::set_style(&self.form, "display", "none") {
                    tracing::warn!(error = %err, "could not hide contact form");
                }
                if let Some(success) = &self.success {
                    if let Err(err) = dom::set_style(success, "display", "block") {
                        tracing::warn!(error = %err, "could not show success message");
                    }
                }
                self.form.reset();
                self.restore_button();
            }
            Ok(SubmitOutcome::Rejected { status, body }) => {
                tracing::warn!(status, "contact form rejected by endpoint");
                let text = rejection_message(&body, &self.messages.remote_failure);
                self.status.show(&StatusMessage::error(text));
                self.restore_button();
            }
            Err(err) => {
                tracing::error!(error = %err, "contact form submission failed");
                self.status
                    .show(&StatusMessage::error(self.messages.remote_unreachable.clone()));
                self.restore_button();
            }
        }
    }

    /// Handle one submission, superseding any request still in `slot`.
    pub fn submit(self: &Rc<Self>, slot: &TaskSlot) {
        self.begin();

        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                self.finish(Err(UiError::dom("FormData", &e)));
                return;
            }
        };
        let action = self.form.action();
        let method = self.form.method();
        let this = Rc::clone(self);

        slot.spawn(async move {
            tracing::debug!(%action, %method, "submitting contact form");
            let outcome = send_form(&method, &action, data).await;
            this.finish(outcome);
        });
    }
}

/// Wire the remote form's submit handler.
///
/// Returns `Ok(None)` if the form, its button, or its status element is
/// missing. The success element is optional.
///
/// # Errors
///
/// Returns `UiError::Listener` if the submit listener cannot be attached
pub fn attach(document: &Document, config: &PortfolioConfig) -> Result<Option<ContactHandle>> {
    let ids = &config.selectors.remote_form;
    let Some(form) = dom::by_id::<HtmlFormElement>(document, &ids.form) else {
        return Ok(None);
    };
    let Some(button) = dom::by_id::<HtmlButtonElement>(document, &ids.button) else {
        tracing::warn!(id = %ids.button, "remote form button missing; form left unwired");
        return Ok(None);
    };
    let Some(status) = dom::by_id::<HtmlElement>(document, &ids.status) else {
        tracing::warn!(id = %ids.status, "remote form status element missing; form left unwired");
        return Ok(None);
    };
    let success = dom::by_id::<HtmlElement>(document, &ids.success);

    let remote = Rc::new(RemoteForm::new(
        form.clone(),
        button,
        success,
        StatusLine::new(status),
        config.messages.clone(),
    ));
    let task = TaskSlot::new();
    let submit_task = task.clone();

    let listener = listen(&form, "submit", move |event| {
        event.prevent_default();
        remote.submit(&submit_task);
    })?;

    tracing::debug!("remote contact form attached");
    Ok(Some(ContactHandle::new(FormVariant::Remote, listener, task)))
}
