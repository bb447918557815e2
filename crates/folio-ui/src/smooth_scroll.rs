//! Smooth in-page navigation
//!
//! A single delegated click listener on the document catches activation of
//! any in-page anchor, including anchors inserted after initialization.

use folio_core::PortfolioConfig;
use folio_core::anchor::fragment_target;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::{Result, UiError};
use crate::listener::{ListenerHandle, listen};

/// Click listener wired by [`attach_smooth_scroll`]
#[derive(Debug)]
pub struct SmoothScrollHandle {
    listener: ListenerHandle,
}

impl SmoothScrollHandle {
    /// Detach the click listener.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Listener` if removal fails
    pub fn dispose(self) -> Result<()> {
        self.listener.remove()
    }

    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_id(document: &Document, id: &str) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        tracing::debug!(id, "in-page link target not found");
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Anchor matching `selector` that the click landed on or inside.
fn clicked_anchor(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
}

fn handle_click(document: &Document, event: &Event, selector: &str) {
    let Some(anchor) = clicked_anchor(event, selector) else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    event.prevent_default();
    if let Some(id) = fragment_target(&href) {
        scroll_to_id(document, id);
    }
}

/// Wire smooth scrolling for in-page anchors.
///
/// # Errors
///
/// - `UiError::Dom` if the anchor selector is not a valid CSS selector
/// - `UiError::Listener` if the click listener cannot be attached
pub fn attach_smooth_scroll(
    document: &Document,
    config: &PortfolioConfig,
) -> Result<SmoothScrollHandle> {
    let selector = config.selectors.in_page_anchor.clone();
    document
        .query_selector(&selector)
        .map_err(|e| UiError::dom("querySelector", &e))?;

    let click_document = document.clone();
    let listener = listen(document, "click", move |event| {
        handle_click(&click_document, &event, &selector);
    })?;

    tracing::debug!("smooth scroll attached");
    Ok(SmoothScrollHandle { listener })
}
