//! Panic-free DOM lookups and mutations over web-sys.
//!
//! Lookups return `Option`: a missing element is a normal condition that
//! makes the owning subsystem inert. Mutations return `Result`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, UiError};

/// Get the browser window.
///
/// # Errors
///
/// Returns `UiError::WindowUnavailable` outside a browser context.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowUnavailable)
}

/// Get the window's document.
///
/// # Errors
///
/// Returns `UiError::DocumentUnavailable` if the window has no document.
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(UiError::DocumentUnavailable)
}

/// Element with the given id, cast to `T`.
#[must_use]
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// First element matching `selector`, cast to `T`.
///
/// An invalid selector is treated as no match.
#[must_use]
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property.
///
/// # Errors
///
/// Returns `UiError::Dom` if the browser rejects the property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| UiError::dom("style.setProperty", &e))
}

/// Viewport size in CSS pixels.
///
/// # Errors
///
/// Returns `UiError::Dom` if the window dimensions are unavailable.
pub fn viewport_size(window: &Window) -> Result<(f64, f64)> {
    let width = window
        .inner_width()
        .map_err(|e| UiError::dom("innerWidth", &e))?
        .as_f64()
        .ok_or_else(|| UiError::Dom {
            operation: "innerWidth",
            reason: "not a number".to_string(),
        })?;
    let height = window
        .inner_height()
        .map_err(|e| UiError::dom("innerHeight", &e))?
        .as_f64()
        .ok_or_else(|| UiError::Dom {
            operation: "innerHeight",
            reason: "not a number".to_string(),
        })?;
    Ok((width, height))
}

/// Create an element of `tag`.
///
/// # Errors
///
/// Returns `UiError::Dom` if creation fails.
pub fn create(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element(tag)
        .map_err(|e| UiError::dom("createElement", &e))
}

/// Append `child` to `parent`.
///
/// # Errors
///
/// Returns `UiError::Dom` if the append fails.
pub fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| UiError::dom("appendChild", &e))
}

/// Set an attribute.
///
/// # Errors
///
/// Returns `UiError::Dom` if the attribute name is invalid.
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| UiError::dom("setAttribute", &e))
}
