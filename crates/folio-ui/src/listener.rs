//! Event listener registration with explicit removal
//!
//! A [`ListenerHandle`] owns the JS closure backing a listener. Calling
//! [`ListenerHandle::remove`] detaches it; [`ListenerHandle::forget`] leaks
//! it for the lifetime of the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{Result, UiError};

/// A registered event listener
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

impl ListenerHandle {
    /// Detach the listener from its target
    ///
    /// # Errors
    ///
    /// Returns `UiError::Listener` if the browser rejects the removal
    pub fn remove(self) -> Result<()> {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::listener(self.event, &e))
    }

    /// Keep the listener attached for the lifetime of the page
    pub fn forget(self) {
        self.closure.forget();
    }
}

/// Attach `handler` to `target` for `event`.
///
/// # Errors
///
/// Returns `UiError::Listener` if `addEventListener` fails
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<ListenerHandle>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| UiError::listener(event, &e))?;

    Ok(ListenerHandle {
        target: target.clone(),
        event,
        closure,
    })
}

/// Boxed handler as accepted by [`listen_all`]
pub type BoxedHandler = Box<dyn FnMut(Event)>;

/// Attach several listeners as a unit.
///
/// If any registration fails, the ones already attached are removed again
/// so the subsystem is left fully unwired.
///
/// # Errors
///
/// Returns the `UiError::Listener` of the failed registration
pub fn listen_all(
    specs: Vec<(EventTarget, &'static str, BoxedHandler)>,
) -> Result<Vec<ListenerHandle>> {
    let mut handles = Vec::with_capacity(specs.len());
    for (target, event, handler) in specs {
        match listen(&target, event, handler) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                if let Err(cleanup) = remove_all(handles) {
                    tracing::warn!(error = %cleanup, "rollback of partial listeners failed");
                }
                return Err(err);
            }
        }
    }
    Ok(handles)
}

/// Remove every handle, returning the first failure after trying all.
///
/// # Errors
///
/// Returns the first `UiError::Listener` encountered
pub fn remove_all(handles: Vec<ListenerHandle>) -> Result<()> {
    handles
        .into_iter()
        .map(ListenerHandle::remove)
        .fold(Ok(()), |first, next| first.and(next))
}
