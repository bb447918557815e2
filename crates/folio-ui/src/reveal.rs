//! Reveal-on-scroll animation
//!
//! Every element matching the reveal selector is tagged with a numeric
//! `data-reveal-id` and observed. The first time at least `threshold` of it
//! is visible, the animator plays the entrance and the element is
//! unobserved. The [`RevealGate`] makes the once-only rule hold even if the
//! browser delivers a stale entry after `unobserve`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::reveal::{REVEAL_ID_ATTRIBUTE, parse_reveal_id};
use folio_core::{PortfolioConfig, RevealGate, RevealOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::animation::Animator;
use crate::dom;
use crate::error::{Result, UiError};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Plays each tagged element's reveal at most once
pub struct Revealer {
    gate: RefCell<RevealGate>,
    animator: Rc<dyn Animator>,
    options: RevealOptions,
}

impl Revealer {
    #[must_use]
    pub fn new(animator: Rc<dyn Animator>, options: RevealOptions) -> Self {
        Self {
            gate: RefCell::new(RevealGate::new()),
            animator,
            options,
        }
    }

    /// Animate `element` unless it was already revealed.
    ///
    /// Returns `true` when the animation was requested. Untagged elements
    /// are never animated.
    pub fn reveal_once(&self, element: &Element) -> bool {
        let Some(id) = element
            .get_attribute(REVEAL_ID_ATTRIBUTE)
            .as_deref()
            .and_then(parse_reveal_id)
        else {
            return false;
        };
        if !self.gate.borrow_mut().admit(id) {
            return false;
        }
        if let Err(err) = self.animator.reveal(element, &self.options) {
            tracing::warn!(error = %err, id, "reveal animation failed");
        }
        true
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.gate.borrow().revealed_count()
    }
}

/// Tag `elements` with sequential reveal ids.
///
/// # Errors
///
/// Returns `UiError::Dom` if an attribute cannot be set
pub fn tag_elements(elements: &[Element]) -> Result<()> {
    elements
        .iter()
        .zip(0_u32..)
        .try_for_each(|(element, id)| dom::set_attribute(element, REVEAL_ID_ATTRIBUTE, &id.to_string()))
}

/// Observer wired by [`attach_reveal`]
pub struct RevealHandle {
    observer: IntersectionObserver,
    callback: ObserverCallback,
    revealer: Rc<Revealer>,
}

impl std::fmt::Debug for RevealHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealHandle")
            .field("revealed", &self.revealer.revealed_count())
            .finish_non_exhaustive()
    }
}

impl RevealHandle {
    /// Number of elements revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealer.revealed_count()
    }

    /// Stop observing all elements.
    pub fn dispose(self) {
        self.observer.disconnect();
        tracing::debug!(revealed = self.revealed_count(), "reveal observer disconnected");
    }

    pub fn forget(self) {
        self.callback.forget();
    }
}

/// Wire reveal-on-scroll for every matching element.
///
/// Returns `Ok(None)` when nothing matches the reveal selector.
///
/// # Errors
///
/// - `UiError::Dom` if the elements cannot be tagged
/// - `UiError::Observer` if the `IntersectionObserver` cannot be created
pub fn attach_reveal(
    document: &Document,
    config: &PortfolioConfig,
    animator: Rc<dyn Animator>,
) -> Result<Option<RevealHandle>> {
    let elements = dom::query_all(document, &config.selectors.reveal);
    if elements.is_empty() {
        tracing::debug!(selector = %config.selectors.reveal, "no reveal elements found");
        return Ok(None);
    }
    tag_elements(&elements)?;

    let revealer = Rc::new(Revealer::new(animator, config.reveal.animation.clone()));
    let callback_revealer = Rc::clone(&revealer);

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                callback_revealer.reveal_once(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| UiError::Observer(format!("{e:?}")))?;

    for element in &elements {
        observer.observe(element);
    }

    tracing::debug!(count = elements.len(), "reveal observer attached");
    Ok(Some(RevealHandle {
        observer,
        callback,
        revealer,
    }))
}
