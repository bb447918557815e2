//! Reveal animation capability
//!
//! The reveal subsystem only knows the [`Animator`] trait. The page uses
//! [`GsapAnimator`], which calls the global `gsap.from(target, options)`;
//! tests and pages without gsap use [`NoopAnimator`].

use std::rc::Rc;

use folio_core::RevealOptions;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::error::{Result, UiError};

/// Something that can play the entrance animation on an element
pub trait Animator {
    /// Animate `target` from `options` to its natural state.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Animation` if the animation could not be started.
    fn reveal(&self, target: &Element, options: &RevealOptions) -> Result<()>;
}

/// Adapter over the global `gsap` object
#[derive(Debug, Clone, Copy, Default)]
pub struct GsapAnimator;

/// Animator that leaves elements untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnimator;

impl Animator for NoopAnimator {
    fn reveal(&self, _target: &Element, _options: &RevealOptions) -> Result<()> {
        Ok(())
    }
}

/// Check if gsap is loaded on the page
#[must_use]
pub fn is_gsap_available() -> bool {
    web_sys::window().is_some_and(|w| {
        js_sys::Reflect::get(&w, &JsValue::from_str("gsap"))
            .is_ok_and(|v| !v.is_undefined() && !v.is_null())
    })
}

impl Animator for GsapAnimator {
    fn reveal(&self, target: &Element, options: &RevealOptions) -> Result<()> {
        let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;

        let gsap = js_sys::Reflect::get(&window, &JsValue::from_str("gsap"))
            .map_err(|e| UiError::Animation(format!("{e:?}")))?;
        if gsap.is_undefined() || gsap.is_null() {
            return Err(UiError::Animation("gsap is not loaded".to_string()));
        }

        let from = js_sys::Reflect::get(&gsap, &JsValue::from_str("from"))
            .map_err(|e| UiError::Animation(format!("{e:?}")))?;
        let from = from
            .dyn_ref::<js_sys::Function>()
            .ok_or_else(|| UiError::Animation("gsap.from is not a function".to_string()))?;

        let vars = serde_wasm_bindgen::to_value(options)
            .map_err(|e| UiError::Animation(e.to_string()))?;

        from.call2(&gsap, target, &vars)
            .map(|_| ())
            .map_err(|e| UiError::Animation(format!("{e:?}")))
    }
}

/// gsap when the page loaded it, otherwise a no-op.
#[must_use]
pub fn default_animator() -> Rc<dyn Animator> {
    if is_gsap_available() {
        Rc::new(GsapAnimator)
    } else {
        tracing::warn!("gsap not found; reveal animations disabled");
        Rc::new(NoopAnimator)
    }
}
