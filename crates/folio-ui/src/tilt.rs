//! Badge tilt effect
//!
//! Pointer movement over the hero container rotates the badge toward the
//! cursor. Entering the container drops the CSS transition so the badge
//! tracks the pointer immediately; leaving restores an eased transition and
//! returns the badge to flat.

use folio_core::PortfolioConfig;
use folio_core::tilt::{TiltAngles, compute_tilt};
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent};

use crate::dom;
use crate::error::Result;
use crate::listener::{BoxedHandler, ListenerHandle, listen_all, remove_all};

/// Listeners wired by [`attach_tilt`]
#[derive(Debug)]
pub struct TiltHandle {
    listeners: Vec<ListenerHandle>,
}

impl TiltHandle {
    /// Detach all three listeners.
    ///
    /// # Errors
    ///
    /// Returns the first listener removal failure
    pub fn dispose(self) -> Result<()> {
        remove_all(self.listeners)
    }

    pub fn forget(self) {
        self.listeners.into_iter().for_each(ListenerHandle::forget);
    }
}

/// Write `angles` to the card's `transform`.
///
/// # Errors
///
/// Returns `UiError::Dom` if the style cannot be set
pub fn apply_tilt(card: &HtmlElement, angles: TiltAngles) -> Result<()> {
    dom::set_style(card, "transform", &angles.to_transform())
}

/// Put the card back to flat with an eased `transition`.
///
/// # Errors
///
/// Returns `UiError::Dom` if the style cannot be set
pub fn reset_tilt(card: &HtmlElement, transition: &str) -> Result<()> {
    dom::set_style(card, "transition", transition)?;
    apply_tilt(card, TiltAngles::ZERO)
}

fn follow_pointer(card: &HtmlElement, event: &MouseEvent, damping: f64) -> Result<()> {
    let window = dom::window()?;
    let (width, height) = dom::viewport_size(&window)?;
    let angles = compute_tilt(
        width,
        height,
        f64::from(event.page_x()),
        f64::from(event.page_y()),
        damping,
    );
    apply_tilt(card, angles)
}

/// Wire the tilt effect.
///
/// Returns `Ok(None)` when the card or its container is missing.
///
/// # Errors
///
/// Returns `UiError::Listener` if a listener cannot be attached
pub fn attach_tilt(document: &Document, config: &PortfolioConfig) -> Result<Option<TiltHandle>> {
    let selectors = &config.selectors;
    let Some(card) = dom::by_id::<HtmlElement>(document, &selectors.tilt_card_id) else {
        tracing::debug!(id = %selectors.tilt_card_id, "tilt card not found; tilt disabled");
        return Ok(None);
    };
    let Some(container) = dom::query::<EventTarget>(document, &selectors.tilt_container) else {
        tracing::debug!(selector = %selectors.tilt_container, "tilt container not found; tilt disabled");
        return Ok(None);
    };

    let damping = config.tilt.damping;
    let reset_transition = config.tilt.reset_transition.clone();

    let move_card = card.clone();
    let on_move: BoxedHandler = Box::new(move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Err(err) = follow_pointer(&move_card, event, damping) {
            tracing::warn!(error = %err, "tilt update failed");
        }
    });

    let enter_card = card.clone();
    let on_enter: BoxedHandler = Box::new(move |_| {
        if let Err(err) = dom::set_style(&enter_card, "transition", "none") {
            tracing::warn!(error = %err, "tilt transition reset failed");
        }
    });

    let on_leave: BoxedHandler = Box::new(move |_| {
        if let Err(err) = reset_tilt(&card, &reset_transition) {
            tracing::warn!(error = %err, "tilt reset failed");
        }
    });

    let listeners = listen_all(vec![
        (container.clone(), "mousemove", on_move),
        (container.clone(), "mouseenter", on_enter),
        (container, "mouseleave", on_leave),
    ])?;

    tracing::debug!("tilt effect attached");
    Ok(Some(TiltHandle { listeners }))
}
