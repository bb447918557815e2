//! Scroll-triggered navigation bar
//!
//! On every scroll event the navbar's visible class is recomputed from the
//! current hero height and scroll offset. No throttling.

use folio_core::PortfolioConfig;
use folio_core::navbar::navbar_visible;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;
use crate::error::{Result, UiError};
use crate::listener::{ListenerHandle, listen};

/// Scroll listener wired by [`attach_navbar`]
#[derive(Debug)]
pub struct NavbarHandle {
    listener: ListenerHandle,
}

impl NavbarHandle {
    /// Detach the scroll listener.
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

/// Add or remove `class` on `navbar` for the given layout values.
///
/// Returns the resulting visibility.
///
/// # Errors
///
/// Returns `UiError::Dom` if the class list cannot be updated
pub fn update_navbar(
    navbar: &Element,
    class: &str,
    scroll_y: f64,
    hero_height: f64,
    ratio: f64,
) -> Result<bool> {
    let visible = navbar_visible(scroll_y, hero_height, ratio);
    navbar
        .class_list()
        .toggle_with_force(class, visible)
        .map_err(|e| UiError::dom("classList.toggle", &e))
}

fn refresh(
    window: &Window,
    navbar: &Element,
    hero: &HtmlElement,
    class: &str,
    ratio: f64,
) -> Result<bool> {
    let scroll_y = window.scroll_y().map_err(|e| UiError::dom("scrollY", &e))?;
    update_navbar(navbar, class, scroll_y, f64::from(hero.offset_height()), ratio)
}

/// Wire the navbar visibility toggle.
///
/// Returns `Ok(None)` when the navbar or the hero section is missing.
///
/// # Errors
///
/// Returns `UiError::Listener` if the scroll listener cannot be attached
pub fn attach_navbar(
    window: &Window,
    document: &Document,
    config: &PortfolioConfig,
) -> Result<Option<NavbarHandle>> {
    let selectors = &config.selectors;
    let Some(navbar) = dom::query::<Element>(document, &selectors.navbar) else {
        tracing::debug!(selector = %selectors.navbar, "navbar not found; visibility toggle disabled");
        return Ok(None);
    };
    let Some(hero) = dom::by_id::<HtmlElement>(document, &selectors.hero_section_id) else {
        tracing::debug!(id = %selectors.hero_section_id, "hero section not found; visibility toggle disabled");
        return Ok(None);
    };

    let class = config.navbar.visible_class.clone();
    let ratio = config.navbar.threshold_ratio;
    let scroll_window = window.clone();

    let listener = listen(window, "scroll", move |_| {
        if let Err(err) = refresh(&scroll_window, &navbar, &hero, &class, ratio) {
            tracing::warn!(error = %err, "navbar update failed");
        }
    })?;

    tracing::debug!("navbar visibility attached");
    Ok(Some(NavbarHandle { listener }))
}
