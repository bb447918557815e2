//! Page interaction controller
//!
//! [`init`] wires every subsystem onto a parsed document and returns their
//! handles. Subsystems are independent: one failing to set up is logged
//! and the rest are still wired. [`boot`] is the entry used by the binary;
//! it waits for `DOMContentLoaded` when needed and keeps the handles for
//! the life of the page.

use std::rc::Rc;

use folio_core::PortfolioConfig;
use web_sys::{Document, Window};

use crate::animation::{Animator, default_animator};
use crate::config::read_config;
use crate::contact::{ContactHandle, FormVariant, attach_contact};
use crate::dom;
use crate::error::Result;
use crate::listener::listen;
use crate::logging::init_logging;
use crate::navbar::{NavbarHandle, attach_navbar};
use crate::projects::{ProjectsHandle, attach_projects};
use crate::reveal::{RevealHandle, attach_reveal};
use crate::smooth_scroll::{SmoothScrollHandle, attach_smooth_scroll};
use crate::tilt::{TiltHandle, attach_tilt};

/// Handles of every wired subsystem; `None` means inert
#[derive(Debug, Default)]
pub struct PageHandles {
    pub tilt: Option<TiltHandle>,
    pub navbar: Option<NavbarHandle>,
    pub smooth_scroll: Option<SmoothScrollHandle>,
    pub projects: Option<ProjectsHandle>,
    pub reveal: Option<RevealHandle>,
    pub contact: Option<ContactHandle>,
}

impl PageHandles {
    /// Names of the subsystems that were wired.
    #[must_use]
    pub fn active_subsystems(&self) -> Vec<&'static str> {
        [
            ("tilt", self.tilt.is_some()),
            ("navbar", self.navbar.is_some()),
            ("smooth_scroll", self.smooth_scroll.is_some()),
            ("projects", self.projects.is_some()),
            ("reveal", self.reveal.is_some()),
            ("contact", self.contact.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, active)| active.then_some(name))
        .collect()
    }

    #[must_use]
    pub fn contact_variant(&self) -> Option<FormVariant> {
        self.contact.as_ref().map(ContactHandle::variant)
    }

    /// Tear down every subsystem.
    ///
    /// All subsystems are torn down even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first listener removal failure
    pub fn dispose(self) -> Result<()> {
        let mut outcome = Ok(());
        if let Some(projects) = self.projects {
            projects.dispose();
        }
        if let Some(reveal) = self.reveal {
            reveal.dispose();
        }
        if let Some(tilt) = self.tilt {
            outcome = outcome.and(tilt.dispose());
        }
        if let Some(navbar) = self.navbar {
            outcome = outcome.and(navbar.dispose());
        }
        if let Some(smooth_scroll) = self.smooth_scroll {
            outcome = outcome.and(smooth_scroll.dispose());
        }
        if let Some(contact) = self.contact {
            outcome = outcome.and(contact.dispose());
        }
        outcome
    }

    /// Keep everything wired for the lifetime of the page.
    pub fn forget(self) {
        if let Some(tilt) = self.tilt {
            tilt.forget();
        }
        if let Some(navbar) = self.navbar {
            navbar.forget();
        }
        if let Some(smooth_scroll) = self.smooth_scroll {
            smooth_scroll.forget();
        }
        if let Some(reveal) = self.reveal {
            reveal.forget();
        }
        if let Some(contact) = self.contact {
            contact.forget();
        }
    }
}

fn settle<T>(subsystem: &'static str, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|err| {
        tracing::error!(subsystem, error = %err, "subsystem setup failed");
        None
    })
}

/// Wire every subsystem onto `document`.
pub fn init(
    window: &Window,
    document: &Document,
    config: &PortfolioConfig,
    animator: Rc<dyn Animator>,
) -> PageHandles {
    PageHandles {
        tilt: settle("tilt", attach_tilt(document, config)),
        navbar: settle("navbar", attach_navbar(window, document, config)),
        smooth_scroll: settle(
            "smooth_scroll",
            attach_smooth_scroll(document, config).map(Some),
        ),
        projects: attach_projects(document, config),
        reveal: settle("reveal", attach_reveal(document, config, animator)),
        contact: settle("contact", attach_contact(document, config)),
    }
}

fn start(window: &Window, document: &Document) {
    let loaded = read_config(document);
    let config = loaded.clone().unwrap_or_default();
    init_logging(&config.log_level);
    if let Err(err) = loaded {
        tracing::warn!(error = %err, "ignoring embedded config; using defaults");
    }

    let handles = init(window, document, &config, default_animator());
    tracing::info!(subsystems = ?handles.active_subsystems(), "page interactions ready");
    handles.forget();
}

/// Start the controller once the document is parsed.
///
/// # Errors
///
/// Returns an error if there is no window or document, or if the
/// `DOMContentLoaded` listener cannot be attached
pub fn boot() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        listen(&document, "DOMContentLoaded", move |_| {
            start(&ready_window, &ready_document);
        })?
        .forget();
    } else {
        start(&window, &document);
    }
    Ok(())
}
