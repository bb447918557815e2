//! Project list loader
//!
//! Fetches `projetos.json` once and replaces the container's placeholder
//! with one card per record. The whole list is decoded and every card is
//! built before the container is touched, so a failure never leaves a
//! partial list behind.

use folio_core::project::decode_projects;
use folio_core::{PortfolioConfig, ProjectRecord, StatusTone};
use gloo_net::http::Request;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::{Result, UiError};
use crate::task::TaskSlot;

/// Class added to the error paragraph shown when loading fails.
pub const ERROR_CLASS: &str = "projects-error";

/// Rendering settings for the project container
#[derive(Debug, Clone)]
pub struct ProjectsView {
    document: Document,
    container: Element,
    card_class: String,
    link_label: String,
    unavailable_message: String,
}

impl ProjectsView {
    /// View over `container` using the card and message settings in `config`.
    #[must_use]
    pub fn new(document: Document, container: Element, config: &PortfolioConfig) -> Self {
        Self {
            document,
            container,
            card_class: config.projects.card_class.clone(),
            link_label: config.projects.link_label.clone(),
            unavailable_message: config.messages.projects_unavailable.clone(),
        }
    }

    fn card(&self, project: &ProjectRecord) -> Result<Element> {
        let card = dom::create(&self.document, "div")?;
        card.set_class_name(&self.card_class);

        let title = dom::create(&self.document, "h4")?;
        title.set_text_content(Some(&project.title));
        dom::append(&card, &title)?;

        let description = dom::create(&self.document, "p")?;
        description.set_text_content(Some(&project.description));
        dom::append(&card, &description)?;

        let link = dom::create(&self.document, "a")?;
        dom::set_attribute(&link, "href", &project.link)?;
        dom::set_attribute(&link, "target", "_blank")?;
        dom::set_attribute(&link, "rel", "noopener noreferrer")?;
        link.set_text_content(Some(&format!("{} ", self.link_label)));

        let icon = dom::create(&self.document, "i")?;
        icon.set_class_name("fas fa-arrow-right");
        dom::append(&link, &icon)?;
        dom::append(&card, &link)?;

        Ok(card)
    }

    /// Replace the container content with one card per project, in order.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Dom` if an element cannot be created or appended
    pub fn render_cards(&self, projects: &[ProjectRecord]) -> Result<()> {
        let cards = projects
            .iter()
            .map(|project| self.card(project))
            .collect::<Result<Vec<_>>>()?;

        self.container.set_inner_html("");
        cards
            .iter()
            .try_for_each(|card| dom::append(&self.container, card))
    }

    /// Replace the container content with the single error paragraph.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Dom` if the paragraph cannot be created or appended
    pub fn render_error(&self) -> Result<()> {
        let paragraph = dom::create(&self.document, "p")?;
        paragraph.set_class_name(ERROR_CLASS);
        paragraph.set_text_content(Some(&self.unavailable_message));
        dom::set_attribute(
            &paragraph,
            "style",
            &format!("color: {};", StatusTone::Error.color()),
        )?;

        self.container.set_inner_html("");
        dom::append(&self.container, &paragraph)
    }

    /// Render the outcome of a load attempt.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Dom` if rendering itself fails
    pub fn show(&self, outcome: Result<Vec<ProjectRecord>>) -> Result<()> {
        match outcome {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "projects loaded");
                self.render_cards(&projects)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load projects");
                self.render_error()
            }
        }
    }
}

/// GET `url` and decode it as a project list.
///
/// # Errors
///
/// - `UiError::Http` on transport failure
/// - `UiError::HttpStatus` on a non-success status
/// - `UiError::Decode` if the body is not a project array
pub async fn fetch_projects(url: &str) -> Result<Vec<ProjectRecord>> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(UiError::HttpStatus {
            status: response.status(),
        });
    }
    let body = response.text().await?;
    Ok(decode_projects(&body)?)
}

/// In-flight load started by [`attach_projects`]
#[derive(Debug)]
pub struct ProjectsHandle {
    task: TaskSlot,
}

impl ProjectsHandle {
    /// Abort the load if it has not finished yet.
    pub fn dispose(self) {
        self.task.cancel();
    }
}

/// Start loading projects into the configured container.
///
/// Returns `None` when the container is missing.
#[must_use]
pub fn attach_projects(document: &Document, config: &PortfolioConfig) -> Option<ProjectsHandle> {
    let container_id = &config.selectors.projects_container_id;
    let Some(container) = dom::by_id::<Element>(document, container_id) else {
        tracing::debug!(id = %container_id, "projects container not found; loader disabled");
        return None;
    };

    let view = ProjectsView::new(document.clone(), container, config);
    let url = config.projects.url.clone();
    let task = TaskSlot::new();

    task.spawn(async move {
        tracing::debug!(%url, "fetching projects");
        let outcome = fetch_projects(&url).await;
        if let Err(err) = view.show(outcome) {
            tracing::error!(error = %err, "failed to render projects");
        }
    });

    Some(ProjectsHandle { task })
}
