//! Page configuration.
//!
//! Every field has a default matching the portfolio's markup, so an empty
//! JSON object is a complete configuration. Pages that rename an element or
//! translate a message only override that one field.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reveal::RevealOptions;
use crate::status::{StatusMessage, StatusTone};
use crate::ValidationError;

/// Top-level configuration for the page interaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Element identifiers and selectors forming the DOM contract.
    #[serde(default)]
    pub selectors: Selectors,

    /// Badge tilt settings.
    #[serde(default)]
    pub tilt: TiltConfig,

    /// Navigation bar settings.
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Project list settings.
    #[serde(default)]
    pub projects: ProjectsConfig,

    /// Reveal-on-scroll settings.
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactConfig,

    /// User-visible localized strings.
    #[serde(default)]
    pub messages: Messages,

    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            tilt: TiltConfig::default(),
            navbar: NavbarConfig::default(),
            projects: ProjectsConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
            messages: Messages::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PortfolioConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and any error from
    /// [`PortfolioConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges and required text settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::OutOfRange` or `ConfigError::Empty` naming the
    /// first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tilt.damping.is_finite() || self.tilt.damping <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "tilt.damping",
                value: self.tilt.damping,
            });
        }
        if !self.navbar.threshold_ratio.is_finite() || self.navbar.threshold_ratio < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "navbar.threshold_ratio",
                value: self.navbar.threshold_ratio,
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal.threshold",
                value: self.reveal.threshold,
            });
        }
        if self.projects.url.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "projects.url",
            });
        }
        Ok(())
    }

    /// Set the project list URL.
    #[must_use]
    pub fn with_projects_url(mut self, url: impl Into<String>) -> Self {
        self.projects.url = url.into();
        self
    }

    /// Set the tilt damping divisor.
    #[must_use]
    pub const fn with_tilt_damping(mut self, damping: f64) -> Self {
        self.tilt.damping = damping;
        self
    }

    /// Set the simulated send delay of the local contact form.
    #[must_use]
    pub const fn with_send_delay_ms(mut self, delay_ms: u32) -> Self {
        self.contact.simulated_send_delay_ms = delay_ms;
        self
    }
}

/// Element identifiers (`*_id`, used with `getElementById`) and CSS
/// selectors (used with `querySelector`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub tilt_card_id: String,
    pub tilt_container: String,
    pub navbar: String,
    pub hero_section_id: String,
    pub in_page_anchor: String,
    pub projects_container_id: String,
    pub reveal: String,
    pub local_form: LocalFormIds,
    pub remote_form: RemoteFormIds,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            tilt_card_id: "tilt-card".to_string(),
            tilt_container: ".hero-container".to_string(),
            navbar: ".navbar".to_string(),
            hero_section_id: "landing".to_string(),
            in_page_anchor: "a[href^=\"#\"]".to_string(),
            projects_container_id: "projetos-container".to_string(),
            reveal: ".gsap-reveal".to_string(),
            local_form: LocalFormIds::default(),
            remote_form: RemoteFormIds::default(),
        }
    }
}

/// Identifiers of the locally validated contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalFormIds {
    pub form: String,
    pub status: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for LocalFormIds {
    fn default() -> Self {
        Self {
            form: "contact-form".to_string(),
            status: "form-status".to_string(),
            name: "form-name".to_string(),
            email: "form-email".to_string(),
            message: "form-message".to_string(),
        }
    }
}

/// Identifiers of the remotely submitted contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteFormIds {
    pub form: String,
    pub button: String,
    pub success: String,
    pub status: String,
}

impl Default for RemoteFormIds {
    fn default() -> Self {
        Self {
            form: "my-form".to_string(),
            button: "my-form-button".to_string(),
            success: "success-message".to_string(),
            status: "my-form-status".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Divisor applied to the pointer offset, in pixels per degree.
    pub damping: f64,
    /// CSS transition restored when the pointer leaves the container.
    pub reset_transition: String,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            damping: 25.0,
            reset_transition: "transform 0.5s ease".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Fraction of the hero section height after which the navbar shows.
    pub threshold_ratio: f64,
    /// Class toggled on the navbar.
    pub visible_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: 0.7,
            visible_class: "visible".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub url: String,
    pub card_class: String,
    pub link_label: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            url: "projetos.json".to_string(),
            card_class: "project-card".to_string(),
            link_label: "Ver Repositório".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of an element that triggers its reveal.
    pub threshold: f64,
    pub animation: RevealOptions,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            animation: RevealOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub simulated_send_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_send_delay_ms: 1000,
        }
    }
}

/// Localized strings shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub projects_unavailable: String,
    pub missing_fields: String,
    pub invalid_email: String,
    pub sending: String,
    pub sent: String,
    pub remote_failure: String,
    pub remote_unreachable: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            projects_unavailable: "Não foi possível carregar os projetos no momento.".to_string(),
            missing_fields: ValidationError::MissingFields.to_string(),
            invalid_email: ValidationError::InvalidEmail.to_string(),
            sending: "Enviando...".to_string(),
            sent: "Mensagem enviada com sucesso!".to_string(),
            remote_failure: "Ops! Houve um problema ao enviar o formulário.".to_string(),
            remote_unreachable: "Ops! Não foi possível conectar. Tente novamente mais tarde."
                .to_string(),
        }
    }
}

impl Messages {
    /// Status shown for a failed local validation.
    #[must_use]
    pub fn validation(&self, error: ValidationError) -> StatusMessage {
        let text = match error {
            ValidationError::MissingFields => &self.missing_fields,
            ValidationError::InvalidEmail => &self.invalid_email,
        };
        StatusMessage::new(text.clone(), StatusTone::Error)
    }

    #[must_use]
    pub fn sending_status(&self) -> StatusMessage {
        StatusMessage::new(self.sending.clone(), StatusTone::Pending)
    }

    #[must_use]
    pub fn sent_status(&self) -> StatusMessage {
        StatusMessage::new(self.sent.clone(), StatusTone::Success)
    }
}
