//! Error types for the portfolio core.

use thiserror::Error;

/// Configuration rejected by [`crate::PortfolioConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid config document: {reason}")]
    Parse { reason: String },

    /// A numeric setting is out of its allowed range.
    #[error("config field '{field}' out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// A required text setting is empty.
    #[error("config field '{field}' must not be empty")]
    Empty { field: &'static str },
}

impl ConfigError {
    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

/// Failure to decode the project list.
#[derive(Debug, Error)]
pub enum ProjectDecodeError {
    /// The body is not valid JSON or not an array of records.
    #[error("invalid project list: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry of the array is `null`.
    #[error("project entry {index} is null")]
    NullEntry { index: usize },
}

/// Local contact form validation failure.
///
/// `Display` yields the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one required field is empty after trimming.
    #[error("Preencha todos os campos!")]
    MissingFields,

    /// The email address is not `local@domain.tld`-shaped.
    #[error("E-mail inválido!")]
    InvalidEmail,
}
