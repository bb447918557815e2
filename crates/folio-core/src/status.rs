//! Status messages shown next to the contact form.

use std::fmt;

/// Visual tone of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Work in progress ("Enviando...")
    Pending,
    /// Validation or delivery failure
    Error,
    /// Message delivered
    Success,
}

impl StatusTone {
    /// CSS colour used for this tone.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "#ccc",
            Self::Error => "#ff6b6b",
            Self::Success => "#00f5c3",
        }
    }
}

impl fmt::Display for StatusTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// A line of text plus its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusTone::Error)
    }
}
