//! Local validation of the contact form.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// The three fields of the contact form, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from raw control values, trimming each.
    #[must_use]
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Check required fields first, then the email shape.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingFields` if any field is empty
    /// - `ValidationError::InvalidEmail` if the email is not `local@domain.tld`-shaped
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Loose `local@domain.tld` shape check: no whitespace, exactly one `@`
/// boundary and a dot somewhere after it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let submission = ContactSubmission::from_raw("  Ana ", "\tana@site.com\n", " Oi ");
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email, "ana@site.com");
        assert_eq!(submission.message, "Oi");
    }

    #[test]
    fn test_all_blank_is_missing_fields() {
        let submission = ContactSubmission::from_raw("", "   ", "");
        assert_eq!(submission.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_missing_checked_before_email() {
        let submission = ContactSubmission::from_raw("Ana", "not-an-email", "");
        assert_eq!(submission.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let submission = ContactSubmission::from_raw("Ana", "ana.site.com", "Olá");
        assert_eq!(submission.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_valid_submission() {
        let submission = ContactSubmission::from_raw("Ana", "ana@site.com.br", "Olá!");
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@b."));
    }
}
