//! Interpretation of the remote form endpoint's responses.
//!
//! A rejected submission may carry `{"errors": [{"message": "..."}, ...]}`.
//! Anything else (no body, HTML, JSON without `errors`) falls back to the
//! generic failure message.

use serde::Deserialize;

/// Separator between field error messages.
pub const ERROR_SEPARATOR: &str = ", ";

/// Error body returned by the form endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

/// One error entry; only `message` is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl RemoteErrorBody {
    /// Server-provided messages joined for display, if there are any.
    #[must_use]
    pub fn joined_messages(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|errors| !errors.is_empty())?;
        Some(
            errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join(ERROR_SEPARATOR),
        )
    }
}

/// Text to show for a non-success response with the given body.
#[must_use]
pub fn rejection_message(body: &str, generic: &str) -> String {
    serde_json::from_str::<RemoteErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.joined_messages())
        .unwrap_or_else(|| generic.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC: &str = "Ops! Houve um problema ao enviar o formulário.";

    #[test]
    fn test_single_error_message() {
        let message = rejection_message(r#"{"errors":[{"message":"Invalid email"}]}"#, GENERIC);
        assert_eq!(message, "Invalid email");
    }

    #[test]
    fn test_multiple_errors_joined() {
        let body = r#"{"errors":[
            {"field":"email","code":"TYPE_EMAIL","message":"should be an email"},
            {"field":"message","code":"REQUIRED_FIELD_EMPTY","message":"is required"}
        ]}"#;
        assert_eq!(
            rejection_message(body, GENERIC),
            "should be an email, is required"
        );
    }

    #[test]
    fn test_no_errors_key_is_generic() {
        assert_eq!(rejection_message(r#"{"ok":false}"#, GENERIC), GENERIC);
    }

    #[test]
    fn test_empty_errors_is_generic() {
        assert_eq!(rejection_message(r#"{"errors":[]}"#, GENERIC), GENERIC);
    }

    #[test]
    fn test_non_json_is_generic() {
        assert_eq!(rejection_message("<h1>502 Bad Gateway</h1>", GENERIC), GENERIC);
        assert_eq!(rejection_message("", GENERIC), GENERIC);
    }
}
