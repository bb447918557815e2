//! Project records decoded from `projetos.json`.
//!
//! The file is hand-maintained, so decoding is lenient per field: a missing
//! or `null` field renders as empty text and scalars render as their text.
//! An entry that is not an object has no fields, so it becomes an empty
//! card. Only a body that is not a JSON array, or a `null` entry, is an
//! error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ProjectDecodeError;

/// One portfolio entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "titulo", default, deserialize_with = "lenient_text")]
    pub title: String,

    #[serde(rename = "descricao", default, deserialize_with = "lenient_text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub link: String,
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

fn decode_entry(index: usize, entry: Value) -> Result<ProjectRecord, ProjectDecodeError> {
    match entry {
        Value::Null => Err(ProjectDecodeError::NullEntry { index }),
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        _ => Ok(ProjectRecord::default()),
    }
}

/// Decode the full project list, preserving array order.
///
/// # Errors
///
/// - `ProjectDecodeError::Json` when the body is not a JSON array
/// - `ProjectDecodeError::NullEntry` when an entry is `null`
pub fn decode_projects(body: &str) -> Result<Vec<ProjectRecord>, ProjectDecodeError> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(index, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_two_records_in_order() {
        let body = r#"[{"titulo":"A","descricao":"d1","link":"u1"},{"titulo":"B","descricao":"d2","link":"u2"}]"#;
        let projects = decode_projects(body).unwrap();

        assert_eq!(
            projects,
            vec![
                ProjectRecord::new("A", "d1", "u1"),
                ProjectRecord::new("B", "d2", "u2"),
            ]
        );
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let projects = decode_projects(r#"[{"titulo":"Só título"},{"titulo":null,"link":"x"}]"#)
            .unwrap();

        assert_eq!(
            projects,
            vec![
                ProjectRecord::new("Só título", "", ""),
                ProjectRecord::new("", "", "x"),
            ]
        );
    }

    #[test]
    fn test_scalars_render_as_text() {
        let projects = decode_projects(r#"[{"titulo":2024,"descricao":true,"link":"l"}]"#).unwrap();
        assert_eq!(projects, vec![ProjectRecord::new("2024", "true", "l")]);
    }

    #[test]
    fn test_duplicates_kept() {
        let body = r#"[{"titulo":"A"},{"titulo":"A"}]"#;
        assert_eq!(decode_projects(body).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_array() {
        assert!(decode_projects("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_entries_become_empty_cards() {
        let body = r#"[{"titulo":"A","descricao":"d1","link":"u1"}, 5, "x", []]"#;
        let projects = decode_projects(body).unwrap();

        assert_eq!(
            projects,
            vec![
                ProjectRecord::new("A", "d1", "u1"),
                ProjectRecord::default(),
                ProjectRecord::default(),
                ProjectRecord::default(),
            ]
        );
    }

    #[test]
    fn test_null_entry_is_error() {
        let result = decode_projects(r#"[{"titulo":"A"}, null]"#);
        assert!(matches!(
            result,
            Err(ProjectDecodeError::NullEntry { index: 1 })
        ));
    }

    #[test]
    fn test_non_array_is_error() {
        assert!(decode_projects(r#"{"titulo":"A"}"#).is_err());
        assert!(decode_projects("<html>404</html>").is_err());
    }
}
