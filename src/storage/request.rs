//! Reading schedule requests from disk or stdin
//!
//! A request document is either `{"tasks": [...]}` or a bare task array,
//! written as JSON or YAML. The document is read into a generic value first
//! so that parse errors point at the offending field.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ScheduleTask;
use crate::service::ScheduleRequest;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} request: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },

    #[error("Unsupported request file extension: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Encoding of a request document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension; files without one are JSON
    pub fn from_path(path: &Path) -> Result<Self, RequestError> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(DocumentFormat::Json),
            Some(ext) => match ext.to_ascii_lowercase().as_str() {
                "json" => Ok(DocumentFormat::Json),
                "yaml" | "yml" => Ok(DocumentFormat::Yaml),
                other => Err(RequestError::UnsupportedFormat(other.to_string())),
            },
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "JSON"),
            DocumentFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Parses a request document
pub fn parse_request(content: &str, format: DocumentFormat) -> Result<ScheduleRequest, RequestError> {
    let parse_error = |message: String| RequestError::Parse { format, message };

    match format {
        DocumentFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            let request = if value.is_array() {
                serde_json::from_value::<Vec<ScheduleTask>>(value).map(ScheduleRequest::new)
            } else {
                serde_json::from_value(value)
            };
            request.map_err(|e| parse_error(e.to_string()))
        }
        DocumentFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            let request = if value.is_sequence() {
                serde_yaml::from_value::<Vec<ScheduleTask>>(value).map(ScheduleRequest::new)
            } else {
                serde_yaml::from_value(value)
            };
            request.map_err(|e| parse_error(e.to_string()))
        }
    }
}

/// Loads a request from a path, or from stdin when `input` is `-`
///
/// Stdin is always read as JSON.
pub fn load_request(input: &str) -> Result<(ScheduleRequest, DocumentFormat), RequestError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| RequestError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        let request = parse_request(&content, DocumentFormat::Json)?;
        return Ok((request, DocumentFormat::Json));
    }

    let path = Path::new(input);
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| RequestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((parse_request(&content, format)?, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_wrapped_json() {
        let json = r#"{"tasks": [{"title": "A", "estimatedHours": 2}]}"#;
        let request = parse_request(json, DocumentFormat::Json).unwrap();
        assert_eq!(request.tasks, vec![ScheduleTask::new("A", 2)]);
    }

    #[test]
    fn parses_bare_json_array() {
        let json = r#"[{"title": "A", "estimatedHours": 2, "dependencies": ["B"]}, {"title": "B"}]"#;
        let request = parse_request(json, DocumentFormat::Json).unwrap();
        assert_eq!(request.tasks.len(), 2);
        assert_eq!(request.tasks[0].dependencies, vec!["B"]);
        assert_eq!(request.tasks[1].estimated_hours, 0);
    }

    #[test]
    fn parses_yaml() {
        let yaml = r#"
tasks:
  - title: Design API
    estimatedHours: 5
    dueDate: "2025-11-01"
  - title: Implement Backend
    estimatedHours: 12
    dependencies: [Design API]
"#;
        let request = parse_request(yaml, DocumentFormat::Yaml).unwrap();
        assert_eq!(request.tasks.len(), 2);
        assert_eq!(request.tasks[0].due_date.as_deref(), Some("2025-11-01"));
        assert_eq!(request.tasks[1].dependencies, vec!["Design API"]);
    }

    #[test]
    fn bad_field_type_names_the_field() {
        let json = r#"[{"title": "A", "estimatedHours": "lots"}]"#;
        match parse_request(json, DocumentFormat::Json) {
            Err(RequestError::Parse { message, .. }) => assert!(message.contains("invalid type")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = parse_request("{not json", DocumentFormat::Json);
        assert!(matches!(result, Err(RequestError::Parse { .. })));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")).unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")).unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("tasks")).unwrap(), DocumentFormat::Json);
        assert!(matches!(
            DocumentFormat::from_path(Path::new("a.csv")),
            Err(RequestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.yaml");
        fs::write(&path, "- title: Only\n  estimatedHours: 1\n").unwrap();

        let (request, format) = load_request(path.to_str().unwrap()).unwrap();
        assert_eq!(format, DocumentFormat::Yaml);
        assert_eq!(request.tasks[0].title, "Only");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let result = load_request(path.to_str().unwrap());
        assert!(matches!(result, Err(RequestError::Read { .. })));
    }
}
