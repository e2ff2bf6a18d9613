//! Document loading helpers.

use std::fs;
use std::path::Path;

use json_adapter::{AdapterError, Result};
use serde_json::Value;
use tracing::debug;

/// Parse JSON text into a document.
pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| {
        debug!(error = %err, "document parse failed");
        AdapterError::Parse(err.to_string())
    })
}

/// Read and parse a JSON file.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading document");
    let text = fs::read_to_string(path)?;
    parse_document(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_reports_syntax_errors() {
        assert_eq!(parse_document("[1, 2]").unwrap(), json!([1, 2]));
        assert!(matches!(
            parse_document("{\"a\": }"),
            Err(AdapterError::Parse(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_document("/nonexistent/path/to/document.json").unwrap_err();
        assert!(matches!(err, AdapterError::Io(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"x": [1, "two"]}}"#).unwrap();
        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc, json!({"x": [1, "two"]}));
    }
}
