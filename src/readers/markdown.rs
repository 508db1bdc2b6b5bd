//! Markdown documents with YAML front matter.
//!
//! ```markdown
//! ---
//! name: Alice
//! role: maintainer
//! ---
//! Alice wrote the first version of the site.
//! ```
//!
//! The front matter becomes metadata; the body is kept as raw Markdown for the
//! templating stage to render.

use super::{ReadError, ReadResult, Reader, read_source};
use crate::data::Metadata;
use gray_matter::{Matter, Pod, engine::Engine};
use serde_json::Value;
use std::path::Path;

/// Engine handing back the raw front matter text, so YAML errors come from
/// `serde_yaml` with line information instead of being swallowed.
struct RawFrontMatter;

impl Engine for RawFrontMatter {
    fn parse(content: &str) -> Result<Pod, gray_matter::Error> {
        Ok(Pod::String(content.to_string()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownReader;

impl Reader for MarkdownReader {
    fn extensions(&self) -> &'static [&'static str] {
        &["md", "markdown", "mkd", "mdown"]
    }

    fn read(&self, path: &Path) -> Result<ReadResult, ReadError> {
        parse(&read_source(path)?)
    }
}

/// Split front matter from body. A document without front matter has empty
/// metadata.
pub fn parse(text: &str) -> Result<ReadResult, ReadError> {
    let matter = Matter::<RawFrontMatter>::new();
    let parsed = matter
        .parse::<String>(text)
        .map_err(|err| ReadError::FrontMatter(err.to_string()))?;

    let data = match parsed.data.as_deref() {
        Some(raw) => Some(serde_yaml::from_str::<Value>(raw)?),
        None => None,
    };

    let metadata = match data {
        None | Some(Value::Null) => Metadata::new(),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(ReadError::FrontMatter(format!(
                "expected a mapping, found {}",
                kind(&other)
            )));
        }
    };

    Ok(ReadResult {
        content: parsed.content,
        metadata,
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_front_matter() {
        let text = "---\nname: Alice\nrole: maintainer\ntags: [a, b]\n---\nAlice wrote it.\n";
        let result = parse(text).unwrap();

        assert_eq!(result.metadata.get("name"), Some(&json!("Alice")));
        assert_eq!(result.metadata.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(result.content.trim(), "Alice wrote it.");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let result = parse("# Just a body\n").unwrap();
        assert!(result.metadata.is_empty());
        assert!(result.content.contains("Just a body"));
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let err = parse("---\n- a\n- b\n---\nbody\n").unwrap_err();
        assert!(err.to_string().contains("expected a mapping"));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(parse("---\nname: [unclosed\n---\nbody\n").is_err());
    }

    #[test]
    fn test_reader_missing_file() {
        let err = MarkdownReader.read(Path::new("/no/such/file.md")).unwrap_err();
        assert!(matches!(err, ReadError::Io(..)));
    }
}
