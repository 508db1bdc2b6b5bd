//! HTML documents with `<meta>` metadata.
//!
//! `<title>` becomes the `title` key, every `<meta name=".." content="..">`
//! in the document becomes a metadata entry, and the inner HTML of `<body>`
//! (or the whole file when there is no body) is the content.

use super::{ReadError, ReadResult, Reader, read_source};
use crate::data::Metadata;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid html regex"));

static META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\s([^>]*)>").expect("valid html regex"));

static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([\w:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid html regex")
});

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").expect("valid html regex"));

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReader;

impl Reader for HtmlReader {
    fn extensions(&self) -> &'static [&'static str] {
        &["html", "htm"]
    }

    fn read(&self, path: &Path) -> Result<ReadResult, ReadError> {
        Ok(parse(&read_source(path)?))
    }
}

pub fn parse(text: &str) -> ReadResult {
    let mut metadata = Metadata::new();

    if let Some(title) = TITLE.captures(text).and_then(|c| c.get(1)) {
        metadata.insert("title".into(), Value::String(title.as_str().trim().to_owned()));
    }

    for tag in META.captures_iter(text) {
        let mut name = None;
        let mut content = None;

        for attr in ATTR.captures_iter(&tag[1]) {
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .map_or("", |m| m.as_str());
            match attr[1].to_ascii_lowercase().as_str() {
                "name" => name = Some(value.to_lowercase()),
                "content" => content = Some(value.to_owned()),
                _ => {}
            }
        }

        if let (Some(name), Some(content)) = (name, content) {
            metadata.insert(name, Value::String(content));
        }
    }

    let content = BODY
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str())
        .trim()
        .to_owned();

    ReadResult { content, metadata }
}
