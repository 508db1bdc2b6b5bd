//! A single parsed document.

use crate::config::SiteConfig;
use crate::hooks::Hooks;
use crate::utils::path::{lexical_absolute, posixize, relative_to};
use crate::utils::slug::slugify_file_stem;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Free-form document metadata, keys lower-cased.
pub type Metadata = serde_json::Map<String, Value>;

/// Metadata keys backed by named fields instead of the open mapping.
const RESERVED_KEYS: &[&str] = &["content", "source_path", "slug", "translations"];

/// One parsed document: front matter as metadata plus the raw body.
///
/// Serializes as a single flat object, so templates see `item.title` next to
/// `item.slug` and `item.content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_path: Option<PathBuf>,

    slug: String,

    /// Always empty here; filled in by i18n tooling.
    #[serde(default)]
    pub translations: Vec<DataItem>,

    #[serde(flatten)]
    metadata: Metadata,
}

impl DataItem {
    /// Build an item and fire the `content_object_init` hook.
    ///
    /// Metadata keys are lower-cased (last write wins). The slug comes from
    /// the `slug` key when present, otherwise from the source file name.
    pub fn new(
        content: impl Into<String>,
        metadata: Metadata,
        config: &SiteConfig,
        source_path: Option<PathBuf>,
        hooks: &Hooks,
    ) -> Self {
        let mut slug = None;
        let mut fields = Metadata::new();

        for (key, value) in metadata {
            let key = key.to_lowercase();
            match key.as_str() {
                "slug" => slug = Some(value_to_string(value)),
                k if RESERVED_KEYS.contains(&k) => {}
                _ => {
                    fields.insert(key, value);
                }
            }
        }

        let slug = slug.unwrap_or_else(|| {
            source_path
                .as_deref()
                .map(|path| slugify_file_stem(path, &config.build.slug.substitutions))
                .unwrap_or_default()
        });

        let item = Self {
            content: content.into(),
            source_path,
            slug,
            translations: Vec::new(),
            metadata: fields,
        };

        hooks.emit_content_object_init(&item);
        item
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up a field by name. Named fields win over metadata.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "content" => Some(Value::String(self.content.clone())),
            "slug" => Some(Value::String(self.slug.clone())),
            "source_path" => self
                .source_path
                .as_ref()
                .map(|path| Value::String(path.to_string_lossy().into_owned())),
            "translations" => serde_json::to_value(&self.translations).ok(),
            _ => self.metadata.get(key).cloned(),
        }
    }

    /// Path of `source_path` (default: this item's own source) relative to
    /// the content root, with forward slashes.
    ///
    /// Returns `None` when no path is available.
    pub fn get_relative_source_path(
        &self,
        config: &SiteConfig,
        source_path: Option<&Path>,
    ) -> Option<String> {
        let source_path = source_path
            .filter(|path| !path.as_os_str().is_empty())
            .or(self.source_path.as_deref())?;

        let root = lexical_absolute(&config.build.content);
        let path = lexical_absolute(&root.join(source_path));

        let relative = relative_to(&path, &root).unwrap_or(path);
        Some(posixize(&relative))
    }
}

impl std::fmt::Display for DataItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source_path {
            Some(path) => write!(f, "{}", path.display()),
            None => write!(f, "DataItem({})", self.slug),
        }
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
