//! Shared generation context.
//!
//! One [`Context`] lives for one generation pass. Generators write into it, the
//! templating stage reads from it.

use crate::config::SiteConfig;
use crate::data::{DataItem, DataValue};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize)]
pub struct Context {
    /// Loaded data sources, keyed by source name.
    pub data: BTreeMap<String, DataValue>,

    /// Relative source paths of every document registered this pass.
    filenames: BTreeSet<String>,

    /// Files that failed to load this pass, in the order they failed.
    #[serde(skip)]
    failed: Vec<PathBuf>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loaded document under its path relative to the content root.
    pub fn add_source_path(&mut self, item: &DataItem, config: &SiteConfig) {
        if let Some(relative) = item.get_relative_source_path(config, None) {
            self.filenames.insert(relative);
        }
    }

    /// Record a file that could not be loaded.
    pub fn add_failed_source_path(&mut self, path: &Path) {
        if !self.failed.iter().any(|failed| failed == path) {
            self.failed.push(path.to_path_buf());
        }
    }

    pub fn filenames(&self) -> &BTreeSet<String> {
        &self.filenames
    }

    pub fn failed_paths(&self) -> &[PathBuf] {
        &self.failed
    }

    /// The `data` mapping as pretty JSON, for templates or inspection.
    pub fn data_to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_paths_keep_order_and_dedupe() {
        let mut ctx = Context::new();
        ctx.add_failed_source_path(Path::new("b.yaml"));
        ctx.add_failed_source_path(Path::new("a.yaml"));
        ctx.add_failed_source_path(Path::new("b.yaml"));

        assert_eq!(
            ctx.failed_paths(),
            &[PathBuf::from("b.yaml"), PathBuf::from("a.yaml")]
        );
    }

    #[test]
    fn test_data_to_json() {
        let mut ctx = Context::new();
        ctx.data.insert(
            "colors".into(),
            DataValue::Document(serde_json::json!({ "red": "#f00" })),
        );

        let json: serde_json::Value = serde_json::from_str(&ctx.data_to_json().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "colors": { "red": "#f00" } }));
    }
}
