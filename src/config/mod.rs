//! Site configuration management for `tola.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[build]`   | Content root, debug traces, ignores, slug rules  |
//! | `[data]`    | Data sources and the roots they are searched in  |
//! | `[cache]`   | Parsed-file cache between builds                 |
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"
//!
//! [data]
//! sources = ["colors.yaml", "team"]
//! paths = ["data"]
//!
//! [cache]
//! check = "hash"
//! ```

mod build;
mod cache;
mod data;
pub mod defaults;
mod error;

pub use build::{BuildConfig, SlugConfig, SlugSubstitution};
pub use cache::{CacheConfig, CheckMethod};
pub use data::DataConfig;
pub use error::ConfigError;

use crate::cli::Cli;
use crate::utils::path::absolute;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Data sources
    #[serde(default)]
    pub data: DataConfig,

    /// Parsed-file cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = absolute(path);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        if cli.debug {
            self.build.debug = true;
        }

        self.resolve_paths(&root);
    }

    /// Make every configured path absolute, relative to `root`.
    pub fn resolve_paths(&mut self, root: &Path) {
        let root = absolute(root);
        self.set_root(&root);

        self.build.content = absolute(&root.join(&self.build.content));
        self.data.paths = self
            .data
            .paths
            .iter()
            .map(|path| absolute(&root.join(path)))
            .collect();

        let cache = shellexpand::tilde(&self.cache.path.to_string_lossy()).into_owned();
        self.cache.path = absolute(&root.join(cache));
    }

    /// Validate configuration before a generation pass
    pub fn validate(&self) -> Result<()> {
        if !self.data.sources.is_empty() && self.data.paths.is_empty() {
            bail!(ConfigError::Validation(
                "[data.paths] must list at least one root when [data.sources] is set".into(),
            ));
        }

        if let Some(name) = self.data.sources.iter().find(|name| name.trim().is_empty()) {
            bail!(ConfigError::Validation(format!(
                "[data.sources] contains an empty name: {name:?}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [data
            sources = ["colors.yaml"]
        "#;
        assert!(SiteConfig::from_str(invalid_config).is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_resolve_paths_joins_root() {
        let mut config = SiteConfig::from_str(
            r#"
            [build]
            content = "posts"

            [data]
            paths = ["data", "../shared"]
        "#,
        )
        .unwrap();
        config.resolve_paths(Path::new("/srv/site"));

        assert_eq!(config.build.content, PathBuf::from("/srv/site/posts"));
        assert_eq!(
            config.data.paths,
            vec![PathBuf::from("/srv/site/data"), PathBuf::from("/srv/shared")]
        );
        assert_eq!(config.cache.path, PathBuf::from("/srv/site/.tola-cache"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/definitely/not/here/tola.toml")).unwrap_err();
        assert!(format!("{err}").contains("IO error"));
    }

    #[test]
    fn test_from_path_sets_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tola.toml");
        fs::write(&path, "[data]\nsources = [\"colors.yaml\"]\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert!(config.config_path.is_absolute());
        assert!(config.config_path.ends_with("tola.toml"));
        assert_eq!(config.data.sources, vec!["colors.yaml"]);
    }

    #[test]
    fn test_validate_requires_paths() {
        let config = SiteConfig::from_str(
            r#"
            [data]
            sources = ["colors.yaml"]
            paths = []
        "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let config = SiteConfig::from_str("[data]\nsources = [\" \"]").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [serve]
            port = 5277
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
