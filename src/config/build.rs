//! `[build]` section configuration.
//!
//! Contains the project layout and the settings shared by every generator:
//! content root, debug traces, ignored file patterns and slug rules.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// `[build]` section in tola.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// debug = false
/// ignore = [".#*", "*.bak"]
///
/// [build.slug]
/// substitutions = [["c++", "cpp"], ["&", "and", true]]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content root. Relative source paths are computed against it.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Print full error traces when a file fails to load.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub debug: bool,

    /// File name patterns skipped during discovery (`*` and `?` wildcards).
    #[serde(default = "defaults::build::ignore")]
    #[educe(Default = defaults::build::ignore())]
    pub ignore: Vec<String>,

    /// Slug generation settings.
    #[serde(default)]
    pub slug: SlugConfig,
}

/// `[build.slug]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugConfig {
    /// Ordered literal replacements applied before slugification.
    pub substitutions: Vec<SlugSubstitution>,
}

/// A single slug replacement rule.
///
/// Written as `[from, to]` or `[from, to, skip]`. When `skip` is set and the
/// rule matched, the non-alphanumeric cleanup is not applied afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugSubstitution {
    pub from: String,
    pub to: String,
    pub skip: bool,
}

impl SlugSubstitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            skip: false,
        }
    }

    pub fn skipping(mut self) -> Self {
        self.skip = true;
        self
    }
}

impl<'de> Deserialize<'de> for SlugSubstitution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Rule {
            Pair(String, String),
            Triple(String, String, bool),
        }

        Ok(match Rule::deserialize(deserializer)? {
            Rule::Pair(from, to) => Self::new(from, to),
            Rule::Triple(from, to, skip) => Self { from, to, skip },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert!(!config.build.debug);
        assert_eq!(config.build.ignore, vec![".#*", ".DS_Store"]);
        assert!(config.build.slug.substitutions.is_empty());
    }

    #[test]
    fn test_slug_substitutions_pairs_and_triples() {
        let config = r#"
            [build.slug]
            substitutions = [["c++", "cpp"], ["&", "and", true]]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.build.slug.substitutions,
            vec![
                SlugSubstitution::new("c++", "cpp"),
                SlugSubstitution::new("&", "and").skipping(),
            ]
        );
    }

    #[test]
    fn test_slug_substitution_rejects_single_value() {
        let config = r#"
            [build.slug]
            substitutions = [["c++"]]
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_build_field_rejection() {
        let config = r#"
            [build]
            minify = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
