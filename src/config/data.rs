//! `[data]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[data]` section in tola.toml - which data sources to load and where.
///
/// # Example
/// ```toml
/// [data]
/// sources = ["colors.yaml", "team", "links.json"]
/// paths = ["data", "shared/data"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Data source names, loaded in order. A name is either a file
    /// (`colors.yaml`) or a directory of documents (`team`).
    pub sources: Vec<String>,

    /// Roots searched for each source, in priority order.
    #[serde(default = "defaults::data::paths")]
    #[educe(Default = defaults::data::paths())]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_data_config_full() {
        let config = r#"
            [data]
            sources = ["colors.yaml", "team"]
            paths = ["data", "vendor/data"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.data.sources, vec!["colors.yaml", "team"]);
        assert_eq!(
            config.data.paths,
            vec![PathBuf::from("data"), PathBuf::from("vendor/data")]
        );
    }

    #[test]
    fn test_data_config_defaults() {
        let config: SiteConfig = toml::from_str("[data]").unwrap();

        assert!(config.data.sources.is_empty());
        assert_eq!(config.data.paths, vec![PathBuf::from("data")]);
    }
}
