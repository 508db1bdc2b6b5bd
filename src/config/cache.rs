//! `[cache]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a cached entry is checked against the file on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMethod {
    /// Compare modification times (default).
    #[default]
    Mtime,
    /// Compare blake3 digests of the file contents.
    Hash,
}

/// `[cache]` section in tola.toml - parsed-file cache between builds.
///
/// # Example
/// ```toml
/// [cache]
/// enable = true
/// path = ".tola-cache"
/// check = "hash"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Cache parsed files at all.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Load the cache persisted by the previous build.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub load: bool,

    /// Directory holding one JSON file per cache namespace.
    #[serde(default = "defaults::cache::path")]
    #[educe(Default = defaults::cache::path())]
    pub path: PathBuf,

    /// Staleness check for cached entries.
    pub check: CheckMethod,
}
