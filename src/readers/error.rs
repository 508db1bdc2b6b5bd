//! Reader error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or decode a single file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid front matter: {0}")]
    FrontMatter(String),

    #[error("no reader registered for `{}`", .0.display())]
    NoReader(PathBuf),
}
