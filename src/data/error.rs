//! Data source error types.

use crate::readers::ReadError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a data source, or one of its files, produced no value.
///
/// None of these abort a generation pass; they are logged and the source is
/// left out of `data`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file format: {name}")]
    Unsupported { name: String },

    #[error("Missing data: {name}")]
    Missing { name: String },

    #[error("Could not process {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}
