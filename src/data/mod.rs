//! Data sources exposed to templates under `data`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          generate_context()                          │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │                                                                      │
//! │  [data] sources ──► is_supported? ──no──► warn "Unsupported"         │
//! │        │                                                             │
//! │        ▼  first root in [data] paths that has it                     │
//! │  ┌────────────┬──────────────┬──────────────┬─────────────────┐      │
//! │  │ directory  │ .yaml / .yml │ .json        │ reader ext      │      │
//! │  │ Collection │ Document     │ Document     │ DataItem        │      │
//! │  └────────────┴──────────────┴──────────────┴─────────────────┘      │
//! │        │            each file: cache.get ──miss──► parse ──► set     │
//! │        ▼                                                             │
//! │  context.data[name] = value        (failures: warn, skip, record)    │
//! │                                                                      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Keys
//!
//! | Source          | Key       | Value                          |
//! |-----------------|-----------|--------------------------------|
//! | `colors.yaml`   | `colors`  | decoded YAML document          |
//! | `links.json`    | `links`   | decoded JSON document          |
//! | `about.md`      | `about`   | one [`DataItem`]               |
//! | `team/`         | `team`    | [`Collection`] of [`DataItem`] |

mod collection;
mod error;
mod generator;
mod item;

pub use collection::Collection;
pub use error::LoadError;
pub use generator::{DataGenerator, SUPPORTED_FORMATS};
pub use item::{DataItem, Metadata};

use serde::Serialize;

/// What a data source resolves to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    /// A directory of documents.
    Collection(Collection),
    /// A decoded YAML or JSON document.
    Document(serde_json::Value),
    /// A single document read by a content reader.
    Item(DataItem),
}

impl DataValue {
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Document(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&DataItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }
}
