//! Content readers.
//!
//! A [`Reader`] turns one file into raw content plus metadata. [`Readers`] is
//! the registry the data generator dispatches to by file extension; it also
//! owns the `readers` cache namespace, so unchanged files are not re-parsed.
//!
//! # Built-in readers
//!
//! | Reader             | Extensions                      |
//! |--------------------|---------------------------------|
//! | [`MarkdownReader`] | `md`, `markdown`, `mkd`, `mdown` |
//! | [`HtmlReader`]     | `html`, `htm`                   |

mod error;
pub mod html;
pub mod markdown;

pub use error::ReadError;
pub use html::HtmlReader;
pub use markdown::MarkdownReader;

use crate::cache::FileCache;
use crate::config::SiteConfig;
use crate::data::{DataItem, Metadata};
use crate::hooks::Hooks;
use crate::utils::path::normalize;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Raw output of a reader, before it becomes a [`DataItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadResult {
    pub content: String,
    pub metadata: Metadata,
}

/// A format-specific document parser.
pub trait Reader {
    /// File extensions handled, without the leading dot.
    fn extensions(&self) -> &'static [&'static str];

    fn read(&self, path: &Path) -> Result<ReadResult, ReadError>;
}

/// Read a file as UTF-8 text.
pub(crate) fn read_source(path: &Path) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|err| ReadError::Io(path.to_path_buf(), err))
}

/// Registry of readers keyed by extension. Later registrations win.
pub struct Readers {
    readers: Vec<Box<dyn Reader>>,
    cache: FileCache<ReadResult>,
}

impl Readers {
    /// Registry with the built-in readers and the persisted `readers` cache.
    pub fn new(config: &SiteConfig) -> Self {
        let mut readers = Self::empty(FileCache::open(&config.cache, "readers"));
        readers.register(MarkdownReader);
        readers.register(HtmlReader);
        readers
    }

    /// Registry without any readers.
    pub fn empty(cache: FileCache<ReadResult>) -> Self {
        Self {
            readers: Vec::new(),
            cache,
        }
    }

    pub fn register(&mut self, reader: impl Reader + 'static) -> &mut Self {
        self.readers.push(Box::new(reader));
        self
    }

    /// Every extension some reader handles.
    pub fn extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<_> = self
            .readers
            .iter()
            .flat_map(|reader| reader.extensions().iter().copied())
            .collect();
        extensions.sort_unstable();
        extensions.dedup();
        extensions
    }

    /// The reader responsible for `path`, by extension.
    pub fn reader_for(&self, path: &Path) -> Option<&dyn Reader> {
        let ext = path.extension()?.to_str()?;
        self.readers
            .iter()
            .rev()
            .find(|reader| reader.extensions().contains(&ext))
            .map(Box::as_ref)
    }

    /// Read `path` (relative to `base_path`) into a [`DataItem`].
    ///
    /// Fires `preread` before reading and `context` with the parsed metadata
    /// afterwards. Only the raw reader output is cached; the item is rebuilt
    /// on every call, so hooks and slug settings apply to cache hits too.
    pub fn read_file(
        &mut self,
        base_path: &Path,
        path: &Path,
        config: &SiteConfig,
        hooks: &Hooks,
    ) -> Result<DataItem, ReadError> {
        let path = normalize(&base_path.join(path));
        hooks.emit_preread(&path);

        let ReadResult {
            content,
            mut metadata,
        } = match self.cache.get(&path) {
            Some(cached) if self.reader_for(&path).is_some() => cached,
            _ => {
                let reader = self
                    .reader_for(&path)
                    .ok_or_else(|| ReadError::NoReader(path.clone()))?;
                let result = reader.read(&path)?;
                self.cache.set(&path, result.clone());
                result
            }
        };

        hooks.emit_context(&path, &mut metadata);
        Ok(DataItem::new(content, metadata, config, Some(path), hooks))
    }

    pub fn save_cache(&self) -> Result<()> {
        self.cache.persist()
    }
}
