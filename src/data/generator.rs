//! The data generator: resolves `[data] sources` into `context.data`.

use super::{Collection, DataItem, DataValue, LoadError};
use crate::cache::FileCache;
use crate::config::SiteConfig;
use crate::context::Context;
use crate::hooks::Hooks;
use crate::log;
use crate::readers::{ReadError, Readers, read_source};
use crate::utils::files::{IgnoreSet, get_files};
use crate::utils::path::lexical_absolute;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Structured formats decoded whole, besides whatever the readers handle.
pub const SUPPORTED_FORMATS: &[&str] = &["json", "yaml", "yml"];

/// Loads every configured data source for one generation pass.
pub struct DataGenerator<'a> {
    config: &'a SiteConfig,
    readers: Readers,
    hooks: Hooks,
    cache: FileCache<Value>,
    ignore: IgnoreSet,
}

impl<'a> DataGenerator<'a> {
    /// Create the generator, load its cache and fire `generator_init`.
    pub fn new(config: &'a SiteConfig, readers: Readers, hooks: Hooks) -> Self {
        let generator = Self {
            config,
            readers,
            hooks,
            cache: FileCache::open(&config.cache, "data"),
            ignore: IgnoreSet::new(config.build.ignore.as_slice()),
        };
        generator.hooks.emit_generator_init(&generator);
        generator
    }

    pub fn config(&self) -> &SiteConfig {
        self.config
    }

    pub fn readers(&self) -> &Readers {
        &self.readers
    }

    /// Whether `name` can be loaded: a known extension, or a directory under
    /// one of the data roots.
    pub fn is_supported(&self, name: &str) -> bool {
        let known_extension = extension(name).is_some_and(|ext| {
            SUPPORTED_FORMATS.contains(&ext) || self.readers.extensions().contains(&ext)
        });

        known_extension
            || self
                .config
                .data
                .paths
                .iter()
                .any(|root| root.join(name).is_dir())
    }

    /// Load all sources into `ctx.data`, replacing its previous value, then
    /// persist both caches and fire `generator_finalized`.
    ///
    /// Never fails: unsupported, missing and broken sources are logged and
    /// left out.
    pub fn generate_context(&mut self, ctx: &mut Context) {
        let config = self.config;
        let mut data = BTreeMap::new();

        for name in &config.data.sources {
            match self.load_source(name, ctx) {
                Ok((key, value)) => {
                    data.insert(key, value);
                }
                Err(err) => log!("warn"; "{err}"),
            }
        }

        log!("data"; "loaded {} of {} data sources", data.len(), config.data.sources.len());
        ctx.data = data;

        if let Err(err) = self.cache.persist() {
            log!("warn"; "could not save data cache: {err:#}");
        }
        if let Err(err) = self.readers.save_cache() {
            log!("warn"; "could not save reader cache: {err:#}");
        }

        self.hooks.emit_generator_finalized(ctx);
    }

    /// Resolve one source against the data roots; first root wins.
    fn load_source(
        &mut self,
        name: &str,
        ctx: &mut Context,
    ) -> Result<(String, DataValue), LoadError> {
        if !self.is_supported(name) {
            return Err(LoadError::Unsupported { name: name.into() });
        }

        let config = self.config;
        for root in &config.data.paths {
            let path = root.join(name);

            if path.is_dir() {
                let collection = self.context_for_dir(name, &path, ctx);
                return Ok((name.to_owned(), DataValue::Collection(collection)));
            }

            if path.exists() {
                let key = strip_extension(name);
                let value = match extension(name) {
                    Some("yaml" | "yml") => self.context_for_yaml(&path, ctx),
                    Some("json") => self.context_for_json(&path, ctx),
                    _ => self.context_for_reader(&path, ctx).map(DataValue::Item),
                };
                return match value {
                    Some(value) => Ok((key, value)),
                    None => Err(LoadError::Missing { name: key }),
                };
            }
        }

        Err(LoadError::Missing { name: name.into() })
    }

    /// Every reader-supported file under `path`, in discovery order. Files
    /// that fail to read are recorded and skipped.
    pub fn context_for_dir(&mut self, name: &str, path: &Path, ctx: &mut Context) -> Collection {
        let mut collection = Collection::new(name, path);
        let extensions = self.readers.extensions();

        for file in get_files(path, &extensions, &self.ignore) {
            if let Some(item) = self.context_for_reader(&file, ctx) {
                collection.push(item);
            }
        }

        collection
    }

    pub fn context_for_yaml(&mut self, path: &Path, ctx: &mut Context) -> Option<DataValue> {
        self.context_for_document(path, ctx, decode_yaml)
    }

    pub fn context_for_json(&mut self, path: &Path, ctx: &mut Context) -> Option<DataValue> {
        self.context_for_document(path, ctx, decode_json)
    }

    fn context_for_document(
        &mut self,
        path: &Path,
        ctx: &mut Context,
        decode: fn(&Path) -> Result<Value, ReadError>,
    ) -> Option<DataValue> {
        if let Some(value) = self.cache.get(path) {
            return Some(DataValue::Document(value));
        }

        match decode(path) {
            Ok(value) => {
                self.cache.set(path, value.clone());
                Some(DataValue::Document(value))
            }
            Err(source) => {
                self.report_failure(path, source, ctx);
                None
            }
        }
    }

    /// A single document through the reader registry, registered in
    /// `ctx.filenames`.
    ///
    /// Items are rebuilt on every pass; the reader cache spares the parsing.
    pub fn context_for_reader(&mut self, path: &Path, ctx: &mut Context) -> Option<DataItem> {
        let config = self.config;
        let path = lexical_absolute(path);

        match self
            .readers
            .read_file(&config.build.content, &path, config, &self.hooks)
        {
            Ok(item) => {
                ctx.add_source_path(&item, config);
                Some(item)
            }
            Err(source) => {
                self.report_failure(&path, source, ctx);
                None
            }
        }
    }

    fn report_failure(&self, path: &Path, source: ReadError, ctx: &mut Context) {
        let err = anyhow::Error::from(LoadError::Parse {
            path: path.to_path_buf(),
            source,
        });

        if self.config.build.debug {
            log!("error"; "{err:?}");
        } else {
            log!("error"; "{err:#}");
        }

        ctx.add_failed_source_path(path);
    }
}

fn decode_yaml(path: &Path) -> Result<Value, ReadError> {
    Ok(serde_yaml::from_str(&read_source(path)?)?)
}

fn decode_json(path: &Path) -> Result<Value, ReadError> {
    Ok(serde_json::from_str(&read_source(path)?)?)
}

fn extension(name: &str) -> Option<&str> {
    Path::new(name).extension()?.to_str()
}

fn strip_extension(name: &str) -> String {
    Path::new(name)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}
