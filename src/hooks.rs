//! Extension hooks fired during a generation pass.
//!
//! | Hook                  | Fired                                       |
//! |-----------------------|---------------------------------------------|
//! | `generator_init`      | after the data generator is constructed     |
//! | `preread`             | before a document is read by a reader       |
//! | `context`             | after reading, with mutable metadata        |
//! | `content_object_init` | after each [`DataItem`] is constructed      |
//! | `generator_finalized` | after `data` is written into the context    |
//!
//! Callbacks run synchronously in registration order. A callback returning an
//! error is logged and skipped; it never aborts the pass.

use crate::context::Context;
use crate::data::{DataGenerator, DataItem, Metadata};
use crate::log;
use anyhow::Result;
use std::fmt;
use std::path::Path;

type InitHook = Box<dyn Fn(&DataGenerator<'_>) -> Result<()>>;
type PrereadHook = Box<dyn Fn(&Path) -> Result<()>>;
type ContextHook = Box<dyn Fn(&Path, &mut Metadata) -> Result<()>>;
type ItemHook = Box<dyn Fn(&DataItem) -> Result<()>>;
type FinalizedHook = Box<dyn Fn(&Context) -> Result<()>>;

/// Registry of callbacks for each hook point.
#[derive(Default)]
pub struct Hooks {
    generator_init: Vec<InitHook>,
    preread: Vec<PrereadHook>,
    context: Vec<ContextHook>,
    content_object_init: Vec<ItemHook>,
    generator_finalized: Vec<FinalizedHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("generator_init", &self.generator_init.len())
            .field("preread", &self.preread.len())
            .field("context", &self.context.len())
            .field("content_object_init", &self.content_object_init.len())
            .field("generator_finalized", &self.generator_finalized.len())
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_generator_init(
        &mut self,
        f: impl Fn(&DataGenerator<'_>) -> Result<()> + 'static,
    ) -> &mut Self {
        self.generator_init.push(Box::new(f));
        self
    }

    pub fn on_preread(&mut self, f: impl Fn(&Path) -> Result<()> + 'static) -> &mut Self {
        self.preread.push(Box::new(f));
        self
    }

    pub fn on_context(
        &mut self,
        f: impl Fn(&Path, &mut Metadata) -> Result<()> + 'static,
    ) -> &mut Self {
        self.context.push(Box::new(f));
        self
    }

    pub fn on_content_object_init(
        &mut self,
        f: impl Fn(&DataItem) -> Result<()> + 'static,
    ) -> &mut Self {
        self.content_object_init.push(Box::new(f));
        self
    }

    pub fn on_generator_finalized(
        &mut self,
        f: impl Fn(&Context) -> Result<()> + 'static,
    ) -> &mut Self {
        self.generator_finalized.push(Box::new(f));
        self
    }

    pub(crate) fn emit_generator_init(&self, generator: &DataGenerator<'_>) {
        for hook in &self.generator_init {
            guard("generator_init", hook(generator));
        }
    }

    pub(crate) fn emit_preread(&self, path: &Path) {
        for hook in &self.preread {
            guard("preread", hook(path));
        }
    }

    pub(crate) fn emit_context(&self, path: &Path, metadata: &mut Metadata) {
        for hook in &self.context {
            guard("context", hook(path, metadata));
        }
    }

    pub(crate) fn emit_content_object_init(&self, item: &DataItem) {
        for hook in &self.content_object_init {
            guard("content_object_init", hook(item));
        }
    }

    pub(crate) fn emit_generator_finalized(&self, context: &Context) {
        for hook in &self.generator_finalized {
            guard("generator_finalized", hook(context));
        }
    }
}

fn guard(point: &str, result: Result<()>) {
    if let Err(err) = result {
        log!("warn"; "{point} hook failed: {err:#}");
    }
}
