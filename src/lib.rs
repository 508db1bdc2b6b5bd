//! Data sources for the tola static site generator.
//!
//! Loads the YAML, JSON and front-matter documents named in `[data] sources`
//! into a [`Context`](context::Context) so templates can read them as `data`.

pub mod cache;
pub mod cli;
pub mod config;
pub mod context;
pub mod data;
pub mod hooks;
pub mod logger;
pub mod readers;
pub mod utils;
