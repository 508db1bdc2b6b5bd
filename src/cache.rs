//! Path-keyed cache of parsed files.
//!
//! Each generator owns one [`FileCache`] namespace. Entries remember a freshness
//! stamp of the file they were parsed from (modification time or blake3 digest,
//! see [`CheckMethod`]); a lookup only hits while the stamp still matches the
//! file on disk, so a hit is always equivalent to re-parsing.
//!
//! ```text
//! <cache.path>/
//! ├── data.json       generator namespace (decoded documents)
//! └── readers.json    reader namespace (raw content + metadata)
//! ```

use crate::config::{CacheConfig, CheckMethod};
use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    time::UNIX_EPOCH,
};

/// Freshness stamp of a source file at the time it was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Stamp {
    Mtime { secs: u64, nanos: u32 },
    Hash(String),
}

impl Stamp {
    fn of(path: &Path, check: CheckMethod) -> Option<Self> {
        match check {
            CheckMethod::Mtime => {
                let modified = path.metadata().ok()?.modified().ok()?;
                let since = modified.duration_since(UNIX_EPOCH).ok()?;
                Some(Self::Mtime {
                    secs: since.as_secs(),
                    nanos: since.subsec_nanos(),
                })
            }
            CheckMethod::Hash => {
                let bytes = fs::read(path).ok()?;
                Some(Self::Hash(blake3::hash(&bytes).to_hex().to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry<T> {
    stamp: Stamp,
    value: T,
}

/// A persisted, path-keyed memoization store.
#[derive(Debug)]
pub struct FileCache<T> {
    /// Backing file; `None` when caching is disabled.
    file: Option<PathBuf>,
    check: CheckMethod,
    entries: BTreeMap<PathBuf, Entry<T>>,
    /// Paths looked up or stored since the cache was opened.
    touched: BTreeSet<PathBuf>,
}

impl<T> FileCache<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Open the `namespace` cache, loading persisted entries when allowed.
    ///
    /// An unreadable or corrupt cache file is discarded with a warning.
    pub fn open(config: &CacheConfig, namespace: &str) -> Self {
        if !config.enable {
            return Self::disabled();
        }

        let file = config.path.join(format!("{namespace}.json"));
        let entries = if config.load && file.exists() {
            match Self::load(&file) {
                Ok(entries) => entries,
                Err(err) => {
                    log!("warn"; "discarding cache {}: {err:#}", file.display());
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Self {
            file: Some(file),
            check: config.check,
            entries,
            touched: BTreeSet::new(),
        }
    }

    /// A cache that never hits and never persists.
    pub fn disabled() -> Self {
        Self {
            file: None,
            check: CheckMethod::default(),
            entries: BTreeMap::new(),
            touched: BTreeSet::new(),
        }
    }

    fn load(file: &Path) -> Result<BTreeMap<PathBuf, Entry<T>>> {
        let content = fs::read_to_string(file)?;
        let entries = serde_json::from_str(&content)?;
        Ok(entries)
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Look up the value parsed from `path`, if it is still fresh.
    pub fn get(&mut self, path: &Path) -> Option<T> {
        let entry = self.entries.get(path)?;
        self.touched.insert(path.to_path_buf());
        let stamp = Stamp::of(path, self.check)?;
        (entry.stamp == stamp).then(|| entry.value.clone())
    }

    /// Remember the value parsed from `path`.
    ///
    /// No-op when caching is disabled or the file cannot be stamped.
    pub fn set(&mut self, path: &Path, value: T) {
        if !self.is_enabled() {
            return;
        }
        if let Some(stamp) = Stamp::of(path, self.check) {
            self.touched.insert(path.to_path_buf());
            self.entries.insert(path.to_path_buf(), Entry { stamp, value });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the entries used since opening to the backing file. Entries for
    /// files no longer looked up (deleted, renamed, dropped sources) are left out.
    pub fn persist(&self) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating cache directory {}", parent.display()))?;
        }

        let live: BTreeMap<&PathBuf, &Entry<T>> = self
            .entries
            .iter()
            .filter(|(path, _)| self.touched.contains(*path))
            .collect();

        let json = serde_json::to_string(&live)?;
        fs::write(file, json).with_context(|| format!("writing cache {}", file.display()))?;
        Ok(())
    }
}
