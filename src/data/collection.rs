//! Ordered documents loaded from one directory.

use super::DataItem;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Items of a directory data source, in discovery order.
///
/// Serializes as a plain sequence so templates iterate it like a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    name: String,
    path: PathBuf,
    items: Vec<DataItem>,
}

impl Collection {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn push(&mut self, item: DataItem) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&DataItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a DataItem;
    type IntoIter = std::slice::Iter<'a, DataItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Collection {
    type Item = DataItem;
    type IntoIter = std::vec::IntoIter<DataItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
