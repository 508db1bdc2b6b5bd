//! File discovery for directory data sources.

use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compiled set of file name patterns (`*` and `?` wildcards).
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Regex>,
}

impl IgnoreSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|pattern| Regex::new(&wildcard_to_regex(pattern.as_ref())).ok())
            .collect();
        Self { patterns }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }
}

fn wildcard_to_regex(pattern: &str) -> String {
    let escaped = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");
    format!("^{escaped}$")
}

/// Collect files under `dir` recursively.
///
/// Order is deterministic (sorted by file name at every level). Only files whose
/// extension is in `extensions` are kept; ignored names are skipped, and an
/// ignored directory is not descended into.
pub fn get_files(dir: &Path, extensions: &[&str], ignore: &IgnoreSet) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !ignore.is_ignored(e.file_name().to_str().unwrap_or_default())
        })
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_ignore_set_wildcards() {
        let ignore = IgnoreSet::new(&[".#*", "*.bak", "draft?.md"]);

        assert!(ignore.is_ignored(".#alice.md"));
        assert!(ignore.is_ignored("notes.bak"));
        assert!(ignore.is_ignored("draft1.md"));
        assert!(!ignore.is_ignored("alice.md"));
        assert!(!ignore.is_ignored("draft10.md"));
    }

    #[test]
    fn test_ignore_set_escapes_regex_chars() {
        let ignore = IgnoreSet::new(&["a+b.md"]);
        assert!(ignore.is_ignored("a+b.md"));
        assert!(!ignore.is_ignored("aab.md"));
    }

    #[test]
    fn test_get_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("b.md"), "").unwrap();
        fs::write(root.join("a.md"), "").unwrap();
        fs::write(root.join("sub/c.md"), "").unwrap();
        fs::write(root.join("skip.txt"), "").unwrap();
        fs::write(root.join(".#a.md"), "").unwrap();

        let ignore = IgnoreSet::new(&[".#*"]);
        let files = get_files(root, &["md"], &ignore);

        assert_eq!(
            files,
            vec![root.join("a.md"), root.join("b.md"), root.join("sub/c.md")]
        );
    }

    #[test]
    fn test_get_files_skips_ignored_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("drafts/x.md"), "").unwrap();
        fs::write(root.join("y.md"), "").unwrap();

        let files = get_files(root, &["md"], &IgnoreSet::new(&["drafts"]));
        assert_eq!(files, vec![root.join("y.md")]);
    }

    #[test]
    fn test_get_files_missing_dir() {
        let files = get_files(Path::new("/no/such/dir"), &["md"], &IgnoreSet::default());
        assert!(files.is_empty());
    }
}
