//! Path normalisation helpers.
//!
//! All comparisons here are lexical: `..` is resolved against the preceding
//! component without touching the filesystem, the way a shell user reads a path.

use std::{
    env,
    path::{Component, Path, PathBuf},
};

/// Normalize a path to absolute, using canonicalize if the path exists.
///
/// Non-existent paths are joined onto the current directory and normalised
/// lexically.
pub fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| lexical_absolute(path))
}

/// Make a path absolute against the current directory and resolve `.`/`..`
/// lexically, without following symlinks.
pub fn lexical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        env::current_dir()
            .map_or_else(|_| normalize(path), |cwd| normalize(&cwd.join(path)))
    }
}

/// Resolve `.` and `..` components lexically.
///
/// `..` directly under the root is dropped, matching `/..` == `/`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}

/// Compute `path` relative to `base`. Both must already be normalised.
///
/// Returns `None` when the two paths share no root (e.g. different drives).
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let path: Vec<_> = path.components().collect();
    let base: Vec<_> = base.components().collect();

    let common = path
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let rooted = |parts: &[Component]| {
        matches!(parts.first(), Some(Component::RootDir | Component::Prefix(_)))
    };
    if rooted(&path) != rooted(&base) || (common == 0 && rooted(&path)) {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &path[common..] {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

/// Render a relative path with forward slashes regardless of platform.
pub fn posixize(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_parent_dirs() {
        assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/./b/./c")), PathBuf::from("/a/b/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_for_relative() {
        assert_eq!(normalize(Path::new("../a/b/..")), PathBuf::from("../a"));
    }

    #[test]
    fn test_lexical_absolute_uses_cwd() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(lexical_absolute(Path::new("a/../b")), normalize(&cwd.join("b")));
    }

    #[test]
    fn test_relative_to_child() {
        let rel = relative_to(Path::new("/site/content/posts/a.md"), Path::new("/site/content"));
        assert_eq!(rel, Some(PathBuf::from("posts/a.md")));
    }

    #[test]
    fn test_relative_to_sibling() {
        let rel = relative_to(Path::new("/site/data/team/a.md"), Path::new("/site/content"));
        assert_eq!(rel, Some(PathBuf::from("../data/team/a.md")));
    }

    #[test]
    fn test_relative_to_same() {
        let rel = relative_to(Path::new("/site"), Path::new("/site"));
        assert_eq!(rel, Some(PathBuf::from(".")));
    }

    #[test]
    fn test_posixize() {
        assert_eq!(posixize(Path::new("a/b/c.md")), "a/b/c.md");
        assert_eq!(posixize(Path::new("../a")), "../a");
    }
}
