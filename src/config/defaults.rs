//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn ignore() -> Vec<String> {
        vec![".#*".into(), ".DS_Store".into()]
    }
}

// ============================================================================
// [data] Section Defaults
// ============================================================================

pub mod data {
    use std::path::PathBuf;

    pub fn paths() -> Vec<PathBuf> {
        vec!["data".into()]
    }
}

// ============================================================================
// [cache] Section Defaults
// ============================================================================

pub mod cache {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        ".tola-cache".into()
    }
}
