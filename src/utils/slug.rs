//! URL slugification.
//!
//! Converts titles and file names to URL-safe ASCII tokens.

use crate::config::SlugSubstitution;
use deunicode::deunicode;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Anything that is not a word character, whitespace or hyphen.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid slug regex"));

/// Runs of hyphens and whitespace collapse to a single hyphen.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid slug regex"));

/// Convert text to a URL-safe slug.
///
/// 1. Transliterate to ASCII and lower-case (`"Crème Brûlée"` → `"creme brulee"`)
/// 2. Apply `substitutions` in order, both sides lower-cased
/// 3. Unless a matching substitution asked to skip it, drop punctuation and
///    join words with `-`
///
/// Deterministic; uniqueness is not enforced.
pub fn slugify(text: &str, substitutions: &[SlugSubstitution]) -> String {
    let mut value = deunicode(text).to_lowercase();

    let mut cleanup = true;
    for rule in substitutions {
        let replaced = value.replace(&rule.from.to_lowercase(), &rule.to.to_lowercase());
        if replaced != value {
            cleanup &= !rule.skip;
        }
        value = replaced;
    }

    let value = if cleanup {
        let stripped = NON_WORD.replace_all(&value, "");
        SEPARATORS.replace_all(stripped.trim(), "-").into_owned()
    } else {
        value.trim().to_owned()
    };

    value.chars().filter(char::is_ascii).collect()
}

/// Slug for a source file: its base name with the final extension removed.
pub fn slugify_file_stem(path: &Path, substitutions: &[SlugSubstitution]) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    slugify(&stem, substitutions)
}
