//! Logging utilities with colored output.
//!
//! This module provides the `log!` macro for formatted terminal output with
//! colored prefixes. Messages go to stderr so that `tola-data build` can print
//! the generated context on stdout.
//!
//! # Example
//!
//! ```ignore
//! log!("data"; "loading {} sources", count);
//! log!("warn"; "Missing data: {}", name);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stderr},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for `[`, `]`, and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Single-line progress messages are truncated to fit the terminal width.
/// Warnings, errors and multi-line messages are printed as-is.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    execute!(stderr, Clear(ClearType::UntilNewLine)).ok();

    let message = fit_message(&module_lower, message, get_terminal_width() as usize);

    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// The part of `message` to print on a terminal `width` columns wide.
#[inline]
fn fit_message<'a>(module_lower: &str, message: &'a str, width: usize) -> &'a str {
    if message.contains('\n') || matches!(module_lower, "error" | "warn") {
        return message;
    }
    let max_msg_len = width.saturating_sub(calc_prefix_len(module_lower.len()));
    truncate_str(message, max_msg_len)
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "data" => prefix.bright_blue().bold(),
        "cache" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        "warn" => prefix.bright_magenta().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within max_len bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len() {
        // "data" -> "[data] " = 4 + 2 + 1 = 7
        assert_eq!(calc_prefix_len(4), 7);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_short_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "你好" is 6 bytes, byte 4 is inside the second char
        assert_eq!(truncate_str("你好", 4), "你");
        assert_eq!(truncate_str("a你b", 3), "a");
    }

    #[test]
    fn test_fit_message_truncates_progress_only() {
        let long = "Could not process data/team/alice.md: IO error when reading file";
        assert_eq!(fit_message("data", long, 20), "Could not pro");
        assert_eq!(fit_message("error", long, 20), long);
        assert_eq!(fit_message("warn", long, 20), long);
        assert_eq!(fit_message("data", "a\nb", 3), "a\nb");
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        let prefix = colorize_prefix("Data", "data");
        assert!(prefix.to_string().contains("[Data]"));
    }
}
