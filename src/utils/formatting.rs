//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Columns taken on screen, ignoring colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Percentage with one decimal, e.g. `85.3%`.
pub fn pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Hours with one decimal, e.g. `7.0h`.
pub fn hours(value: f64) -> String {
    format!("{value:.1}h")
}

/// Raw user number in its shortest form: `8`, `7.5`.
pub fn number(value: f64) -> String {
    value.to_string()
}
