//! Formatting utilities used for CLI outputs.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Printed width of a cell, ignoring ANSI sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// "Monday 19 October 2026"
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%A %-d %B %Y").to_string()
}

/// "13 October – 17 October 2026"
pub fn format_week_range(monday: NaiveDate, friday: NaiveDate) -> String {
    format!(
        "{} – {}",
        monday.format("%-d %B"),
        friday.format("%-d %B %Y")
    )
}

/// Horizontal rule made of the configured separator.
pub fn separator_line(sep: &str, width: usize) -> String {
    let unit = if sep.is_empty() { "-" } else { sep };
    unit.repeat(width)
}
