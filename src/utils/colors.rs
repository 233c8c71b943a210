/// ANSI color helper utilities for terminal output.
use crate::models::week_stats::DiffClass;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder shown for an absent checkpoint.
pub const EMPTY_TIME: &str = "--:--";

/// Difference color:
/// \>0 → green
/// \<0 → red
/// 0 → reset (ties are neutral, not a success)
pub fn color_for_difference(class: DiffClass) -> &'static str {
    match class {
        DiffClass::Positive => GREEN,
        DiffClass::Negative => RED,
        DiffClass::Neutral => RESET,
    }
}

/// Wrap a rendered difference in the color of its sign.
pub fn colorize_difference(value: &str, minutes: i64) -> String {
    let color = color_for_difference(DiffClass::of(minutes));
    format!("{color}{value}{RESET}")
}

/// Checkpoint cell: grey placeholder when empty, plain value otherwise.
pub fn colorize_checkpoint(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{EMPTY_TIME}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey out values that carry no information ("0h00", "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "0h00" || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
