//! Time utilities: "HH:MM" parsing, minute offsets and duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes since midnight of an "HH:MM" string.
///
/// Empty or unparsable input counts as 0, seconds are ignored ("08:00:00"
/// gives 480). Values are not range-checked: "25:90" gives 1590.
pub fn to_minutes(hhmm: &str) -> i64 {
    let mut fields = hhmm.trim().split(':');
    let (Some(h), Some(m)) = (fields.next(), fields.next()) else {
        return 0;
    };

    match (h.trim().parse::<i64>(), m.trim().parse::<i64>()) {
        (Ok(h), Ok(m)) => h * 60 + m,
        _ => 0,
    }
}

/// Validate a checkpoint typed on the command line.
/// Empty input is accepted and means "absent"; anything else must be HH:MM.
pub fn parse_checkpoint(input: &str) -> AppResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "--:--" {
        return Ok(String::new());
    }

    let t = parse_time(trimmed).ok_or_else(|| AppError::InvalidTime(input.to_string()))?;
    Ok(t.format("%H:%M").to_string())
}

pub fn parse_optional_checkpoint(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| parse_checkpoint(s)).transpose()
}

/// "7h45", "-1h05", "0h00".
pub fn format_duration(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{}h{:02}", sign, m / 60, m % 60)
}

/// Like [`format_duration`] with an explicit "+" on positive values.
pub fn format_difference(minutes: i64) -> String {
    let sign = if minutes > 0 { "+" } else { "" };
    format!("{}{}", sign, format_duration(minutes))
}
