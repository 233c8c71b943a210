use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// A working day of the week. Saturday and Sunday have no schedule slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WorkDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl WorkDay {
    pub const ALL: [WorkDay; 5] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
    ];

    /// Short code used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            WorkDay::Monday => "mon",
            WorkDay::Tuesday => "tue",
            WorkDay::Wednesday => "wed",
            WorkDay::Thursday => "thu",
            WorkDay::Friday => "fri",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkDay::Monday => "Monday",
            WorkDay::Tuesday => "Tuesday",
            WorkDay::Wednesday => "Wednesday",
            WorkDay::Thursday => "Thursday",
            WorkDay::Friday => "Friday",
        }
    }

    /// Zero-based offset from Monday.
    pub fn offset(&self) -> u32 {
        match self {
            WorkDay::Monday => 0,
            WorkDay::Tuesday => 1,
            WorkDay::Wednesday => 2,
            WorkDay::Thursday => 3,
            WorkDay::Friday => 4,
        }
    }

    /// Helper: parse a CLI code or full name (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "mon" | "monday" => Some(WorkDay::Monday),
            "tue" | "tuesday" => Some(WorkDay::Tuesday),
            "wed" | "wednesday" => Some(WorkDay::Wednesday),
            "thu" | "thursday" => Some(WorkDay::Thursday),
            "fri" | "friday" => Some(WorkDay::Friday),
            _ => None,
        }
    }

    pub fn from_chrono(day: Weekday) -> Option<Self> {
        match day {
            Weekday::Mon => Some(WorkDay::Monday),
            Weekday::Tue => Some(WorkDay::Tuesday),
            Weekday::Wed => Some(WorkDay::Wednesday),
            Weekday::Thu => Some(WorkDay::Thursday),
            Weekday::Fri => Some(WorkDay::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    /// Working day of a calendar date, `None` on week-ends.
    pub fn of_date(date: NaiveDate) -> Option<Self> {
        Self::from_chrono(date.weekday())
    }
}
