use super::template_choice::TemplateChoice;
use super::weekday::WorkDay;
use super::weekly_template::WeeklyTemplate;
use crate::utils::date::WeekId;
use chrono::NaiveDate;
use serde::Serialize;

/// Sign class of a difference, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffClass {
    Positive,
    Negative,
    Neutral,
}

impl DiffClass {
    pub fn of(minutes: i64) -> Self {
        if minutes > 0 {
            DiffClass::Positive
        } else if minutes < 0 {
            DiffClass::Negative
        } else {
            DiffClass::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub weekday: WorkDay,
    pub expected: i64,
    pub actual: i64,
    pub difference: i64,
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekStats {
    pub days: Vec<DayStats>,
    pub total_actual: i64,
    pub total_expected: i64,
    pub total_difference: i64,
    pub days_recorded: usize,
}

/// Everything the week view needs.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub week_id: WeekId,
    pub monday: NaiveDate,
    pub friday: NaiveDate,
    pub choice: TemplateChoice,
    pub template: WeeklyTemplate,
    pub stats: WeekStats,
}

/// One line of the weekly history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekHistoryEntry {
    pub week_id: WeekId,
    pub monday: NaiveDate,
    pub total_minutes: i64,
    pub days_recorded: usize,
}
