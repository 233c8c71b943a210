use super::day_schedule::DaySchedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours actually worked on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedDay {
    pub date: NaiveDate, // ⇔ days.date (TEXT "YYYY-MM-DD")
    #[serde(rename = "horaires", alias = "schedule")]
    pub schedule: DaySchedule,
    #[serde(rename = "totalMinutes", alias = "total_minutes")]
    pub total_minutes: i64, // computed at save time, trusted afterwards
}

impl RecordedDay {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
