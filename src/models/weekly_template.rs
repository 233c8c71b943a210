use super::day_schedule::DaySchedule;
use super::weekday::WorkDay;
use serde::{Deserialize, Serialize};

/// Expected schedule for the five working days of a week.
///
/// Keys on the wire are the day names of the export document
/// (`lundi` … `vendredi`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTemplate {
    #[serde(rename = "lundi", alias = "monday", default)]
    pub monday: DaySchedule,
    #[serde(rename = "mardi", alias = "tuesday", default)]
    pub tuesday: DaySchedule,
    #[serde(rename = "mercredi", alias = "wednesday", default)]
    pub wednesday: DaySchedule,
    #[serde(rename = "jeudi", alias = "thursday", default)]
    pub thursday: DaySchedule,
    #[serde(rename = "vendredi", alias = "friday", default)]
    pub friday: DaySchedule,
}

impl WeeklyTemplate {
    /// Same schedule on all five days.
    pub fn uniform(day: DaySchedule) -> Self {
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day,
        }
    }

    /// Factory template used until the user stores a default of their own:
    /// 08:00-12:00 / 13:30-17:15, Wednesday afternoon off.
    pub fn builtin() -> Self {
        let full = DaySchedule::new("08:00", "12:00", "13:30", "17:15");
        Self {
            wednesday: DaySchedule::half_day("08:00", "12:00"),
            ..Self::uniform(full)
        }
    }

    pub fn day(&self, day: WorkDay) -> &DaySchedule {
        match day {
            WorkDay::Monday => &self.monday,
            WorkDay::Tuesday => &self.tuesday,
            WorkDay::Wednesday => &self.wednesday,
            WorkDay::Thursday => &self.thursday,
            WorkDay::Friday => &self.friday,
        }
    }

    pub fn day_mut(&mut self, day: WorkDay) -> &mut DaySchedule {
        match day {
            WorkDay::Monday => &mut self.monday,
            WorkDay::Tuesday => &mut self.tuesday,
            WorkDay::Wednesday => &mut self.wednesday,
            WorkDay::Thursday => &mut self.thursday,
            WorkDay::Friday => &mut self.friday,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = (WorkDay, &DaySchedule)> {
        WorkDay::ALL.into_iter().map(move |d| (d, self.day(d)))
    }
}
