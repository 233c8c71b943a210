use crate::core::calculator::day::day_total;
use crate::models::recorded_day::RecordedDay;
use crate::models::week_stats::{DayStats, WeekStats};
use crate::models::weekday::WorkDay;
use crate::models::weekly_template::WeeklyTemplate;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Compare a week of recorded days against its template.
///
/// Days without a record count as 0 actual minutes. A date falling on a
/// week-end (not produced by `dates_of_week`) expects 0 minutes.
pub fn week_stats(
    week_dates: &[NaiveDate; 5],
    template: &WeeklyTemplate,
    recorded: &BTreeMap<NaiveDate, RecordedDay>,
) -> WeekStats {
    let days: Vec<DayStats> = week_dates
        .iter()
        .zip(WorkDay::ALL)
        .map(|(&date, slot)| {
            let weekday = WorkDay::of_date(date).unwrap_or(slot);
            let expected = WorkDay::of_date(date)
                .map(|d| day_total(template.day(d)))
                .unwrap_or(0);
            let record = recorded.get(&date);
            let actual = record.map(|r| r.total_minutes).unwrap_or(0);

            DayStats {
                date,
                weekday,
                expected,
                actual,
                difference: actual - expected,
                recorded: record.is_some(),
            }
        })
        .collect();

    let total_actual: i64 = days.iter().map(|d| d.actual).sum();
    let total_expected: i64 = days.iter().map(|d| d.expected).sum();
    let days_recorded = days.iter().filter(|d| d.recorded).count();

    WeekStats {
        days,
        total_actual,
        total_expected,
        total_difference: total_actual - total_expected,
        days_recorded,
    }
}
