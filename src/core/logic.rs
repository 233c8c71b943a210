use crate::core::calculator::week::week_stats;
use crate::core::resolver::{resolve_template, week_choice};
use crate::models::recorded_day::RecordedDay;
use crate::models::week_stats::{WeekHistoryEntry, WeekSummary};
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::date::{WeekId, dates_of_week, monday_of_week};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub struct Core;

impl Core {
    /// Recorded days of the Monday–Friday window around `date`, keyed by date.
    /// An unreadable store yields an empty map.
    pub fn load_week_days(store: &dyn Store, date: NaiveDate) -> BTreeMap<NaiveDate, RecordedDay> {
        let dates = dates_of_week(date);
        match store.days_between(dates[0], dates[4]) {
            Ok(days) => days.into_iter().map(|d| (d.date, d)).collect(),
            Err(e) => {
                warning(format!("Cannot read recorded days ({}).", e));
                BTreeMap::new()
            }
        }
    }

    /// Week view for the week containing `date`: resolved template plus the
    /// per-day and weekly totals. Recomputed from the store on every call.
    pub fn week_summary(store: &dyn Store, date: NaiveDate) -> WeekSummary {
        let week_id = WeekId::of(date);
        let dates = dates_of_week(date);

        let template = resolve_template(store, &week_id);
        let choice = week_choice(store, &week_id);
        let recorded = Self::load_week_days(store, date);
        let stats = week_stats(&dates, &template, &recorded);

        WeekSummary {
            week_id,
            monday: dates[0],
            friday: dates[4],
            choice,
            template,
            stats,
        }
    }

    /// Most recent weeks with at least one recorded day, newest first.
    /// Week-end records count toward their week.
    pub fn week_history(store: &dyn Store, limit: usize) -> Vec<WeekHistoryEntry> {
        let days = store.list_days().unwrap_or_else(|e| {
            warning(format!("Cannot read recorded days ({}).", e));
            Vec::new()
        });

        let mut weeks: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();
        for d in &days {
            let entry = weeks.entry(monday_of_week(d.date)).or_insert((0, 0));
            entry.0 += d.total_minutes;
            entry.1 += 1;
        }

        weeks
            .into_iter()
            .rev()
            .take(limit)
            .map(|(monday, (total, count))| WeekHistoryEntry {
                week_id: WeekId::of(monday),
                monday,
                total_minutes: total,
                days_recorded: count,
            })
            .collect()
    }
}
