use crate::core::calculator::day::day_total;
use crate::core::resolver::resolve_template;
use crate::errors::{AppError, AppResult};
use crate::models::day_schedule::DaySchedule;
use crate::models::recorded_day::RecordedDay;
use crate::models::weekday::WorkDay;
use crate::store::{Store, audit_quiet};
use crate::utils::date::WeekId;
use crate::utils::time::format_duration;
use chrono::NaiveDate;

/// Checkpoints given on the command line. `None` keeps the current value,
/// `Some("")` clears it.
#[derive(Debug, Clone, Default)]
pub struct DayInput {
    pub arrival: Option<String>,
    pub lunch_out: Option<String>,
    pub lunch_in: Option<String>,
    pub departure: Option<String>,
}

impl DayInput {
    pub fn apply_to(&self, schedule: &mut DaySchedule) {
        if let Some(v) = &self.arrival {
            schedule.arrival = v.clone();
        }
        if let Some(v) = &self.lunch_out {
            schedule.lunch_out = v.clone();
        }
        if let Some(v) = &self.lunch_in {
            schedule.lunch_in = v.clone();
        }
        if let Some(v) = &self.departure {
            schedule.departure = v.clone();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_none()
            && self.lunch_out.is_none()
            && self.lunch_in.is_none()
            && self.departure.is_none()
    }
}

/// A date as seen by `day show`: what was recorded, what was planned.
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub record: Option<RecordedDay>,
    pub planned: DaySchedule,
    pub expected: i64,
}

/// High-level business logic for recorded days.
pub struct DayLogic;

impl DayLogic {
    /// Planned schedule of a date according to its week's template.
    /// Week-ends have no plan.
    pub fn planned(store: &dyn Store, date: NaiveDate) -> DaySchedule {
        match WorkDay::of_date(date) {
            Some(day) => resolve_template(store, &WeekId::of(date)).day(day).clone(),
            None => DaySchedule::default(),
        }
    }

    /// Record (or overwrite) a day.
    ///
    /// Starting point: the existing record, else the planned schedule.
    /// Checkpoints in `input` override it. The total is computed here and
    /// stored with the record.
    pub fn save(store: &mut dyn Store, date: NaiveDate, input: &DayInput) -> AppResult<RecordedDay> {
        let mut schedule = match store.get_day(date)? {
            Some(existing) => existing.schedule,
            None => Self::planned(&*store, date),
        };

        input.apply_to(&mut schedule);

        let day = RecordedDay {
            date,
            total_minutes: day_total(&schedule),
            schedule,
        };

        store.put_day(&day)?;

        audit_quiet(
            &*store,
            "day_save",
            &day.date_str(),
            &format!("Recorded {}", format_duration(day.total_minutes)),
        );

        Ok(day)
    }

    pub fn show(store: &dyn Store, date: NaiveDate) -> AppResult<DayView> {
        let record = store.get_day(date)?;
        let planned = Self::planned(store, date);
        let expected = day_total(&planned);

        Ok(DayView {
            date,
            record,
            planned,
            expected,
        })
    }

    pub fn delete(store: &mut dyn Store, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if !store.delete_day(date)? {
            return Err(AppError::NoRecordForDate(date_str));
        }

        audit_quiet(&*store, "day_del", &date_str, "Deleted recorded day");

        Ok(())
    }
}
