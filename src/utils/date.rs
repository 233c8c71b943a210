//! Calendar helpers: ISO weeks, week identifiers and the Monday–Friday window.

use crate::errors::{AppError, AppResult};
use crate::models::weekday::WorkDay;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Date argument from the CLI: `YYYY-MM-DD` or `today`.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// ISO-8601 week number (1..=53): weeks start on Monday and week 1 holds
/// the first Thursday of the year.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

pub fn week_id(date: NaiveDate) -> WeekId {
    WeekId::of(date)
}

pub fn weekday_of(date: NaiveDate) -> Option<WorkDay> {
    WorkDay::of_date(date)
}

/// Monday through Friday of the week containing `date`.
pub fn dates_of_week(date: NaiveDate) -> [NaiveDate; 5] {
    let monday = monday_of_week(date);
    WorkDay::ALL.map(|d| {
        monday
            .checked_add_days(Days::new(u64::from(d.offset())))
            .unwrap_or(monday)
    })
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    weekday_of(date).is_none()
}

/// Same weekday, `weeks` weeks later (negative goes back).
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    let days = Days::new(weeks.unsigned_abs() * 7);
    let shifted = if weeks >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

/// Week identifier `S<week>-<year>`, e.g. `S1-2026`.
///
/// `year` is the ISO week-year, so every day of a week shares one identifier
/// even when the week straddles New Year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId {
    pub year: i32,
    pub week: u32,
}

impl WeekId {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, chrono::Weekday::Mon)
    }

    /// Read a key written as `S<iso week>-<calendar year of some day>`.
    ///
    /// Around New Year such a key is ambiguous: `S1-2025` was written both
    /// for 2025-01-02 (ISO week 2025-W01) and for 2025-12-30 (2026-W01).
    pub fn from_calendar_key(s: &str) -> AppResult<CalendarKeyReadings> {
        let (week, year) = parse_key(s)?;

        let stated = Self { year, week };
        let stated = stated.monday().map(|_| stated);

        // neighbour-year weeks with at least one day in `year`
        let spilled: Vec<Self> = [year - 1, year + 1]
            .into_iter()
            .map(|y| Self { year: y, week })
            .filter(|id| {
                id.monday().is_some_and(|monday| {
                    (0..7).any(|i| {
                        monday
                            .checked_add_days(Days::new(i))
                            .is_some_and(|d| d.year() == year)
                    })
                })
            })
            .collect();

        if stated.is_none() && spilled.is_empty() {
            return Err(AppError::InvalidWeekId(s.to_string()));
        }

        Ok(CalendarKeyReadings { stated, spilled })
    }
}

/// ISO weeks a calendar-year key may refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarKeyReadings {
    /// Same number and year, when that ISO week exists.
    pub stated: Option<WeekId>,
    /// Last week of the previous ISO year or first week of the next one.
    pub spilled: Vec<WeekId>,
}

/// `S<week>-<year>` split into its numbers, week in 1..=53.
fn parse_key(s: &str) -> AppResult<(u32, i32)> {
    let err = || AppError::InvalidWeekId(s.to_string());

    let body = s.trim().strip_prefix('S').ok_or_else(err)?;
    let (week, year) = body.split_once('-').ok_or_else(err)?;
    let week: u32 = week.parse().map_err(|_| err())?;
    let year: i32 = year.parse().map_err(|_| err())?;

    if !(1..=53).contains(&week) {
        return Err(err());
    }

    Ok((week, year))
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}-{}", self.week, self.year)
    }
}

impl FromStr for WeekId {
    type Err = AppError;

    /// Strict ISO form; `S53-<year>` only for years with 53 weeks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, year) = parse_key(s)?;
        let id = Self { year, week };
        match id.monday() {
            Some(_) => Ok(id),
            None => Err(AppError::InvalidWeekId(s.to_string())),
        }
    }
}
