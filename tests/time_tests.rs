mod common;

use common::full_day;
use weeklog::core::calculator::day::{day_total, template_total};
use weeklog::models::day_schedule::DaySchedule;
use weeklog::models::weekly_template::WeeklyTemplate;
use weeklog::utils::time::{format_difference, format_duration, parse_checkpoint, to_minutes};

#[test]
fn to_minutes_parses_hh_mm() {
    assert_eq!(to_minutes("08:30"), 510);
    assert_eq!(to_minutes("00:00"), 0);
    assert_eq!(to_minutes("17:15"), 1035);
    assert_eq!(to_minutes("08:00:00"), 480);
    assert_eq!(to_minutes("12:30:45"), 750);
}

#[test]
fn to_minutes_is_lenient() {
    assert_eq!(to_minutes(""), 0);
    assert_eq!(to_minutes("noon"), 0);
    assert_eq!(to_minutes("ab:cd"), 0);
    // no range check
    assert_eq!(to_minutes("25:90"), 1590);
}

#[test]
fn full_day_total() {
    assert_eq!(day_total(&full_day()), 465);
}

#[test]
fn half_day_total() {
    let s = DaySchedule::half_day("08:00", "12:00");
    assert_eq!(day_total(&s), 240);
}

#[test]
fn afternoon_needs_both_ends() {
    let only_lunch_in = DaySchedule::new("08:00", "12:00", "13:00", "");
    let only_departure = DaySchedule::new("08:00", "12:00", "", "17:00");
    assert_eq!(day_total(&only_lunch_in), 240);
    assert_eq!(day_total(&only_departure), 240);
}

#[test]
fn reversed_checkpoints_clamp_to_zero() {
    let s = DaySchedule::new("12:00", "08:00", "", "");
    assert_eq!(day_total(&s), 0);

    let s = DaySchedule::new("17:00", "12:00", "13:00", "12:00");
    assert_eq!(day_total(&s), 0);
}

#[test]
fn empty_schedule_is_zero() {
    assert_eq!(day_total(&DaySchedule::default()), 0);
}

#[test]
fn builtin_template_total() {
    // 4 × 465 + 240
    assert_eq!(template_total(&WeeklyTemplate::builtin()), 2100);
}

#[test]
fn duration_formatting() {
    assert_eq!(format_duration(465), "7h45");
    assert_eq!(format_duration(0), "0h00");
    assert_eq!(format_duration(-65), "-1h05");
    assert_eq!(format_duration(2325), "38h45");
}

#[test]
fn difference_formatting() {
    assert_eq!(format_difference(30), "+0h30");
    assert_eq!(format_difference(0), "0h00");
    assert_eq!(format_difference(-1845), "-30h45");
}

#[test]
fn checkpoint_validation() {
    assert_eq!(parse_checkpoint("07:30").unwrap(), "07:30");
    assert_eq!(parse_checkpoint(" 17:15 ").unwrap(), "17:15");
    assert_eq!(parse_checkpoint("").unwrap(), "");
    assert_eq!(parse_checkpoint("--:--").unwrap(), "");
    assert!(parse_checkpoint("25:00").is_err());
    assert!(parse_checkpoint("noon").is_err());
}
