use crate::models::day_schedule::DaySchedule;
use crate::models::weekly_template::WeeklyTemplate;
use crate::utils::time::to_minutes;

/// Worked minutes of one day.
///
/// Morning is `lunch_out - arrival`. The afternoon (`departure - lunch_in`)
/// only counts when both of its ends are filled in. The result never goes
/// below zero, so reversed or malformed entries cannot drag a weekly sum down.
pub fn day_total(schedule: &DaySchedule) -> i64 {
    let morning = to_minutes(&schedule.lunch_out) - to_minutes(&schedule.arrival);

    let afternoon = if schedule.has_afternoon() {
        to_minutes(&schedule.departure) - to_minutes(&schedule.lunch_in)
    } else {
        0
    };

    (morning + afternoon).max(0)
}

/// Expected minutes for a whole week of the template.
pub fn template_total(template: &WeeklyTemplate) -> i64 {
    template.days().map(|(_, d)| day_total(d)).sum()
}
