mod common;

use common::{date, uniform_template};
use std::collections::BTreeMap;
use weeklog::core::day::{DayInput, DayLogic};
use weeklog::core::template::TemplateLogic;
use weeklog::core::week::WeekLogic;
use weeklog::db::migrate::{applied_versions, run_pending_migrations, table_exists};
use weeklog::db::pool::DbPool;
use weeklog::db::queries::load_log;
use weeklog::errors::AppError;
use weeklog::models::day_schedule::DaySchedule;
use weeklog::models::recorded_day::RecordedDay;
use weeklog::models::settings::{Settings, Theme};
use weeklog::models::template_choice::TemplateChoice;
use weeklog::models::weekday::WorkDay;
use weeklog::models::weekly_template::WeeklyTemplate;
use weeklog::store::{MemoryStore, Store};

fn day(d: &str, minutes: i64) -> RecordedDay {
    RecordedDay {
        date: date(d),
        schedule: DaySchedule::new("08:00", "12:00", "13:30", "17:15"),
        total_minutes: minutes,
    }
}

// ---------------------------
// SQLite store
// ---------------------------

#[test]
fn schema_is_created_once() {
    let pool = DbPool::in_memory().unwrap();
    for t in ["days", "default_template", "templates", "week_templates", "settings", "log"] {
        assert!(table_exists(&pool.conn, t).unwrap(), "missing table {t}");
    }

    let first = applied_versions(&pool.conn).unwrap();
    assert_eq!(run_pending_migrations(&pool.conn).unwrap(), 0);
    assert_eq!(applied_versions(&pool.conn).unwrap(), first);
    assert_eq!(first.len(), 2);
}

#[test]
fn sqlite_days() {
    let mut pool = DbPool::in_memory().unwrap();

    pool.put_day(&day("2026-03-03", 465)).unwrap();
    pool.put_day(&day("2026-03-02", 480)).unwrap();
    pool.put_day(&day("2026-03-10", 400)).unwrap();

    assert_eq!(pool.get_day(date("2026-03-02")).unwrap(), Some(day("2026-03-02", 480)));
    assert_eq!(pool.get_day(date("2026-03-04")).unwrap(), None);

    // overwrite
    pool.put_day(&day("2026-03-02", 500)).unwrap();
    assert_eq!(pool.get_day(date("2026-03-02")).unwrap().unwrap().total_minutes, 500);

    let all: Vec<_> = pool.list_days().unwrap().iter().map(|d| d.date).collect();
    assert_eq!(all, vec![date("2026-03-02"), date("2026-03-03"), date("2026-03-10")]);

    let week = pool
        .days_between(date("2026-03-02"), date("2026-03-06"))
        .unwrap();
    assert_eq!(week.len(), 2);

    assert!(pool.delete_day(date("2026-03-03")).unwrap());
    assert!(!pool.delete_day(date("2026-03-03")).unwrap());

    pool.replace_days(&[day("2026-04-01", 10)]).unwrap();
    assert_eq!(pool.list_days().unwrap(), vec![day("2026-04-01", 10)]);
}

#[test]
fn sqlite_templates_and_associations() {
    let mut pool = DbPool::in_memory().unwrap();

    assert_eq!(pool.get_default_template().unwrap(), None);
    pool.put_default_template(&uniform_template()).unwrap();
    pool.put_default_template(&WeeklyTemplate::builtin()).unwrap();
    assert_eq!(pool.get_default_template().unwrap(), Some(WeeklyTemplate::builtin()));

    pool.put_template("summer", &uniform_template()).unwrap();
    pool.put_template("winter", &WeeklyTemplate::builtin()).unwrap();
    assert_eq!(pool.get_template("summer").unwrap(), Some(uniform_template()));
    assert_eq!(
        pool.list_templates().unwrap().keys().cloned().collect::<Vec<_>>(),
        vec!["summer".to_string(), "winter".to_string()]
    );
    assert!(pool.delete_template("winter").unwrap());
    assert!(!pool.delete_template("winter").unwrap());

    pool.put_week_template("S10-2026", "summer").unwrap();
    pool.put_week_template("S10-2026", "winter").unwrap();
    assert_eq!(pool.get_week_template("S10-2026").unwrap(), Some("winter".into()));
    assert!(pool.delete_week_template("S10-2026").unwrap());
    assert_eq!(pool.get_week_template("S10-2026").unwrap(), None);

    let mut assoc = BTreeMap::new();
    assoc.insert("S1-2026".to_string(), "summer".to_string());
    pool.replace_week_templates(&assoc).unwrap();
    assert_eq!(pool.list_week_templates().unwrap(), assoc);
}

#[test]
fn sqlite_settings() {
    let mut pool = DbPool::in_memory().unwrap();
    assert_eq!(pool.get_settings().unwrap(), None);

    let s = Settings {
        theme: Theme::Dark,
        auto_save: false,
        step_minutes: 15,
    };
    pool.put_settings(&s).unwrap();
    assert_eq!(pool.get_settings().unwrap(), Some(s));
}

#[test]
fn corrupt_template_is_reported() {
    let pool = DbPool::in_memory().unwrap();
    pool.conn
        .execute(
            "INSERT INTO templates (name, planning, updated_at) VALUES ('bad', 'not json', '')",
            [],
        )
        .unwrap();

    match pool.get_template("bad") {
        Err(AppError::CorruptRecord { store, .. }) => assert_eq!(store, "templates"),
        other => panic!("expected a corrupt record error, got {other:?}"),
    }
}

#[test]
fn operations_are_audited() {
    let mut pool = DbPool::in_memory().unwrap();
    DayLogic::save(&mut pool, date("2026-03-02"), &DayInput::default()).unwrap();
    DayLogic::delete(&mut pool, date("2026-03-02")).unwrap();

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, vec!["day_save".to_string(), "day_del".to_string()]);
}

// ---------------------------
// Day logic
// ---------------------------

#[test]
fn new_day_starts_from_the_template() {
    let mut store = MemoryStore::new();

    // builtin Wednesday is a half-day
    let wed = DayLogic::save(&mut store, date("2026-03-04"), &DayInput::default()).unwrap();
    assert_eq!(wed.schedule, DaySchedule::half_day("08:00", "12:00"));
    assert_eq!(wed.total_minutes, 240);

    let thu = DayLogic::save(&mut store, date("2026-03-05"), &DayInput::default()).unwrap();
    assert_eq!(thu.total_minutes, 465);
}

#[test]
fn existing_record_wins_over_template() {
    let mut store = MemoryStore::new();
    let first = DayInput {
        arrival: Some("07:00".into()),
        ..DayInput::default()
    };
    DayLogic::save(&mut store, date("2026-03-02"), &first).unwrap();

    let second = DayInput {
        departure: Some("18:15".into()),
        ..DayInput::default()
    };
    let d = DayLogic::save(&mut store, date("2026-03-02"), &second).unwrap();

    assert_eq!(d.schedule, DaySchedule::new("07:00", "12:00", "13:30", "18:15"));
    assert_eq!(d.total_minutes, 300 + 285);
}

#[test]
fn clearing_the_afternoon() {
    let mut store = MemoryStore::new();
    let input = DayInput {
        lunch_in: Some(String::new()),
        departure: Some(String::new()),
        ..DayInput::default()
    };
    let d = DayLogic::save(&mut store, date("2026-03-02"), &input).unwrap();
    assert_eq!(d.total_minutes, 240);
}

#[test]
fn weekend_day_starts_empty() {
    let mut store = MemoryStore::new();
    let input = DayInput {
        arrival: Some("09:00".into()),
        lunch_out: Some("11:30".into()),
        ..DayInput::default()
    };
    let d = DayLogic::save(&mut store, date("2026-03-07"), &input).unwrap();
    assert_eq!(d.schedule, DaySchedule::half_day("09:00", "11:30"));
    assert_eq!(d.total_minutes, 150);
}

#[test]
fn show_and_delete() {
    let mut store = MemoryStore::new();

    let view = DayLogic::show(&store, date("2026-03-02")).unwrap();
    assert!(view.record.is_none());
    assert_eq!(view.expected, 465);

    DayLogic::save(&mut store, date("2026-03-02"), &DayInput::default()).unwrap();
    let view = DayLogic::show(&store, date("2026-03-02")).unwrap();
    assert_eq!(view.record.map(|r| r.total_minutes), Some(465));

    DayLogic::delete(&mut store, date("2026-03-02")).unwrap();
    assert!(matches!(
        DayLogic::delete(&mut store, date("2026-03-02")),
        Err(AppError::NoRecordForDate(_))
    ));

    let ops: Vec<String> = store.audit_entries().into_iter().map(|(op, _, _)| op).collect();
    assert_eq!(ops, vec!["day_save".to_string(), "day_del".to_string()]);
}

// ---------------------------
// Template and week logic
// ---------------------------

#[test]
fn default_keyword() {
    assert_eq!(TemplateLogic::choice_from_arg(None), TemplateChoice::Default);
    assert_eq!(TemplateLogic::choice_from_arg(Some("DEFAULT")), TemplateChoice::Default);
    assert_eq!(
        TemplateLogic::choice_from_arg(Some("summer")),
        TemplateChoice::Named("summer".into())
    );

    assert!(matches!(
        TemplateLogic::validate_name("default"),
        Err(AppError::ReservedTemplateName(_))
    ));
    assert!(TemplateLogic::validate_name("  ").is_err());
    assert_eq!(TemplateLogic::validate_name(" summer ").unwrap(), "summer");
}

#[test]
fn edit_default_template_day() {
    let mut store = MemoryStore::new();
    let input = DayInput {
        lunch_in: Some("13:00".into()),
        departure: Some("16:00".into()),
        ..DayInput::default()
    };

    let t = TemplateLogic::edit_day(&mut store, &TemplateChoice::Default, WorkDay::Wednesday, &input)
        .unwrap();

    assert_eq!(t.wednesday, DaySchedule::new("08:00", "12:00", "13:00", "16:00"));
    assert_eq!(store.get_default_template().unwrap(), Some(t.clone()));
    assert_eq!(TemplateLogic::weekly_total(&t), 4 * 465 + 420);
}

#[test]
fn edit_missing_named_template_fails() {
    let mut store = MemoryStore::new();
    let res = TemplateLogic::edit_day(
        &mut store,
        &TemplateChoice::Named("nope".into()),
        WorkDay::Monday,
        &DayInput::default(),
    );
    assert!(matches!(res, Err(AppError::TemplateNotFound(_))));
}

#[test]
fn save_list_delete_and_reset() {
    let mut store = MemoryStore::new();
    store.put_default_template(&uniform_template()).unwrap();

    TemplateLogic::save_copy(&mut store, "full", &TemplateChoice::Default).unwrap();
    TemplateLogic::save_copy(&mut store, "copy", &TemplateChoice::Named("full".into())).unwrap();

    assert_eq!(
        TemplateLogic::list(&store).unwrap(),
        vec![("copy".to_string(), 2325), ("full".to_string(), 2325)]
    );

    assert!(matches!(
        TemplateLogic::save_copy(&mut store, "default", &TemplateChoice::Default),
        Err(AppError::ReservedTemplateName(_))
    ));

    TemplateLogic::delete(&mut store, "copy").unwrap();
    assert!(matches!(
        TemplateLogic::delete(&mut store, "copy"),
        Err(AppError::TemplateNotFound(_))
    ));

    let builtin = TemplateLogic::reset_default(&mut store).unwrap();
    assert_eq!(builtin, WeeklyTemplate::builtin());
    assert_eq!(store.get_default_template().unwrap(), Some(WeeklyTemplate::builtin()));
}

#[test]
fn assign_week() {
    let mut store = MemoryStore::new();
    store.put_template("full", &uniform_template()).unwrap();

    let id = WeekLogic::assign(&mut store, date("2026-03-04"), &TemplateChoice::Named("full".into()))
        .unwrap();
    assert_eq!(id.to_string(), "S10-2026");
    assert_eq!(TemplateLogic::weeks_using(&store, "full").unwrap(), vec!["S10-2026".to_string()]);

    assert!(matches!(
        WeekLogic::assign(&mut store, date("2026-03-04"), &TemplateChoice::Named("nope".into())),
        Err(AppError::TemplateNotFound(_))
    ));

    WeekLogic::assign(&mut store, date("2026-03-06"), &TemplateChoice::Default).unwrap();
    assert!(store.list_week_templates().unwrap().is_empty());
}

#[test]
fn deleted_template_keeps_its_weeks_on_default() {
    let mut store = MemoryStore::new();
    store.put_template("full", &uniform_template()).unwrap();
    WeekLogic::assign(&mut store, date("2026-03-04"), &TemplateChoice::Named("full".into()))
        .unwrap();

    TemplateLogic::delete(&mut store, "full").unwrap();

    // association stays, resolution falls back
    assert_eq!(store.get_week_template("S10-2026").unwrap(), Some("full".into()));
    let view = DayLogic::show(&store, date("2026-03-04")).unwrap();
    assert_eq!(view.expected, 240);
}
