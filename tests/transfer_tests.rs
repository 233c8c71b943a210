mod common;

use common::{date, temp_out, uniform_template};
use weeklog::db::pool::DbPool;
use weeklog::errors::AppError;
use weeklog::core::resolver::week_choice;
use weeklog::export::{ExportLogic, ImportLogic};
use weeklog::models::day_schedule::DaySchedule;
use weeklog::models::recorded_day::RecordedDay;
use weeklog::models::settings::{Settings, Theme};
use weeklog::models::template_choice::TemplateChoice;
use weeklog::models::weekly_template::WeeklyTemplate;
use weeklog::store::{MemoryStore, Store};
use weeklog::utils::date::WeekId;

/// Full document with an extra top-level key and a "default" association.
const LEGACY_DOC: &str = r#"{
  "journees": {
    "2026-03-02": {
      "date": "2026-03-02",
      "horaires": { "arrivee": "08:00", "sortieMidi": "12:00", "retourMidi": "13:00", "sortie": "17:00" },
      "totalMinutes": 480
    }
  },
  "planning": {
    "lundi":    { "arrivee": "08:00", "sortieMidi": "12:00", "retourMidi": "13:30", "sortie": "17:15" },
    "mardi":    { "arrivee": "08:00", "sortieMidi": "12:00", "retourMidi": "13:30", "sortie": "17:15" },
    "mercredi": { "arrivee": "08:00", "sortieMidi": "12:00", "retourMidi": "", "sortie": "" },
    "jeudi":    { "arrivee": "08:00", "sortieMidi": "12:00", "retourMidi": "13:30", "sortie": "17:15" },
    "vendredi": { "arrivee": "08:00", "sortieMidi": "12:00", "retourMidi": "13:30", "sortie": "17:15" }
  },
  "planningsSauvegardes": {},
  "associationsSemaines": { "S10-2026": "default" },
  "parametres": { "theme": "dark", "sauvegardeAuto": false, "pasMinutes": 10 },
  "exportDate": "2026-03-06T18:00:00.000Z"
}"#;

fn populated() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .put_day(&RecordedDay {
            date: date("2026-03-02"),
            schedule: DaySchedule::new("08:00", "12:00", "13:30", "17:15"),
            total_minutes: 465,
        })
        .unwrap();
    store.put_default_template(&uniform_template()).unwrap();
    store.put_template("short", &WeeklyTemplate::builtin()).unwrap();
    store.put_week_template("S10-2026", "short").unwrap();
    store
}

#[test]
fn export_then_import_restores_every_store() {
    let source = populated();
    let json = ExportLogic::to_json(&source).unwrap();

    let mut target = MemoryStore::new();
    target.put_template("stale", &uniform_template()).unwrap();

    let report = ImportLogic::import_str(&mut target, &json).unwrap();
    assert_eq!(report.days, Some(1));
    assert_eq!(report.templates, Some(1));
    assert_eq!(report.week_templates, Some(1));
    assert!(report.default_template);
    assert!(report.settings);

    assert_eq!(target.list_days().unwrap(), source.list_days().unwrap());
    assert_eq!(target.list_templates().unwrap(), source.list_templates().unwrap());
    assert_eq!(target.list_week_templates().unwrap(), source.list_week_templates().unwrap());
    assert_eq!(target.get_default_template().unwrap(), Some(uniform_template()));
    assert_eq!(target.get_settings().unwrap(), Some(Settings::default()));
}

#[test]
fn snapshot_uses_document_keys() {
    let json = ExportLogic::to_json(&populated()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(v["journees"]["2026-03-02"]["horaires"]["arrivee"].is_string());
    assert_eq!(v["journees"]["2026-03-02"]["totalMinutes"], 465);
    assert!(v["planning"]["lundi"].is_object());
    assert!(v["planningsSauvegardes"]["short"]["mercredi"].is_object());
    assert_eq!(v["associationsSemaines"]["S10-2026"], "short");
    assert_eq!(v["parametres"]["pasMinutes"], 5);
    assert_eq!(v["parametres"]["sauvegardeAuto"], true);
}

#[test]
fn default_template_is_exported_even_when_never_edited() {
    let json = ExportLogic::to_json(&MemoryStore::new()).unwrap();
    let snapshot = ImportLogic::parse(&json).unwrap();
    assert_eq!(snapshot.default_template, Some(WeeklyTemplate::builtin()));
}

#[test]
fn legacy_document_imports() {
    let mut store = MemoryStore::new();
    let report = ImportLogic::import_str(&mut store, LEGACY_DOC).unwrap();

    assert_eq!(report.days, Some(1));
    assert_eq!(store.get_day(date("2026-03-02")).unwrap().unwrap().total_minutes, 480);
    assert_eq!(store.get_default_template().unwrap(), Some(WeeklyTemplate::builtin()));

    // "default" is not an association
    assert_eq!(report.week_templates, Some(0));
    assert!(store.list_week_templates().unwrap().is_empty());

    let settings = store.get_settings().unwrap().unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.auto_save);
    assert_eq!(settings.step_minutes, 10);
}

#[test]
fn absent_sections_are_left_alone() {
    let mut store = populated();
    let doc = r#"{ "parametres": { "theme": "auto" } }"#;

    let report = ImportLogic::import_str(&mut store, doc).unwrap();
    assert!(report.settings);
    assert_eq!(report.days, None);

    assert_eq!(store.list_days().unwrap().len(), 1);
    assert_eq!(store.list_templates().unwrap().len(), 1);
    assert_eq!(store.get_week_template("S10-2026").unwrap(), Some("short".into()));

    // missing setting fields take their defaults
    let s = store.get_settings().unwrap().unwrap();
    assert_eq!(s.theme, Theme::Auto);
    assert!(s.auto_save);
    assert_eq!(s.step_minutes, 5);
}

#[test]
fn present_section_replaces_its_store() {
    let mut store = populated();
    let doc = r#"{ "journees": {}, "planningsSauvegardes": null }"#;

    let report = ImportLogic::import_str(&mut store, doc).unwrap();
    assert_eq!(report.days, Some(0));
    assert_eq!(report.templates, None);

    assert!(store.list_days().unwrap().is_empty());
    assert_eq!(store.list_templates().unwrap().len(), 1);
}

#[test]
fn malformed_document_changes_nothing() {
    let mut store = populated();
    let before = store.list_days().unwrap();

    let res = ImportLogic::import_str(&mut store, "{ \"journees\": [ }");
    assert!(matches!(res, Err(AppError::Import(_))));

    // valid JSON, but a record filed under another date
    let doc = r#"{
      "journees": {
        "2026-03-03": { "date": "2026-03-02", "horaires": {}, "totalMinutes": 10 }
      },
      "planningsSauvegardes": {}
    }"#;
    assert!(matches!(
        ImportLogic::import_str(&mut store, doc),
        Err(AppError::Import(_))
    ));

    assert_eq!(store.list_days().unwrap(), before);
    assert_eq!(store.list_templates().unwrap().len(), 1);
    assert!(store.audit_entries().is_empty());
}

#[test]
fn export_to_file_and_import_into_sqlite() {
    let out = temp_out("transfer_sqlite", "json");
    let source = populated();
    ExportLogic::export(&source, &out, false).unwrap();

    let mut pool = DbPool::in_memory().unwrap();
    ImportLogic::import_file(&mut pool, std::path::Path::new(&out)).unwrap();

    assert_eq!(pool.list_days().unwrap(), source.list_days().unwrap());
    assert_eq!(pool.list_templates().unwrap(), source.list_templates().unwrap());
    assert_eq!(pool.get_week_template("S10-2026").unwrap(), Some("short".into()));

    // overwriting needs --force
    ExportLogic::export(&source, &out, true).unwrap();
}

#[test]
fn export_requires_an_absolute_path() {
    assert!(ExportLogic::export(&MemoryStore::new(), "relative.json", true).is_err());
}

/// Document whose week keys carry the calendar year of the day.
fn calendar_year_doc(associations: serde_json::Value) -> String {
    serde_json::json!({
        "planningsSauvegardes": { "A": WeeklyTemplate::builtin() },
        "associationsSemaines": associations,
    })
    .to_string()
}

#[test]
fn calendar_year_keys_land_on_iso_weeks() {
    let mut store = MemoryStore::new();
    let doc = calendar_year_doc(serde_json::json!({ "S1-2025": "A", "S53-2021": "A" }));
    ImportLogic::import_str(&mut store, &doc).unwrap();

    let named = TemplateChoice::Named("A".into());

    // S1-2025 was written for early January 2025 and for 2025-12-29..31
    assert_eq!(week_choice(&store, &WeekId::of(date("2025-12-29"))), named);
    assert_eq!(week_choice(&store, &WeekId::of(date("2024-12-30"))), named);

    // 2021 has no week 53: the key came from 2021-01-01, ISO week 2020-W53
    assert_eq!(WeekId::of(date("2021-01-01")).to_string(), "S53-2020");
    assert_eq!(week_choice(&store, &WeekId::of(date("2021-01-01"))), named);
    assert_eq!(store.get_week_template("S53-2021").unwrap(), None);

    // mid-year keys are unchanged
    assert_eq!(week_choice(&store, &WeekId::of(date("2025-06-04"))), TemplateChoice::Default);
}

#[test]
fn stated_year_wins_over_neighbour_year() {
    let mut store = MemoryStore::new();
    let doc = calendar_year_doc(serde_json::json!({ "S1-2025": "A", "S1-2026": "B" }));
    ImportLogic::import_str(&mut store, &doc).unwrap();

    // 2026-W01 is named by both keys
    assert_eq!(store.get_week_template("S1-2026").unwrap(), Some("B".into()));
    assert_eq!(store.get_week_template("S1-2025").unwrap(), Some("A".into()));
}

#[test]
fn keys_naming_no_week_are_skipped() {
    let mut store = MemoryStore::new();
    let doc = calendar_year_doc(serde_json::json!({
        "S53-2023": "A",
        "week ten": "A",
        "S10-2026": "A",
    }));

    let report = ImportLogic::import_str(&mut store, &doc).unwrap();
    assert_eq!(report.week_templates, Some(1));
    assert_eq!(store.get_week_template("S10-2026").unwrap(), Some("A".into()));
}

#[test]
fn own_exports_keep_iso_keys() {
    let mut source = MemoryStore::new();
    source.put_template("A", &WeeklyTemplate::builtin()).unwrap();
    source.put_week_template("S1-2025", "A").unwrap();

    let json = ExportLogic::to_json(&source).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["isoWeekKeys"], true);

    let mut target = MemoryStore::new();
    ImportLogic::import_str(&mut target, &json).unwrap();

    // no copy on the week of 2025-12-29
    assert_eq!(target.list_week_templates().unwrap(), source.list_week_templates().unwrap());
}
