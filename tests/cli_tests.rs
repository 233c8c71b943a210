use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_db, setup_test_db, temp_out, wl};

/// `weeklog --db <db> --test <args…>`
fn run(db: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    wl().args(["--db", db, "--test"]).args(args).assert()
}

#[test]
fn init_creates_the_schema() {
    let db = setup_test_db("cli_init");
    init_db(&db);

    assert!(Path::new(&db).exists());
    run(&db, &["db", "--info"]).success().stdout(contains("days"));
    run(&db, &["db", "--check"])
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn record_and_show_a_day() {
    let db = setup_test_db("cli_day");
    init_db(&db);

    run(&db, &["day", "set", "2026-03-02"])
        .success()
        .stdout(contains("2026-03-02 recorded: 7h45").and(contains("S10-2026")));

    run(&db, &["day", "set", "2026-03-02", "--departure", "18:15"])
        .success()
        .stdout(contains("8h45"));

    run(&db, &["day", "show", "2026-03-02"])
        .success()
        .stdout(contains("Recorded").and(contains("18:15")).and(contains("+1h00")));

    run(&db, &["day", "show", "2026-03-03"])
        .success()
        .stdout(contains("Nothing recorded"));
}

#[test]
fn invalid_input_is_rejected() {
    let db = setup_test_db("cli_invalid");
    init_db(&db);

    run(&db, &["day", "set", "2026-03-02", "--arrival", "8h"])
        .failure()
        .stderr(contains("Invalid time format"));

    run(&db, &["day", "set", "03/02/2026"])
        .failure()
        .stderr(contains("Invalid date format"));

    run(&db, &["template", "set", "--day", "sat", "--arrival", "08:00"])
        .failure()
        .stderr(contains("Invalid weekday"));
}

#[test]
fn delete_a_day() {
    let db = setup_test_db("cli_del");
    init_db(&db);

    run(&db, &["day", "set", "2026-03-02"]).success();
    run(&db, &["day", "del", "2026-03-02", "--yes"])
        .success()
        .stdout(contains("has been deleted"));
    run(&db, &["day", "del", "2026-03-02", "--yes"])
        .failure()
        .stderr(contains("No recorded day"));
}

#[test]
fn week_summary_with_default_template() {
    let db = setup_test_db("cli_week_default");
    init_db(&db);

    run(&db, &["day", "set", "2026-03-02"]).success();

    // builtin template: 4 × 7h45 + 4h00
    run(&db, &["week", "show", "--date", "2026-03-04"])
        .success()
        .stdout(
            contains("Week S10-2026")
                .and(contains("Template: default"))
                .and(contains("35h00"))
                .and(contains("-27h15")),
        );

    run(&db, &["week", "show", "--date", "2026-03-11", "--offset", "-1"])
        .success()
        .stdout(contains("Week S10-2026"));
}

#[test]
fn named_template_for_one_week() {
    let db = setup_test_db("cli_week_named");
    init_db(&db);

    run(&db, &["template", "save", "full"])
        .success()
        .stdout(contains("Template 'full' saved"));

    run(
        &db,
        &[
            "template", "set", "--name", "full", "--day", "wed", "--lunch-in", "13:30",
            "--departure", "17:15",
        ],
    )
    .success()
    .stdout(contains("38h45"));

    run(&db, &["week", "assign", "full", "--date", "2026-03-04"])
        .success()
        .stdout(contains("Week S10-2026 now uses template 'full'"));

    run(&db, &["week", "show", "--date", "2026-03-02"])
        .success()
        .stdout(contains("Template: full").and(contains("38h45")));

    // next week is still on the default template
    run(&db, &["week", "show", "--date", "2026-03-09"])
        .success()
        .stdout(contains("Template: default").and(contains("35h00")));

    run(&db, &["template", "list"])
        .success()
        .stdout(contains("full").and(contains("38h45")));

    run(&db, &["week", "assign", "--default", "--date", "2026-03-04"])
        .success()
        .stdout(contains("now uses the default template"));
}

#[test]
fn template_name_rules() {
    let db = setup_test_db("cli_template_rules");
    init_db(&db);

    run(&db, &["template", "save", "default"])
        .failure()
        .stderr(contains("reserved"));

    run(&db, &["week", "assign", "ghost", "--date", "2026-03-04"])
        .failure()
        .stderr(contains("Template not found"));

    run(&db, &["template", "delete", "ghost", "--yes"])
        .failure()
        .stderr(contains("Template not found"));
}

#[test]
fn deleted_template_falls_back_to_default() {
    let db = setup_test_db("cli_dangling");
    init_db(&db);

    run(&db, &["template", "save", "tmp"]).success();
    run(&db, &["week", "assign", "tmp", "--date", "2026-03-04"]).success();
    run(&db, &["template", "delete", "tmp", "--yes"])
        .success()
        .stderr(contains("S10-2026"));

    run(&db, &["week", "show", "--date", "2026-03-04"])
        .success()
        .stdout(contains("missing, default used").and(contains("35h00")));
}

#[test]
fn history_lists_recent_weeks() {
    let db = setup_test_db("cli_history");
    init_db(&db);

    run(&db, &["history"]).success().stdout(contains("No recorded days"));

    for d in ["2026-03-02", "2026-03-03", "2026-03-10"] {
        run(&db, &["day", "set", d]).success();
    }

    run(&db, &["history"])
        .success()
        .stdout(contains("S10-2026").and(contains("S11-2026")).and(contains("15h30")));

    run(&db, &["history", "--limit", "1"])
        .success()
        .stdout(contains("S11-2026").and(contains("S10-2026").not()));
}

#[test]
fn export_and_import_through_the_cli() {
    let db = setup_test_db("cli_export_src");
    let db2 = setup_test_db("cli_export_dst");
    let out = temp_out("cli_export", "json");
    init_db(&db);
    init_db(&db2);

    run(&db, &["day", "set", "2026-03-02"]).success();
    run(&db, &["template", "save", "full"]).success();

    run(&db, &["export", "--file", &out])
        .success()
        .stdout(contains("Export completed"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"journees\""));
    assert!(text.contains("\"planningsSauvegardes\""));

    run(&db, &["export", "--file", &out, "--force"]).success();

    run(&db2, &["import", "--file", &out])
        .success()
        .stdout(contains("recorded days: 1").and(contains("named templates: 1")));

    run(&db2, &["day", "show", "2026-03-02"])
        .success()
        .stdout(contains("Recorded"));
}

#[test]
fn import_rejects_a_broken_file() {
    let db = setup_test_db("cli_import_bad");
    let bad = temp_out("cli_import_bad", "json");
    init_db(&db);
    std::fs::write(&bad, "{ not json").unwrap();

    run(&db, &["import", "--file", &bad])
        .failure()
        .stderr(contains("Import failed"));
}

#[test]
fn log_and_backup() {
    let db = setup_test_db("cli_log_backup");
    let backup = temp_out("cli_backup", "sqlite");
    init_db(&db);

    run(&db, &["day", "set", "2026-03-02"]).success();
    run(&db, &["log", "--print"])
        .success()
        .stdout(contains("day_save").and(contains("init")));

    run(&db, &["backup", "--file", &backup, "--compress", "--force"])
        .success()
        .stdout(contains("Compressed backup created"));

    assert!(Path::new(&backup).with_extension("zip").exists());
}

#[test]
fn settings_show_and_change() {
    let db = setup_test_db("cli_settings");
    init_db(&db);

    run(&db, &["settings"])
        .success()
        .stdout(contains("theme: light").and(contains("step: 5 min")));

    run(&db, &["settings", "--theme", "dark", "--step", "15", "--print"])
        .success()
        .stdout(contains("Settings updated").and(contains("theme: dark")));

    run(&db, &["settings", "--auto-save", "false"]).success();

    run(&db, &["settings", "--print"]).success().stdout(
        contains("theme: dark")
            .and(contains("auto-save: false"))
            .and(contains("step: 15 min")),
    );

    run(&db, &["settings", "--step", "7"])
        .failure()
        .stderr(contains("Invalid setting"));

    run(&db, &["log", "--print"]).success().stdout(contains("settings"));
}
