use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are tracked there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260105_0001_create_core_tables",
        message: "Created days, templates, week_templates and settings tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS days (
            date          TEXT PRIMARY KEY,
            arrival       TEXT NOT NULL DEFAULT '',
            lunch_out     TEXT NOT NULL DEFAULT '',
            lunch_in      TEXT NOT NULL DEFAULT '',
            departure     TEXT NOT NULL DEFAULT '',
            total_minutes INTEGER NOT NULL DEFAULT 0,
            updated_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS default_template (
            id         TEXT PRIMARY KEY CHECK(id = 'default'),
            planning   TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS templates (
            name       TEXT PRIMARY KEY,
            planning   TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS week_templates (
            week_id       TEXT PRIMARY KEY,
            template_name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS settings (
            id   TEXT PRIMARY KEY CHECK(id = 'settings'),
            data TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20260212_0002_index_week_templates_by_name",
        message: "Indexed week_templates by template name",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_week_templates_name ON week_templates(template_name);
        "#,
    },
];

/// Public entry point: run all pending migrations.
///
/// Every migration is idempotent and recorded once in `log`
/// as a `migration_applied` row. Returns how many were applied now.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        mark_applied(&tx, m.version, m.message)?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.message));
        applied += 1;
    }

    Ok(applied)
}

/// Versions already applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
