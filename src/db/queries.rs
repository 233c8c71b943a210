use crate::errors::{AppError, AppResult};
use crate::models::day_schedule::DaySchedule;
use crate::models::recorded_day::RecordedDay;
use crate::models::settings::Settings;
use crate::models::weekly_template::WeeklyTemplate;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeMap;

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn now() -> String {
    Local::now().to_rfc3339()
}

// ---------------------------
// days
// ---------------------------

pub fn map_day_row(row: &Row) -> Result<RecordedDay> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(RecordedDay {
        date,
        schedule: DaySchedule {
            arrival: row.get("arrival")?,
            lunch_out: row.get("lunch_out")?,
            lunch_in: row.get("lunch_in")?,
            departure: row.get("departure")?,
        },
        total_minutes: row.get("total_minutes")?,
    })
}

pub fn load_day(conn: &Connection, date: NaiveDate) -> AppResult<Option<RecordedDay>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, arrival, lunch_out, lunch_in, departure, total_minutes
         FROM days WHERE date = ?1",
    )?;
    let day = stmt.query_row([date_key(date)], map_day_row).optional()?;
    Ok(day)
}

pub fn load_days(conn: &Connection) -> AppResult<Vec<RecordedDay>> {
    let mut stmt = conn.prepare(
        "SELECT date, arrival, lunch_out, lunch_in, departure, total_minutes
         FROM days ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([], map_day_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_days_between(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<RecordedDay>> {
    let mut stmt = conn.prepare(
        "SELECT date, arrival, lunch_out, lunch_in, departure, total_minutes
         FROM days
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([date_key(from), date_key(to)], map_day_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_day(conn: &Connection, day: &RecordedDay) -> AppResult<()> {
    conn.execute(
        "INSERT INTO days (date, arrival, lunch_out, lunch_in, departure, total_minutes, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(date) DO UPDATE SET
             arrival = excluded.arrival,
             lunch_out = excluded.lunch_out,
             lunch_in = excluded.lunch_in,
             departure = excluded.departure,
             total_minutes = excluded.total_minutes,
             updated_at = excluded.updated_at",
        params![
            date_key(day.date),
            day.schedule.arrival,
            day.schedule.lunch_out,
            day.schedule.lunch_in,
            day.schedule.departure,
            day.total_minutes,
            now(),
        ],
    )?;
    Ok(())
}

pub fn delete_day(conn: &Connection, date: NaiveDate) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM days WHERE date = ?1", [date_key(date)])?;
    Ok(n > 0)
}

/// Replace the whole `days` table in one transaction.
pub fn replace_days(conn: &mut Connection, days: &[RecordedDay]) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM days", [])?;
    for d in days {
        upsert_day(&tx, d)?;
    }
    tx.commit()?;
    Ok(())
}

// ---------------------------
// templates (stored as JSON text)
// ---------------------------

fn decode_template(store: &'static str, json: &str) -> AppResult<WeeklyTemplate> {
    serde_json::from_str(json).map_err(|e| AppError::CorruptRecord {
        store,
        message: e.to_string(),
    })
}

pub fn load_default_template(conn: &Connection) -> AppResult<Option<WeeklyTemplate>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT planning FROM default_template WHERE id = 'default'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    json.map(|j| decode_template("default_template", &j))
        .transpose()
}

pub fn save_default_template(conn: &Connection, template: &WeeklyTemplate) -> AppResult<()> {
    let json = serde_json::to_string(template)?;
    conn.execute(
        "INSERT INTO default_template (id, planning, updated_at)
         VALUES ('default', ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET planning = excluded.planning, updated_at = excluded.updated_at",
        params![json, now()],
    )?;
    Ok(())
}

pub fn load_template(conn: &Connection, name: &str) -> AppResult<Option<WeeklyTemplate>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT planning FROM templates WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;

    json.map(|j| decode_template("templates", &j)).transpose()
}

pub fn load_templates(conn: &Connection) -> AppResult<BTreeMap<String, WeeklyTemplate>> {
    let mut stmt = conn.prepare("SELECT name, planning FROM templates ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = BTreeMap::new();
    for r in rows {
        let (name, json) = r?;
        out.insert(name, decode_template("templates", &json)?);
    }
    Ok(out)
}

pub fn upsert_template(conn: &Connection, name: &str, template: &WeeklyTemplate) -> AppResult<()> {
    let json = serde_json::to_string(template)?;
    conn.execute(
        "INSERT INTO templates (name, planning, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO UPDATE SET planning = excluded.planning, updated_at = excluded.updated_at",
        params![name, json, now()],
    )?;
    Ok(())
}

pub fn delete_template(conn: &Connection, name: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM templates WHERE name = ?1", [name])?;
    Ok(n > 0)
}

pub fn replace_templates(
    conn: &mut Connection,
    templates: &BTreeMap<String, WeeklyTemplate>,
) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM templates", [])?;
    for (name, t) in templates {
        upsert_template(&tx, name, t)?;
    }
    tx.commit()?;
    Ok(())
}

// ---------------------------
// week_templates
// ---------------------------

pub fn load_week_template(conn: &Connection, week_id: &str) -> AppResult<Option<String>> {
    let name = conn
        .query_row(
            "SELECT template_name FROM week_templates WHERE week_id = ?1",
            [week_id],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(name)
}

pub fn load_week_templates(conn: &Connection) -> AppResult<BTreeMap<String, String>> {
    let mut stmt = conn.prepare("SELECT week_id, template_name FROM week_templates")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = BTreeMap::new();
    for r in rows {
        let (week, name) = r?;
        out.insert(week, name);
    }
    Ok(out)
}

pub fn upsert_week_template(conn: &Connection, week_id: &str, template_name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO week_templates (week_id, template_name)
         VALUES (?1, ?2)
         ON CONFLICT(week_id) DO UPDATE SET template_name = excluded.template_name",
        params![week_id, template_name],
    )?;
    Ok(())
}

pub fn delete_week_template(conn: &Connection, week_id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM week_templates WHERE week_id = ?1", [week_id])?;
    Ok(n > 0)
}

pub fn replace_week_templates(
    conn: &mut Connection,
    associations: &BTreeMap<String, String>,
) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM week_templates", [])?;
    for (week, name) in associations {
        upsert_week_template(&tx, week, name)?;
    }
    tx.commit()?;
    Ok(())
}

// ---------------------------
// settings
// ---------------------------

pub fn load_settings(conn: &Connection) -> AppResult<Option<Settings>> {
    let json: Option<String> = conn
        .query_row("SELECT data FROM settings WHERE id = 'settings'", [], |row| {
            row.get(0)
        })
        .optional()?;

    json.map(|j| {
        serde_json::from_str(&j).map_err(|e| AppError::CorruptRecord {
            store: "settings",
            message: e.to_string(),
        })
    })
    .transpose()
}

pub fn save_settings(conn: &Connection, settings: &Settings) -> AppResult<()> {
    let json = serde_json::to_string(settings)?;
    conn.execute(
        "INSERT INTO settings (id, data) VALUES ('settings', ?1)
         ON CONFLICT(id) DO UPDATE SET data = excluded.data",
        [json],
    )?;
    Ok(())
}

// ---------------------------
// log
// ---------------------------

/// (id, date, operation, target, message), oldest first.
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
