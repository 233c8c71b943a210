use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_duration;
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORD COUNTS
    //
    let days = count(pool, "days")?;
    let templates = count(pool, "templates")?;
    let weeks = count(pool, "week_templates")?;
    let has_default = count(pool, "default_template")? > 0;

    println!("{}• Recorded days:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);
    println!("{}• Named templates:{} {}", CYAN, RESET, templates);
    println!("{}• Week associations:{} {}", CYAN, RESET, weeks);
    println!(
        "{}• Default template:{} {}",
        CYAN,
        RESET,
        if has_default { "custom" } else { "built-in" }
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT date FROM days ORDER BY date ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM days ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE WORKED TIME PER RECORDED DAY
    //
    if days > 0 {
        let total: i64 = pool
            .conn
            .query_row("SELECT IFNULL(SUM(total_minutes), 0) FROM days", [], |row| {
                row.get(0)
            })?;
        println!(
            "{}• Average per recorded day:{} {}",
            CYAN,
            RESET,
            format_duration(total / days)
        );
    }

    println!();
    Ok(())
}

/// `PRAGMA integrity_check` result lines; `["ok"]` for a sound file.
pub fn integrity_check(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Rebuild the file; returns (size before, size after) in bytes.
pub fn vacuum(pool: &DbPool, db_path: &str) -> AppResult<(u64, u64)> {
    let size = || fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let before = size();
    pool.conn.execute_batch("VACUUM;")?;
    Ok((before, size()))
}
