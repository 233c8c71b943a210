//! Record-store interface used by the core.
//!
//! Five logical stores: recorded days (key: date), the default template
//! (singleton), named templates (key: name), week → template associations
//! (key: week identifier) and the settings record (singleton).
//! `DbPool` implements it on SQLite, `MemoryStore` in memory.

pub mod memory;

use crate::errors::AppResult;
use crate::models::recorded_day::RecordedDay;
use crate::models::settings::Settings;
use crate::models::weekly_template::WeeklyTemplate;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub use memory::MemoryStore;

pub trait Store {
    // ---------------------------
    // Recorded days
    // ---------------------------
    fn get_day(&self, date: NaiveDate) -> AppResult<Option<RecordedDay>>;
    fn put_day(&mut self, day: &RecordedDay) -> AppResult<()>;
    /// Returns false when nothing was stored for `date`.
    fn delete_day(&mut self, date: NaiveDate) -> AppResult<bool>;
    /// All recorded days, ordered by date.
    fn list_days(&self) -> AppResult<Vec<RecordedDay>>;
    /// Replace the whole collection in one step.
    fn replace_days(&mut self, days: &[RecordedDay]) -> AppResult<()>;

    /// Recorded days in `[from, to]`, ordered by date.
    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<RecordedDay>> {
        Ok(self
            .list_days()?
            .into_iter()
            .filter(|d| d.date >= from && d.date <= to)
            .collect())
    }

    // ---------------------------
    // Default template
    // ---------------------------
    fn get_default_template(&self) -> AppResult<Option<WeeklyTemplate>>;
    fn put_default_template(&mut self, template: &WeeklyTemplate) -> AppResult<()>;

    // ---------------------------
    // Named templates
    // ---------------------------
    fn get_template(&self, name: &str) -> AppResult<Option<WeeklyTemplate>>;
    fn put_template(&mut self, name: &str, template: &WeeklyTemplate) -> AppResult<()>;
    fn delete_template(&mut self, name: &str) -> AppResult<bool>;
    fn list_templates(&self) -> AppResult<BTreeMap<String, WeeklyTemplate>>;
    fn replace_templates(&mut self, templates: &BTreeMap<String, WeeklyTemplate>)
    -> AppResult<()>;

    // ---------------------------
    // Week → template associations
    // ---------------------------
    fn get_week_template(&self, week_id: &str) -> AppResult<Option<String>>;
    fn put_week_template(&mut self, week_id: &str, template_name: &str) -> AppResult<()>;
    fn delete_week_template(&mut self, week_id: &str) -> AppResult<bool>;
    fn list_week_templates(&self) -> AppResult<BTreeMap<String, String>>;
    fn replace_week_templates(&mut self, associations: &BTreeMap<String, String>)
    -> AppResult<()>;

    // ---------------------------
    // Settings
    // ---------------------------
    fn get_settings(&self) -> AppResult<Option<Settings>>;
    fn put_settings(&mut self, settings: &Settings) -> AppResult<()>;

    /// Record a mutating operation in the audit trail, if the store keeps one.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Audit write that never fails the calling operation.
pub fn audit_quiet(store: &dyn Store, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.audit(operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}
