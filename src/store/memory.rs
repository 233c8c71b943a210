//! In-memory record store, used by tests and for dry runs.

use super::Store;
use crate::errors::AppResult;
use crate::models::recorded_day::RecordedDay;
use crate::models::settings::Settings;
use crate::models::weekly_template::WeeklyTemplate;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    days: BTreeMap<NaiveDate, RecordedDay>,
    default_template: Option<WeeklyTemplate>,
    templates: BTreeMap<String, WeeklyTemplate>,
    week_templates: BTreeMap<String, String>,
    settings: Option<Settings>,
    audit_log: RefCell<Vec<(String, String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// (operation, target, message) rows written through [`Store::audit`].
    pub fn audit_entries(&self) -> Vec<(String, String, String)> {
        self.audit_log.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn get_day(&self, date: NaiveDate) -> AppResult<Option<RecordedDay>> {
        Ok(self.days.get(&date).cloned())
    }

    fn put_day(&mut self, day: &RecordedDay) -> AppResult<()> {
        self.days.insert(day.date, day.clone());
        Ok(())
    }

    fn delete_day(&mut self, date: NaiveDate) -> AppResult<bool> {
        Ok(self.days.remove(&date).is_some())
    }

    fn list_days(&self) -> AppResult<Vec<RecordedDay>> {
        Ok(self.days.values().cloned().collect())
    }

    fn replace_days(&mut self, days: &[RecordedDay]) -> AppResult<()> {
        self.days = days.iter().map(|d| (d.date, d.clone())).collect();
        Ok(())
    }

    fn days_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<RecordedDay>> {
        if from > to {
            return Ok(Vec::new());
        }
        Ok(self.days.range(from..=to).map(|(_, d)| d.clone()).collect())
    }

    fn get_default_template(&self) -> AppResult<Option<WeeklyTemplate>> {
        Ok(self.default_template.clone())
    }

    fn put_default_template(&mut self, template: &WeeklyTemplate) -> AppResult<()> {
        self.default_template = Some(template.clone());
        Ok(())
    }

    fn get_template(&self, name: &str) -> AppResult<Option<WeeklyTemplate>> {
        Ok(self.templates.get(name).cloned())
    }

    fn put_template(&mut self, name: &str, template: &WeeklyTemplate) -> AppResult<()> {
        self.templates.insert(name.to_string(), template.clone());
        Ok(())
    }

    fn delete_template(&mut self, name: &str) -> AppResult<bool> {
        Ok(self.templates.remove(name).is_some())
    }

    fn list_templates(&self) -> AppResult<BTreeMap<String, WeeklyTemplate>> {
        Ok(self.templates.clone())
    }

    fn replace_templates(
        &mut self,
        templates: &BTreeMap<String, WeeklyTemplate>,
    ) -> AppResult<()> {
        self.templates = templates.clone();
        Ok(())
    }

    fn get_week_template(&self, week_id: &str) -> AppResult<Option<String>> {
        Ok(self.week_templates.get(week_id).cloned())
    }

    fn put_week_template(&mut self, week_id: &str, template_name: &str) -> AppResult<()> {
        self.week_templates
            .insert(week_id.to_string(), template_name.to_string());
        Ok(())
    }

    fn delete_week_template(&mut self, week_id: &str) -> AppResult<bool> {
        Ok(self.week_templates.remove(week_id).is_some())
    }

    fn list_week_templates(&self) -> AppResult<BTreeMap<String, String>> {
        Ok(self.week_templates.clone())
    }

    fn replace_week_templates(
        &mut self,
        associations: &BTreeMap<String, String>,
    ) -> AppResult<()> {
        self.week_templates = associations.clone();
        Ok(())
    }

    fn get_settings(&self) -> AppResult<Option<Settings>> {
        Ok(self.settings.clone())
    }

    fn put_settings(&mut self, settings: &Settings) -> AppResult<()> {
        self.settings = Some(settings.clone());
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit_log.borrow_mut().push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
        Ok(())
    }
}
