use crate::core::calculator::day::template_total;
use crate::core::day::DayInput;
use crate::core::resolver::default_template;
use crate::errors::{AppError, AppResult};
use crate::models::template_choice::TemplateChoice;
use crate::models::weekday::WorkDay;
use crate::models::weekly_template::WeeklyTemplate;
use crate::store::{Store, audit_quiet};
use crate::utils::time::format_duration;

/// Command-line keyword for the default template.
pub const DEFAULT_KEYWORD: &str = "default";

/// High-level business logic for weekly templates.
pub struct TemplateLogic;

impl TemplateLogic {
    /// `None` and the `default` keyword select the default template.
    pub fn choice_from_arg(name: Option<&str>) -> TemplateChoice {
        match name.map(str::trim) {
            None => TemplateChoice::Default,
            Some(n) if n.eq_ignore_ascii_case(DEFAULT_KEYWORD) => TemplateChoice::Default,
            Some(n) => TemplateChoice::Named(n.to_string()),
        }
    }

    /// Name accepted for a new named template.
    pub fn validate_name(name: &str) -> AppResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Other("Template name cannot be empty".into()));
        }
        if trimmed.eq_ignore_ascii_case(DEFAULT_KEYWORD) {
            return Err(AppError::ReservedTemplateName(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }

    pub fn load(store: &dyn Store, choice: &TemplateChoice) -> AppResult<WeeklyTemplate> {
        match choice {
            TemplateChoice::Default => Ok(default_template(store)),
            TemplateChoice::Named(name) => store
                .get_template(name)?
                .ok_or_else(|| AppError::TemplateNotFound(name.clone())),
        }
    }

    fn store_template(
        store: &mut dyn Store,
        choice: &TemplateChoice,
        template: &WeeklyTemplate,
    ) -> AppResult<()> {
        match choice {
            TemplateChoice::Default => store.put_default_template(template),
            TemplateChoice::Named(name) => store.put_template(name, template),
        }
    }

    /// Change one weekday of an existing template.
    pub fn edit_day(
        store: &mut dyn Store,
        choice: &TemplateChoice,
        day: WorkDay,
        input: &DayInput,
    ) -> AppResult<WeeklyTemplate> {
        let mut template = Self::load(&*store, choice)?;
        input.apply_to(template.day_mut(day));

        Self::store_template(store, choice, &template)?;

        audit_quiet(
            &*store,
            "template_edit",
            &choice.to_string(),
            &format!(
                "{} updated, week total {}",
                day.label(),
                format_duration(template_total(&template))
            ),
        );

        Ok(template)
    }

    /// Save a named copy of `source`. An existing template with the same
    /// name is overwritten.
    pub fn save_copy(
        store: &mut dyn Store,
        name: &str,
        source: &TemplateChoice,
    ) -> AppResult<WeeklyTemplate> {
        let name = Self::validate_name(name)?;
        let template = Self::load(&*store, source)?;

        store.put_template(&name, &template)?;

        audit_quiet(
            &*store,
            "template_save",
            &name,
            &format!("Saved from {}", source),
        );

        Ok(template)
    }

    /// Delete a named template. Weeks still bound to it resolve to the
    /// default template from now on.
    pub fn delete(store: &mut dyn Store, name: &str) -> AppResult<()> {
        if !store.delete_template(name)? {
            return Err(AppError::TemplateNotFound(name.to_string()));
        }

        audit_quiet(&*store, "template_del", name, "Deleted named template");
        Ok(())
    }

    /// Restore the built-in default template.
    pub fn reset_default(store: &mut dyn Store) -> AppResult<WeeklyTemplate> {
        let builtin = WeeklyTemplate::builtin();
        store.put_default_template(&builtin)?;

        audit_quiet(
            &*store,
            "template_reset",
            DEFAULT_KEYWORD,
            "Default template reset to built-in",
        );

        Ok(builtin)
    }

    /// Planned minutes over the five weekdays.
    pub fn weekly_total(template: &WeeklyTemplate) -> i64 {
        template_total(template)
    }

    /// Named templates with their weekly totals, sorted by name.
    pub fn list(store: &dyn Store) -> AppResult<Vec<(String, i64)>> {
        Ok(store
            .list_templates()?
            .into_iter()
            .map(|(name, t)| {
                let total = Self::weekly_total(&t);
                (name, total)
            })
            .collect())
    }

    /// Week identifiers bound to `name`.
    pub fn weeks_using(store: &dyn Store, name: &str) -> AppResult<Vec<String>> {
        Ok(store
            .list_week_templates()?
            .into_iter()
            .filter(|(_, n)| n == name)
            .map(|(week, _)| week)
            .collect())
    }
}
