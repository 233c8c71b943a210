use crate::core::resolver::set_week_template;
use crate::errors::{AppError, AppResult};
use crate::models::template_choice::TemplateChoice;
use crate::store::{Store, audit_quiet};
use crate::utils::date::WeekId;
use chrono::NaiveDate;

pub struct WeekLogic;

impl WeekLogic {
    /// Bind the week containing `date` to a template.
    /// Only existing named templates can be bound.
    pub fn assign(
        store: &mut dyn Store,
        date: NaiveDate,
        choice: &TemplateChoice,
    ) -> AppResult<WeekId> {
        let week_id = WeekId::of(date);

        if let TemplateChoice::Named(name) = choice
            && store.get_template(name)?.is_none()
        {
            return Err(AppError::TemplateNotFound(name.clone()));
        }

        set_week_template(store, &week_id, choice)?;

        audit_quiet(
            &*store,
            "week_assign",
            &week_id.to_string(),
            &format!("Template '{}'", choice),
        );

        Ok(week_id)
    }
}
