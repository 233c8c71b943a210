//! Which weekly template applies to a given week.
//!
//! Lookup order: the week's association, then the named template it points
//! to, then the default template. Resolution never fails: a dangling
//! association or an unreadable store falls back to the default.

use crate::errors::AppResult;
use crate::models::template_choice::TemplateChoice;
use crate::models::weekly_template::WeeklyTemplate;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::date::WeekId;

/// Stored default template, or the built-in one when none was saved.
pub fn default_template(store: &dyn Store) -> WeeklyTemplate {
    match store.get_default_template() {
        Ok(Some(t)) => t,
        Ok(None) => WeeklyTemplate::builtin(),
        Err(e) => {
            warning(format!("Cannot read default template ({}), using built-in.", e));
            WeeklyTemplate::builtin()
        }
    }
}

/// Effective template of a week.
pub fn resolve_template(store: &dyn Store, week_id: &WeekId) -> WeeklyTemplate {
    let name = match store.get_week_template(&week_id.to_string()) {
        Ok(Some(name)) => name,
        Ok(None) => return default_template(store),
        Err(e) => {
            warning(format!("Cannot read template of week {} ({}).", week_id, e));
            return default_template(store);
        }
    };

    match store.get_template(&name) {
        Ok(Some(t)) => t,
        Ok(None) => default_template(store),
        Err(e) => {
            warning(format!("Cannot read template '{}' ({}).", name, e));
            default_template(store)
        }
    }
}

/// Association currently stored for a week. A dangling name is still reported
/// as `Named`; use [`is_dangling`] to tell it apart.
pub fn week_choice(store: &dyn Store, week_id: &WeekId) -> TemplateChoice {
    let name = store
        .get_week_template(&week_id.to_string())
        .unwrap_or_else(|e| {
            warning(format!("Cannot read template of week {} ({}).", week_id, e));
            None
        });
    TemplateChoice::from_association(name)
}

/// True when the choice names a template that no longer exists.
pub fn is_dangling(store: &dyn Store, choice: &TemplateChoice) -> bool {
    match choice {
        TemplateChoice::Default => false,
        TemplateChoice::Named(n) => matches!(store.get_template(n), Ok(None)),
    }
}

/// Bind a week to a template. `Default` removes the association.
/// Applying the same choice twice leaves the store unchanged.
pub fn set_week_template(
    store: &mut dyn Store,
    week_id: &WeekId,
    choice: &TemplateChoice,
) -> AppResult<()> {
    let key = week_id.to_string();
    match choice {
        TemplateChoice::Default => {
            store.delete_week_template(&key)?;
        }
        TemplateChoice::Named(name) => {
            store.put_week_template(&key, name)?;
        }
    }
    Ok(())
}
