use crate::core::resolver::default_template;
use crate::core::template::DEFAULT_KEYWORD;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::model::Snapshot;
use crate::export::notify_success;
use crate::models::recorded_day::RecordedDay;
use crate::store::{Store, audit_quiet};
use crate::ui::messages::warning;
use crate::utils::date::WeekId;
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Snapshot of the five stores. The default template is always present
    /// (built-in when never edited), as are the settings.
    pub fn snapshot(store: &dyn Store) -> AppResult<Snapshot> {
        let days = store
            .list_days()?
            .into_iter()
            .map(|d| (d.date_str(), d))
            .collect::<BTreeMap<_, _>>();

        Ok(Snapshot {
            days: Some(days),
            default_template: Some(default_template(store)),
            templates: Some(store.list_templates()?),
            week_templates: Some(store.list_week_templates()?),
            settings: Some(store.get_settings()?.unwrap_or_default()),
            exported_at: Some(Local::now().to_rfc3339()),
            iso_week_keys: Some(true),
        })
    }

    pub fn to_json(store: &dyn Store) -> AppResult<String> {
        let snapshot = Self::snapshot(store)?;
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Write the snapshot to `file` (absolute path).
    pub fn export(store: &dyn Store, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        let json = Self::to_json(store)?;
        fs::write(path, json)?;

        audit_quiet(store, "export", file, "Snapshot exported to JSON");
        notify_success("Export", path);

        Ok(())
    }
}

/// What an import replaced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub days: Option<usize>,
    pub default_template: bool,
    pub templates: Option<usize>,
    pub week_templates: Option<usize>,
    pub settings: bool,
}

impl ImportReport {
    pub fn is_empty(&self) -> bool {
        self.days.is_none()
            && !self.default_template
            && self.templates.is_none()
            && self.week_templates.is_none()
            && !self.settings
    }

    /// (section, what was written) for every replaced section.
    pub fn sections(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(n) = self.days {
            out.push(("recorded days", n.to_string()));
        }
        if self.default_template {
            out.push(("default template", "replaced".to_string()));
        }
        if let Some(n) = self.templates {
            out.push(("named templates", n.to_string()));
        }
        if let Some(n) = self.week_templates {
            out.push(("week assignments", n.to_string()));
        }
        if self.settings {
            out.push(("settings", "replaced".to_string()));
        }
        out
    }
}

/// High-level import logic.
pub struct ImportLogic;

impl ImportLogic {
    /// Parse and check a document without touching any store.
    pub fn parse(text: &str) -> AppResult<Snapshot> {
        let snapshot: Snapshot =
            serde_json::from_str(text).map_err(|e| AppError::Import(e.to_string()))?;

        if let Some(days) = &snapshot.days {
            for (key, day) in days {
                let key_date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
                    .map_err(|_| AppError::Import(format!("invalid date key '{key}'")))?;
                if key_date != day.date {
                    return Err(AppError::Import(format!(
                        "entry '{key}' holds the record of {}",
                        day.date_str()
                    )));
                }
            }
        }

        Ok(snapshot)
    }

    /// Replace every section present in `text`. Sections are written one
    /// after the other; a failing write leaves earlier sections replaced.
    pub fn import_str(store: &mut dyn Store, text: &str) -> AppResult<ImportReport> {
        let snapshot = Self::parse(text)?;
        let weeks = snapshot.week_templates.as_ref().map(|weeks| {
            Self::week_associations(weeks, snapshot.iso_week_keys.unwrap_or(false))
        });
        let mut report = ImportReport::default();

        if let Some(days) = &snapshot.days {
            let days: Vec<RecordedDay> = days.values().cloned().collect();
            store.replace_days(&days)?;
            report.days = Some(days.len());
        }

        if let Some(template) = &snapshot.default_template {
            store.put_default_template(template)?;
            report.default_template = true;
        }

        if let Some(templates) = &snapshot.templates {
            store.replace_templates(templates)?;
            report.templates = Some(templates.len());
        }

        if let Some(weeks) = &weeks {
            store.replace_week_templates(weeks)?;
            report.week_templates = Some(weeks.len());
        }

        if let Some(settings) = &snapshot.settings {
            store.put_settings(settings)?;
            report.settings = true;
        }

        audit_quiet(
            &*store,
            "import",
            "",
            &format!(
                "Imported: {}",
                report
                    .sections()
                    .iter()
                    .map(|(s, n)| format!("{s} {n}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );

        Ok(report)
    }

    /// Week associations keyed by ISO week identifier.
    ///
    /// Calendar-year keys are spread over every week they may name; a key
    /// read at its stated year wins over one spilling from a neighbour year.
    /// Keys naming no week are skipped with a warning.
    fn week_associations(
        weeks: &BTreeMap<String, String>,
        iso_keys: bool,
    ) -> BTreeMap<String, String> {
        let mut spilled = BTreeMap::new();
        let mut stated = BTreeMap::new();

        for (key, name) in weeks {
            // a "default" value means no association
            if name.eq_ignore_ascii_case(DEFAULT_KEYWORD) {
                continue;
            }

            if iso_keys {
                match key.parse::<WeekId>() {
                    Ok(id) => {
                        stated.insert(id.to_string(), name.clone());
                    }
                    Err(e) => warning(format!("Skipping week association: {e}")),
                }
                continue;
            }

            match WeekId::from_calendar_key(key) {
                Ok(readings) => {
                    for id in readings.spilled {
                        spilled.insert(id.to_string(), name.clone());
                    }
                    if let Some(id) = readings.stated {
                        stated.insert(id.to_string(), name.clone());
                    }
                }
                Err(e) => warning(format!("Skipping week association: {e}")),
            }
        }

        spilled.extend(stated);
        spilled
    }

    pub fn import_file(store: &mut dyn Store, file: &Path) -> AppResult<ImportReport> {
        let text = fs::read_to_string(file)?;
        Self::import_str(store, &text)
    }
}
