use crate::models::recorded_day::RecordedDay;
use crate::models::settings::Settings;
use crate::models::weekly_template::WeeklyTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full export document.
///
/// Every section is optional on import: a missing (or null) section leaves
/// its store untouched. Section and field names are the French keys of the
/// document format (`journees`, `planning`, …).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Recorded days keyed by "YYYY-MM-DD".
    #[serde(rename = "journees", default, skip_serializing_if = "Option::is_none")]
    pub days: Option<BTreeMap<String, RecordedDay>>,

    #[serde(rename = "planning", default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<WeeklyTemplate>,

    #[serde(
        rename = "planningsSauvegardes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub templates: Option<BTreeMap<String, WeeklyTemplate>>,

    /// Week identifier → template name.
    #[serde(
        rename = "associationsSemaines",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub week_templates: Option<BTreeMap<String, String>>,

    #[serde(rename = "parametres", default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,

    #[serde(rename = "exportedAt", default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,

    /// Set by weeklog exports: week keys carry the ISO week-year. Without it
    /// keys carry the calendar year of the day they were written for.
    #[serde(rename = "isoWeekKeys", default, skip_serializing_if = "Option::is_none")]
    pub iso_week_keys: Option<bool>,
}
