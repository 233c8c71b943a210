use serde::{Deserialize, Serialize};

/// The four checkpoints of a working day, each an "HH:MM" string.
///
/// An empty string means the checkpoint is absent. `lunch_in` and `departure`
/// are both empty on a half-day. Field names on the wire match the export
/// document (`arrivee`, `sortieMidi`, `retourMidi`, `sortie`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(rename = "arrivee", alias = "arrival", default)]
    pub arrival: String,
    #[serde(rename = "sortieMidi", alias = "lunch_out", default)]
    pub lunch_out: String,
    #[serde(rename = "retourMidi", alias = "lunch_in", default)]
    pub lunch_in: String,
    #[serde(rename = "sortie", alias = "departure", default)]
    pub departure: String,
}

impl DaySchedule {
    pub fn new(arrival: &str, lunch_out: &str, lunch_in: &str, departure: &str) -> Self {
        Self {
            arrival: arrival.to_string(),
            lunch_out: lunch_out.to_string(),
            lunch_in: lunch_in.to_string(),
            departure: departure.to_string(),
        }
    }

    /// Morning-only schedule (no lunch return, no departure).
    pub fn half_day(arrival: &str, lunch_out: &str) -> Self {
        Self::new(arrival, lunch_out, "", "")
    }

    /// True when the afternoon session counts (both ends present).
    pub fn has_afternoon(&self) -> bool {
        !self.lunch_in.is_empty() && !self.departure.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
            && self.lunch_out.is_empty()
            && self.lunch_in.is_empty()
            && self.departure.is_empty()
    }
}
