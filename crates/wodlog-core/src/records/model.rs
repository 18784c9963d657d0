use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value recorded for personal records derived from completed movements.
/// These stubs carry no numeric value yet.
pub const PR_PLACEHOLDER_VALUE: &str = "PR";

/// A finished workout attempt. Never edited once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResult {
    pub id: String,
    pub workout_id: String,
    pub workout_name: String,
    /// Free text, e.g. "15:30" or "10 rounds + 5 reps".
    pub result: String,
    /// Elapsed session time in seconds.
    pub duration: u64,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub rx: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub personal_records: Vec<PersonalRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredPersonalRecord")]
pub struct PersonalRecord {
    pub id: String,
    pub exercise: String,
    /// Weight, reps or time; the unit is part of the text.
    pub value: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_name: Option<String>,
}

/// Accepts both the current `value` field and the older split
/// `weight`/`time`/`reps`/`other` fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPersonalRecord {
    id: String,
    exercise: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    weight: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    reps: Option<serde_json::Value>,
    #[serde(default)]
    other: Option<String>,
    date: DateTime<Utc>,
    #[serde(default)]
    workout_id: Option<String>,
    #[serde(default)]
    workout_name: Option<String>,
}

impl From<StoredPersonalRecord> for PersonalRecord {
    fn from(stored: StoredPersonalRecord) -> Self {
        let reps = stored.reps.map(|reps| match reps {
            serde_json::Value::String(s) => s,
            other => format!("{other} reps"),
        });
        let value = [stored.value, stored.weight, stored.time, reps, stored.other]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .unwrap_or_default();
        Self {
            id: stored.id,
            exercise: stored.exercise,
            value,
            date: stored.date,
            workout_id: stored.workout_id,
            workout_name: stored.workout_name,
        }
    }
}

impl PersonalRecord {
    /// True for records auto-generated from a session's completed movements.
    pub fn is_placeholder(&self) -> bool {
        self.workout_id.is_some() && self.value == PR_PLACEHOLDER_VALUE
    }
}

/// What a finished session hands to the result recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub workout_id: String,
    pub workout_name: String,
    pub elapsed_secs: u64,
    /// `(movement id, movement name)` in workout order.
    pub completed_movements: Vec<(String, String)>,
}

/// Optional extras captured together with the result text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultDetails {
    pub rx: bool,
    pub notes: Option<String>,
}
