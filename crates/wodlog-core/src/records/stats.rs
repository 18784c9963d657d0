use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::model::{PersonalRecord, WorkoutResult};

/// Profile-screen summary over the stored history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total_workouts: usize,
    pub total_duration_secs: u64,
    pub personal_records: usize,
    /// Distinct calendar days (UTC) with at least one finished workout.
    pub active_days: usize,
    pub last_workout: Option<WorkoutResult>,
}

impl ProgressStats {
    pub fn compute(history: &[WorkoutResult], personal_records: &[PersonalRecord]) -> Self {
        let days: BTreeSet<NaiveDate> = history.iter().map(|r| r.completed_at.date_naive()).collect();
        Self {
            total_workouts: history.len(),
            total_duration_secs: history.iter().map(|r| r.duration).sum(),
            personal_records: personal_records.len(),
            active_days: days.len(),
            last_workout: history.first().cloned(),
        }
    }
}
