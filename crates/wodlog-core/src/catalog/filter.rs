use serde::{Deserialize, Serialize};

use super::workout::{DurationCategory, Equipment, Workout, WorkoutType};

/// Explore-screen filter. Every criterion is optional; set criteria must all
/// match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutFilter {
    /// Case-insensitive substring of the workout name or any movement name.
    pub query: Option<String>,
    pub duration: Option<DurationCategory>,
    pub workout_type: Option<WorkoutType>,
    pub equipment: Option<Equipment>,
}

impl WorkoutFilter {
    pub fn is_empty(&self) -> bool {
        self.query_lower().is_none()
            && self.duration.is_none()
            && self.workout_type.is_none()
            && self.equipment.is_none()
    }

    pub fn matches(&self, workout: &Workout) -> bool {
        let matches_query = match self.query_lower() {
            None => true,
            Some(q) => {
                workout.name.to_lowercase().contains(&q)
                    || workout
                        .movements
                        .iter()
                        .any(|m| m.name.to_lowercase().contains(&q))
            }
        };

        let matches_duration = self
            .duration
            .map_or(true, |d| workout.duration_category() == d);
        let matches_type = self
            .workout_type
            .map_or(true, |t| workout.workout_type == t);
        let matches_equipment = self
            .equipment
            .map_or(true, |e| workout.equipment.contains(&e));

        matches_query && matches_duration && matches_type && matches_equipment
    }

    fn query_lower(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}
