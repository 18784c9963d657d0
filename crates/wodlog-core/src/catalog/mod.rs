//! Static workout catalog.
//!
//! The catalog is loaded once at startup, either from the built-in list or
//! from a JSON file, and is immutable afterwards. Lookups are linear scans;
//! catalogs are small.

mod builtin;
mod filter;
mod workout;

pub use builtin::builtin_workouts;
pub use filter::WorkoutFilter;
pub use workout::{Difficulty, DurationCategory, Equipment, Movement, Workout, WorkoutType};

use chrono::{Datelike, NaiveDate};
use std::path::Path;

use crate::error::{CoreError, Result, SerializationError, ValidationError};

#[derive(Debug, Clone)]
pub struct Catalog {
    workouts: Vec<Workout>,
}

impl Catalog {
    /// Build a catalog. An empty list is rejected so that
    /// [`Catalog::workout_of_the_day`] always has an answer.
    pub fn new(workouts: Vec<Workout>) -> Result<Self> {
        if workouts.is_empty() {
            return Err(ValidationError::EmptyCollection("workout catalog".into()).into());
        }
        Ok(Self { workouts })
    }

    pub fn builtin() -> Self {
        Self {
            workouts: builtin_workouts(),
        }
    }

    /// Load a catalog from a JSON array of workouts.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let workouts: Vec<Workout> =
            serde_json::from_str(&content).map_err(|source| SerializationError {
                key: path.display().to_string(),
                source,
            })?;
        tracing::debug!(path = %path.display(), count = workouts.len(), "loaded workout catalog");
        Self::new(workouts)
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Like [`Catalog::get_by_id`] but reports a missing id as an error.
    pub fn require(&self, id: &str) -> Result<&Workout> {
        self.get_by_id(id)
            .ok_or_else(|| CoreError::not_found("workout", id))
    }

    /// Workout for a day index, wrapping around the catalog length.
    pub fn for_day_index(&self, index: usize) -> &Workout {
        &self.workouts[index % self.workouts.len()]
    }

    /// Today's WOD: the weekday (Sunday = 0) indexes into the catalog.
    pub fn workout_of_the_day(&self, date: NaiveDate) -> &Workout {
        self.for_day_index(date.weekday().num_days_from_sunday() as usize)
    }

    pub fn filter<'a>(&'a self, filter: &'a WorkoutFilter) -> impl Iterator<Item = &'a Workout> + 'a {
        self.workouts.iter().filter(move |w| filter.matches(w))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn get_by_id_finds_catalog_entries() {
        let catalog = Catalog::builtin();
        for workout in builtin_workouts() {
            assert_eq!(catalog.get_by_id(&workout.id), Some(&workout));
        }
    }

    #[test]
    fn get_by_id_reports_missing() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_by_id("nonexistent-id").is_none());
        assert!(matches!(
            catalog.require("nonexistent-id"),
            Err(CoreError::NotFound { kind: "workout", .. })
        ));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(CoreError::Validation(ValidationError::EmptyCollection(_)))
        ));
    }

    #[test]
    fn workout_of_the_day_is_deterministic() {
        let catalog = Catalog::builtin();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let first = catalog.workout_of_the_day(date).id.clone();
        for _ in 0..5 {
            assert_eq!(catalog.workout_of_the_day(date).id, first);
        }
    }

    #[test]
    fn sunday_maps_to_first_workout() {
        let catalog = Catalog::builtin();
        // 2024-03-03 was a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(catalog.workout_of_the_day(sunday).name, "Fran");
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(catalog.workout_of_the_day(saturday).id, catalog.for_day_index(6).id);
    }

    #[test]
    fn day_index_wraps_around() {
        let catalog = Catalog::builtin();
        for index in 0..21 {
            let workout = catalog.for_day_index(index);
            assert!(catalog.get_by_id(&workout.id).is_some());
            assert_eq!(workout.id, catalog.for_day_index(index % catalog.len()).id);
        }
        assert_eq!(catalog.for_day_index(7).id, catalog.for_day_index(7 % catalog.len()).id);
        assert_eq!(catalog.for_day_index(6).id, catalog.for_day_index(0).id);
    }

    #[test]
    fn loads_catalog_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&builtin_workouts()[..2]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.for_day_index(3).name, "Cindy");
    }

    #[test]
    fn malformed_catalog_file_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(
            Catalog::from_json_file(file.path()),
            Err(CoreError::Serialization(_))
        ));
    }
}
