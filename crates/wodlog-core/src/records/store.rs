//! Workout history and personal-record store.
//!
//! Every successful mutation is followed by a save of the affected list.
//! Save failures are logged and leave the in-memory state in place; callers
//! that need to know can call [`WorkoutStore::save`] directly.

use chrono::Utc;
use std::rc::Rc;
use uuid::Uuid;

use super::model::{
    PersonalRecord, ResultDetails, SessionSummary, WorkoutResult, PR_PLACEHOLDER_VALUE,
};
use super::stats::ProgressStats;
use crate::error::{Result, ValidationError};
use crate::storage::{load_json, save_json, KeyValueStore, HISTORY_KEY, PERSONAL_RECORDS_KEY};

pub struct WorkoutStore {
    storage: Rc<dyn KeyValueStore>,
    /// Most recent first.
    history: Vec<WorkoutResult>,
    /// Most recent first.
    personal_records: Vec<PersonalRecord>,
}

impl WorkoutStore {
    /// Load both lists. Missing or unreadable data starts empty.
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let history: Vec<WorkoutResult> =
            load_json(storage.as_ref(), HISTORY_KEY).unwrap_or_default();
        let personal_records: Vec<PersonalRecord> =
            load_json(storage.as_ref(), PERSONAL_RECORDS_KEY).unwrap_or_default();
        tracing::debug!(
            history = history.len(),
            personal_records = personal_records.len(),
            "workout store loaded"
        );
        Self {
            storage,
            history,
            personal_records,
        }
    }

    pub fn history(&self) -> &[WorkoutResult] {
        &self.history
    }

    pub fn last_workout(&self) -> Option<&WorkoutResult> {
        self.history.first()
    }

    pub fn personal_records(&self) -> &[PersonalRecord] {
        &self.personal_records
    }

    pub fn stats(&self) -> ProgressStats {
        ProgressStats::compute(&self.history, &self.personal_records)
    }

    /// Turn a finished session into a stored result.
    ///
    /// The result text is trimmed and must not be empty. One placeholder
    /// personal record is derived per completed movement; each is stored
    /// in the personal-record list as well as on the result.
    pub fn record_result(
        &mut self,
        summary: &SessionSummary,
        result_text: &str,
        details: ResultDetails,
    ) -> Result<WorkoutResult> {
        let text = result_text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyField("result").into());
        }

        let now = Utc::now();
        let personal_records: Vec<PersonalRecord> = summary
            .completed_movements
            .iter()
            .map(|(_, name)| PersonalRecord {
                id: new_id(),
                exercise: name.clone(),
                value: PR_PLACEHOLDER_VALUE.to_string(),
                date: now,
                workout_id: Some(summary.workout_id.clone()),
                workout_name: Some(summary.workout_name.clone()),
            })
            .collect();

        let result = WorkoutResult {
            id: new_id(),
            workout_id: summary.workout_id.clone(),
            workout_name: summary.workout_name.clone(),
            result: text.to_string(),
            duration: summary.elapsed_secs,
            completed_at: now,
            rx: details.rx,
            notes: details
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            personal_records: personal_records.clone(),
        };

        self.history.insert(0, result.clone());
        self.persist(HISTORY_KEY);

        if !personal_records.is_empty() {
            for pr in personal_records {
                self.personal_records.insert(0, pr);
            }
            self.persist(PERSONAL_RECORDS_KEY);
        }

        tracing::info!(
            result_id = %result.id,
            workout_id = %result.workout_id,
            duration = result.duration,
            personal_records = result.personal_records.len(),
            "workout result recorded"
        );
        Ok(result)
    }

    /// Add a standalone personal record. Both fields are trimmed and must be
    /// non-empty.
    pub fn add_personal_record(&mut self, exercise: &str, value: &str) -> Result<PersonalRecord> {
        let exercise = exercise.trim();
        let value = value.trim();
        if exercise.is_empty() {
            return Err(ValidationError::EmptyField("exercise").into());
        }
        if value.is_empty() {
            return Err(ValidationError::EmptyField("value").into());
        }

        let record = PersonalRecord {
            id: new_id(),
            exercise: exercise.to_string(),
            value: value.to_string(),
            date: Utc::now(),
            workout_id: None,
            workout_name: None,
        };
        self.personal_records.insert(0, record.clone());
        self.persist(PERSONAL_RECORDS_KEY);
        tracing::info!(record_id = %record.id, exercise = %record.exercise, "personal record added");
        Ok(record)
    }

    /// Remove the record with `id`. Unknown ids are a no-op returning false.
    pub fn delete_personal_record(&mut self, id: &str) -> bool {
        let before = self.personal_records.len();
        self.personal_records.retain(|pr| pr.id != id);
        let removed = self.personal_records.len() != before;
        if removed {
            self.persist(PERSONAL_RECORDS_KEY);
            tracing::info!(record_id = id, "personal record deleted");
        } else {
            tracing::debug!(record_id = id, "no personal record to delete");
        }
        removed
    }

    /// Write both lists to storage.
    pub fn save(&self) -> Result<()> {
        save_json(self.storage.as_ref(), HISTORY_KEY, &self.history)?;
        save_json(self.storage.as_ref(), PERSONAL_RECORDS_KEY, &self.personal_records)?;
        Ok(())
    }

    fn persist(&self, key: &'static str) {
        let outcome = match key {
            HISTORY_KEY => save_json(self.storage.as_ref(), key, &self.history),
            _ => save_json(self.storage.as_ref(), key, &self.personal_records),
        };
        if let Err(e) = outcome {
            tracing::error!(key, error = %e, "failed to save");
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, StorageError};
    use crate::storage::MemoryStore;

    fn summary(elapsed_secs: u64, completed: &[(&str, &str)]) -> SessionSummary {
        SessionSummary {
            workout_id: "1".into(),
            workout_name: "Fran".into(),
            elapsed_secs,
            completed_movements: completed
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }

    fn store() -> (Rc<MemoryStore>, WorkoutStore) {
        let storage = Rc::new(MemoryStore::new());
        let store = WorkoutStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn records_result_at_front_of_history() {
        let (_, mut store) = store();
        store
            .record_result(&summary(30, &[]), "older", ResultDetails::default())
            .unwrap();
        let result = store
            .record_result(&summary(90, &[]), "12:45", ResultDetails::default())
            .unwrap();

        assert_eq!(result.duration, 90);
        assert_eq!(result.result, "12:45");
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.history()[0], result);
        assert_eq!(store.last_workout(), Some(&result));
    }

    #[test]
    fn blank_result_is_rejected_without_mutation() {
        let (storage, mut store) = store();
        for text in ["", "   ", "\n\t"] {
            let err = store
                .record_result(&summary(90, &[("a", "A")]), text, ResultDetails::default())
                .unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::EmptyField("result"))
            ));
        }
        assert!(store.history().is_empty());
        assert!(store.personal_records().is_empty());
        assert!(storage.get(HISTORY_KEY).unwrap().is_none());
    }

    #[test]
    fn completed_movements_become_placeholder_records() {
        let (_, mut store) = store();
        let result = store
            .record_result(
                &summary(252, &[("fran-thrusters", "Thrusters"), ("fran-pull-ups", "Pull-ups")]),
                " 4:12 ",
                ResultDetails {
                    rx: true,
                    notes: Some("  ".into()),
                },
            )
            .unwrap();

        assert_eq!(result.result, "4:12");
        assert!(result.rx);
        assert!(result.notes.is_none());
        assert_eq!(result.personal_records.len(), 2);
        assert!(result.personal_records.iter().all(PersonalRecord::is_placeholder));
        assert_eq!(store.personal_records().len(), 2);
        let exercises: Vec<&str> = store
            .personal_records()
            .iter()
            .map(|pr| pr.exercise.as_str())
            .collect();
        assert!(exercises.contains(&"Thrusters"));
        assert!(exercises.contains(&"Pull-ups"));
    }

    #[test]
    fn mutations_are_persisted_and_reloaded() {
        let (storage, mut store) = store();
        store
            .record_result(&summary(90, &[("a", "A")]), "12:45", ResultDetails::default())
            .unwrap();
        store.add_personal_record("Deadlift", "180kg").unwrap();

        let reloaded = WorkoutStore::load(storage);
        assert_eq!(reloaded.history(), store.history());
        assert_eq!(reloaded.personal_records(), store.personal_records());
        assert_eq!(reloaded.personal_records()[0].exercise, "Deadlift");
    }

    #[test]
    fn add_personal_record_validates_fields() {
        let (_, mut store) = store();
        assert!(matches!(
            store.add_personal_record(" ", "100kg"),
            Err(CoreError::Validation(ValidationError::EmptyField("exercise")))
        ));
        assert!(matches!(
            store.add_personal_record("Snatch", ""),
            Err(CoreError::Validation(ValidationError::EmptyField("value")))
        ));
        assert!(store.personal_records().is_empty());

        let pr = store.add_personal_record(" Snatch ", " 80kg ").unwrap();
        assert_eq!(pr.exercise, "Snatch");
        assert_eq!(pr.value, "80kg");
        assert!(!pr.is_placeholder());
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let (_, mut store) = store();
        let a = store.add_personal_record("A", "1").unwrap();
        let b = store.add_personal_record("B", "2").unwrap();
        let c = store.add_personal_record("C", "3").unwrap();

        assert!(store.delete_personal_record(&b.id));
        assert_eq!(store.personal_records(), &[c.clone(), a.clone()]);

        assert!(!store.delete_personal_record("missing"));
        assert_eq!(store.personal_records(), &[c, a]);
    }

    #[test]
    fn malformed_blobs_load_as_empty() {
        let storage = Rc::new(MemoryStore::new());
        storage.set(HISTORY_KEY, "not json").unwrap();
        storage.set(PERSONAL_RECORDS_KEY, "{\"id\": 3}").unwrap();
        let store = WorkoutStore::load(storage);
        assert!(store.history().is_empty());
        assert!(store.personal_records().is_empty());
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Locked)
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Locked)
        }
    }

    #[test]
    fn save_failures_keep_in_memory_state() {
        let mut store = WorkoutStore::load(Rc::new(ReadOnlyStore));
        let result = store
            .record_result(&summary(10, &[]), "done", ResultDetails::default())
            .unwrap();
        assert_eq!(store.history()[0], result);
        assert!(matches!(
            store.save(),
            Err(CoreError::Storage(StorageError::Locked))
        ));
    }
}
