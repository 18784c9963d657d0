use std::collections::BTreeSet;

/// Movements the user has ticked off during the active session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementTracker {
    completed: BTreeSet<String>,
}

impl MovementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present. Returns whether the
    /// movement is completed afterwards.
    pub fn toggle(&mut self, movement_id: &str) -> bool {
        if self.completed.remove(movement_id) {
            false
        } else {
            self.completed.insert(movement_id.to_string());
            true
        }
    }

    pub fn is_completed(&self, movement_id: &str) -> bool {
        self.completed.contains(movement_id)
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Purely cosmetic; never gates a transition.
    pub fn all_completed(&self, movement_count: usize) -> bool {
        self.completed.len() == movement_count
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }
}
