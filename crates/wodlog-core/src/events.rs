use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionState;

/// Produced by every session state change and movement toggle.
/// The CLI prints them; tests assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        workout_id: String,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    SessionFinished {
        workout_id: String,
        elapsed_secs: u64,
        completed_movements: usize,
        at: DateTime<Utc>,
    },
    /// A full minute of running time has elapsed; the haptic pulse fires
    /// alongside this event.
    MinuteElapsed {
        minute: u64,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    MovementToggled {
        movement_id: String,
        completed: bool,
        all_completed: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SessionState,
        workout_id: String,
        elapsed_secs: u64,
        elapsed_display: String,
        completed_movements: Vec<String>,
        all_completed: bool,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::SessionPaused {
            elapsed_secs: 42,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SessionPaused");
        assert_eq!(json["elapsed_secs"], 42);
    }
}
