//! Session timer state machine.
//!
//! The timer counts whole seconds. It does not own a clock: every call to
//! [`SessionTimer::tick`] adds one second while running. The owning
//! [`WorkoutSession`](super::WorkoutSession) drives ticks from a scheduled
//! task.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused -> Finished
//!   ^________________________________|  (reset, from any state)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SessionError;
use crate::events::Event;

pub const DEFAULT_HAPTIC_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Paused,
    /// Timer stopped for good; waiting for the result to be captured.
    Finished,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::Finished => "finished",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    state: SessionState,
    elapsed_secs: u64,
    /// Seconds between haptic pulses. Zero disables them.
    haptic_interval_secs: u64,
}

impl SessionTimer {
    pub fn new(haptic_interval_secs: u64) -> Self {
        Self {
            state: SessionState::Idle,
            elapsed_secs: 0,
            haptic_interval_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Idle/Paused -> Running. Returns `Ok(None)` if already running.
    pub fn start(&mut self, workout_id: &str) -> Result<Option<Event>, SessionError> {
        match self.state {
            SessionState::Idle | SessionState::Paused => {
                self.state = SessionState::Running;
                Ok(Some(Event::SessionStarted {
                    workout_id: workout_id.to_string(),
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                }))
            }
            SessionState::Running => Ok(None),
            SessionState::Finished => Err(SessionError::InvalidTransition {
                from: self.state,
                action: "start",
            }),
        }
    }

    /// Running -> Paused. Any other state is left alone.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                Some(Event::SessionPaused {
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Back to Idle with zero elapsed time, from any state.
    pub fn reset(&mut self) -> Event {
        self.state = SessionState::Idle;
        self.elapsed_secs = 0;
        Event::SessionReset { at: Utc::now() }
    }

    /// Running/Paused -> Finished.
    pub fn finish(
        &mut self,
        workout_id: &str,
        completed_movements: usize,
    ) -> Result<Event, SessionError> {
        match self.state {
            SessionState::Running | SessionState::Paused => {
                self.state = SessionState::Finished;
                Ok(Event::SessionFinished {
                    workout_id: workout_id.to_string(),
                    elapsed_secs: self.elapsed_secs,
                    completed_movements,
                    at: Utc::now(),
                })
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "finish",
            }),
        }
    }

    /// Add time measured outside this timer, e.g. when logging a workout
    /// after the fact. No minute events are produced for credited time.
    pub fn credit(&mut self, secs: u64) -> Result<(), SessionError> {
        match self.state {
            SessionState::Running | SessionState::Paused => {
                self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "credit time to",
            }),
        }
    }

    /// Advance by one second. Ignored unless running.
    ///
    /// Returns `Some(Event::MinuteElapsed)` when elapsed time lands on a
    /// multiple of the haptic interval.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);

        if self.haptic_interval_secs > 0 && self.elapsed_secs % self.haptic_interval_secs == 0 {
            return Some(Event::MinuteElapsed {
                minute: self.elapsed_secs / self.haptic_interval_secs,
                elapsed_secs: self.elapsed_secs,
                at: Utc::now(),
            });
        }
        None
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_HAPTIC_INTERVAL_SECS)
    }
}

/// `MM:SS`, minutes are not capped at 59.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
