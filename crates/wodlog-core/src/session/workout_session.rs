//! An attempt at one workout: timer, completed movements and result capture.

use chrono::Utc;
use std::rc::Rc;

use super::ticker::{TickSource, Ticker};
use super::timer::{format_elapsed, SessionState, SessionTimer};
use super::tracker::MovementTracker;
use crate::catalog::Workout;
use crate::error::{CoreError, Result, SessionError};
use crate::events::Event;
use crate::platform::Haptics;
use crate::records::{ResultDetails, SessionSummary, WorkoutResult, WorkoutStore};

/// In-memory session for the workout screen.
///
/// Owns the tick task: it is spawned on `start` and cancelled on `pause`,
/// `reset`, `finish` and drop. Nothing here is persisted until a result is
/// saved.
pub struct WorkoutSession {
    workout: Workout,
    timer: SessionTimer,
    tracker: MovementTracker,
    tick_source: TickSource,
    ticker: Option<Ticker>,
    haptics: Rc<dyn Haptics>,
    recorded: bool,
}

impl WorkoutSession {
    pub fn new(
        workout: Workout,
        tick_source: TickSource,
        haptic_interval_secs: u64,
        haptics: Rc<dyn Haptics>,
    ) -> Self {
        Self {
            workout,
            timer: SessionTimer::new(haptic_interval_secs),
            tracker: MovementTracker::new(),
            tick_source,
            ticker: None,
            haptics,
            recorded: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn state(&self) -> SessionState {
        self.timer.state()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_completed(&self, movement_id: &str) -> bool {
        self.tracker.is_completed(movement_id)
    }

    pub fn all_movements_completed(&self) -> bool {
        self.tracker.all_completed(self.workout.movements.len())
    }

    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.timer.state(),
            workout_id: self.workout.id.clone(),
            elapsed_secs: self.timer.elapsed_secs(),
            elapsed_display: format_elapsed(self.timer.elapsed_secs()),
            completed_movements: self.tracker.ids().map(str::to_string).collect(),
            all_completed: self.all_movements_completed(),
            at: Utc::now(),
        }
    }

    /// Summary handed to the result recorder, completed movements in
    /// workout order.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            workout_id: self.workout.id.clone(),
            workout_name: self.workout.name.clone(),
            elapsed_secs: self.timer.elapsed_secs(),
            completed_movements: self
                .workout
                .movements
                .iter()
                .filter(|m| self.tracker.is_completed(&m.id))
                .map(|m| (m.id.clone(), m.name.clone()))
                .collect(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Result<Option<Event>> {
        let event = self.timer.start(&self.workout.id)?;
        if event.is_some() {
            if let TickSource::Scheduled(period) = self.tick_source {
                self.ticker = Some(Ticker::spawn(period));
            }
            tracing::debug!(workout_id = %self.workout.id, elapsed = self.elapsed_secs(), "session started");
        }
        Ok(event)
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.timer.pause();
        if event.is_some() {
            self.stop_ticking();
            tracing::debug!(elapsed = self.elapsed_secs(), "session paused");
        }
        event
    }

    /// Back to a fresh attempt: zero time, no completed movements.
    pub fn reset(&mut self) -> Event {
        self.stop_ticking();
        self.tracker.reset();
        self.recorded = false;
        tracing::debug!(workout_id = %self.workout.id, "session reset");
        self.timer.reset()
    }

    /// Stop the clock and open result capture.
    pub fn finish(&mut self) -> Result<Event> {
        let event = self.timer.finish(&self.workout.id, self.tracker.len())?;
        self.stop_ticking();
        tracing::debug!(elapsed = self.elapsed_secs(), "session finished");
        Ok(event)
    }

    /// Mark or unmark a movement of this workout as done.
    pub fn toggle_movement(&mut self, movement_id: &str) -> Result<Event> {
        if self.workout.movement(movement_id).is_none() {
            return Err(CoreError::not_found("movement", movement_id));
        }
        let completed = self.tracker.toggle(movement_id);
        Ok(Event::MovementToggled {
            movement_id: movement_id.to_string(),
            completed,
            all_completed: self.all_movements_completed(),
            at: Utc::now(),
        })
    }

    /// Add externally measured time to a started session. Haptics stay
    /// silent for credited time.
    pub fn credit_elapsed(&mut self, secs: u64) -> Result<()> {
        self.timer.credit(secs)?;
        tracing::debug!(secs, elapsed = self.elapsed_secs(), "time credited");
        Ok(())
    }

    /// Apply one tick immediately, without waiting on the ticker.
    pub fn tick_now(&mut self) -> Option<Event> {
        let event = self.timer.tick();
        if event.is_some() {
            self.haptics.pulse();
        }
        event
    }

    /// Wait for the next scheduled tick and apply it.
    ///
    /// Never resolves while the session is not ticking, so it can sit in a
    /// `select!` next to input handling.
    pub async fn next_tick(&mut self) -> Option<Event> {
        let received = match self.ticker.as_mut() {
            Some(ticker) => ticker.recv().await,
            None => std::future::pending().await,
        };
        if received.is_none() {
            self.ticker = None;
            return std::future::pending().await;
        }
        self.tick_now()
    }

    /// Save the result of a finished session.
    ///
    /// Allowed once per finished session. Empty result text is rejected and
    /// the session stays open for another attempt.
    pub fn save_result(
        &mut self,
        store: &mut WorkoutStore,
        result_text: &str,
        details: ResultDetails,
    ) -> Result<WorkoutResult> {
        if self.timer.state() != SessionState::Finished {
            return Err(SessionError::InvalidTransition {
                from: self.timer.state(),
                action: "save the result of",
            }
            .into());
        }
        if self.recorded {
            return Err(SessionError::AlreadyRecorded.into());
        }
        let result = store.record_result(&self.summary(), result_text, details)?;
        self.recorded = true;
        Ok(result)
    }

    fn stop_ticking(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
