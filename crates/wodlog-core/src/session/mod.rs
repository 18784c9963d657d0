mod ticker;
mod timer;
mod tracker;
mod workout_session;

pub use ticker::{TickSource, Ticker, DEFAULT_TICK_PERIOD};
pub use timer::{format_elapsed, SessionState, SessionTimer, DEFAULT_HAPTIC_INTERVAL_SECS};
pub use tracker::MovementTracker;
pub use workout_session::WorkoutSession;
