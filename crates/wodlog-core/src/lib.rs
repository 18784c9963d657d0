//! # wodlog Core Library
//!
//! Business logic for the wodlog workout tracker. Frontends (the bundled
//! CLI, or any other shell) stay thin: they render, collect input and plug
//! in device collaborators, while everything stateful lives here.
//!
//! ## Architecture
//!
//! - **Catalog**: static workout definitions, lookup, filtering and the
//!   workout-of-the-day rotation
//! - **Session**: a seconds-counting state machine driven by a cancellable
//!   tick task, plus the set of completed movements
//! - **Records**: workout history and personal records, saved after every
//!   mutation
//! - **Storage**: key-value persistence (SQLite or in-memory) and TOML
//!   configuration
//! - **Auth**: pluggable authenticator and the persisted user
//!
//! ## Key Components
//!
//! - [`AppContext`]: owns the stores for the lifetime of the application
//! - [`WorkoutSession`]: one attempt at a workout
//! - [`WorkoutStore`]: history and personal records
//! - [`Catalog`]: workout definitions

pub mod app;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod events;
pub mod platform;
pub mod records;
pub mod session;
pub mod storage;

pub use app::{AppContext, AppParts, AppState};
pub use auth::{AuthStore, Authenticator, Credentials, MockAuthenticator, User};
pub use catalog::{Catalog, Equipment, Movement, Workout, WorkoutFilter, WorkoutType};
pub use error::{
    AuthError, ConfigError, CoreError, LifecycleError, SerializationError, SessionError,
    StorageError, ValidationError,
};
pub use events::Event;
pub use platform::{Haptics, Navigator, Route};
pub use records::{PersonalRecord, ProgressStats, WorkoutResult, WorkoutStore};
pub use session::{SessionState, TickSource, WorkoutSession};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
