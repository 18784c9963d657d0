//! Application context: the stores and collaborators a frontend works with.
//!
//! Built once at startup and passed around explicitly. Lifecycle:
//!
//! ```text
//! Init -> Ready -> (mutations) -> TornDown
//! ```

use chrono::NaiveDate;
use std::rc::Rc;

use crate::auth::{AuthStore, Authenticator, MockAuthenticator};
use crate::catalog::{Catalog, Workout};
use crate::error::{LifecycleError, Result};
use crate::platform::{Haptics, LogNavigator, Navigator, NoopHaptics, Route};
use crate::records::{ProgressStats, WorkoutStore};
use crate::session::{TickSource, WorkoutSession};
use crate::storage::{Config, Database, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Init,
    Ready,
    TornDown,
}

pub struct AppContext {
    state: AppState,
    config: Config,
    catalog: Catalog,
    workouts: WorkoutStore,
    auth: AuthStore,
    navigator: Rc<dyn Navigator>,
    haptics: Rc<dyn Haptics>,
}

/// Collaborators for [`AppContext::init`]. Defaults to in-process mocks.
pub struct AppParts {
    pub storage: Rc<dyn KeyValueStore>,
    pub catalog: Catalog,
    pub authenticator: Box<dyn Authenticator>,
    pub navigator: Rc<dyn Navigator>,
    pub haptics: Rc<dyn Haptics>,
}

impl AppParts {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            catalog: Catalog::builtin(),
            authenticator: Box::new(MockAuthenticator),
            navigator: Rc::new(LogNavigator),
            haptics: Rc::new(NoopHaptics),
        }
    }

    /// SQLite storage and catalog as named by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let db = Database::open(&config.database_path()?)?;
        let catalog = match config.catalog_path() {
            Some(path) => Catalog::from_json_file(&path)?,
            None => Catalog::builtin(),
        };
        Ok(Self {
            catalog,
            ..Self::new(Rc::new(db))
        })
    }
}

impl AppContext {
    /// Load persisted state and move to `Ready`.
    pub fn init(config: Config, parts: AppParts) -> Self {
        let AppParts {
            storage,
            catalog,
            authenticator,
            navigator,
            haptics,
        } = parts;

        let mut ctx = Self {
            state: AppState::Init,
            config,
            catalog,
            workouts: WorkoutStore::load(storage.clone()),
            auth: AuthStore::new(storage, authenticator, navigator.clone()),
            navigator,
            haptics,
        };
        ctx.auth.init();
        ctx.state = AppState::Ready;
        tracing::debug!(workouts = ctx.catalog.len(), "application context ready");
        ctx
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn workouts(&self) -> Result<&WorkoutStore> {
        self.ensure_ready()?;
        Ok(&self.workouts)
    }

    pub fn workouts_mut(&mut self) -> Result<&mut WorkoutStore> {
        self.ensure_ready()?;
        Ok(&mut self.workouts)
    }

    pub fn auth(&self) -> Result<&AuthStore> {
        self.ensure_ready()?;
        Ok(&self.auth)
    }

    pub fn auth_mut(&mut self) -> Result<&mut AuthStore> {
        self.ensure_ready()?;
        Ok(&mut self.auth)
    }

    /// Navigate to the progress screen and compute its statistics.
    pub fn progress(&self) -> Result<ProgressStats> {
        let stats = self.workouts()?.stats();
        self.navigator.push(Route::Progress);
        Ok(stats)
    }

    pub fn today_wod(&self, date: NaiveDate) -> &Workout {
        self.catalog.workout_of_the_day(date)
    }

    /// Resolve a workout, navigate to it and open a fresh session.
    pub fn open_session(&self, workout_id: &str) -> Result<WorkoutSession> {
        self.open_session_with(workout_id, self.config.session.tick_source())
    }

    pub fn open_session_with(
        &self,
        workout_id: &str,
        tick_source: TickSource,
    ) -> Result<WorkoutSession> {
        self.ensure_ready()?;
        let workout = self.catalog.require(workout_id)?.clone();
        self.navigator.push(Route::Workout(workout.id.clone()));

        let session = &self.config.session;
        let haptics: Rc<dyn Haptics> = if session.haptics_enabled {
            self.haptics.clone()
        } else {
            Rc::new(NoopHaptics)
        };
        Ok(WorkoutSession::new(
            workout,
            tick_source,
            session.haptic_interval_secs,
            haptics,
        ))
    }

    /// Flush the stores and refuse further work.
    pub fn teardown(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.state = AppState::TornDown;
        self.workouts.save()?;
        tracing::debug!("application context torn down");
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), LifecycleError> {
        match self.state {
            AppState::TornDown => Err(LifecycleError::TornDown),
            _ => Ok(()),
        }
    }
}
