//! Device-side collaborators: navigation and haptic feedback.
//!
//! The core never renders anything. It asks a [`Navigator`] to move between
//! routes and a [`Haptics`] implementation to buzz; frontends plug in their
//! own implementations.

use std::cell::RefCell;
use std::fmt;

/// Top-level destinations the core can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Signed-in tab root.
    Tabs,
    /// Sign-in / register root.
    Auth,
    Progress,
    Workout(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Tabs => "/(tabs)".to_string(),
            Route::Auth => "/(auth)".to_string(),
            Route::Progress => "/(tabs)/progress".to_string(),
            Route::Workout(id) => format!("/workout/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub trait Navigator {
    fn push(&self, route: Route);
    /// Replace the current route without keeping it in the back stack.
    fn replace(&self, route: Route);
}

/// Fire-and-forget haptic feedback.
pub trait Haptics {
    fn pulse(&self);
}

/// Navigator that only logs transitions.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn push(&self, route: Route) {
        tracing::info!(route = %route, "navigate push");
    }

    fn replace(&self, route: Route) {
        tracing::info!(route = %route, "navigate replace");
    }
}

#[derive(Debug, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn pulse(&self) {}
}

/// Navigation action captured by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Push(Route),
    Replace(Route),
}

/// Keeps every navigation request in memory.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: RefCell<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.history.borrow_mut().push(Navigation::Push(route));
    }

    fn replace(&self, route: Route) {
        self.history.borrow_mut().push(Navigation::Replace(route));
    }
}

/// Counts pulses.
#[derive(Debug, Default)]
pub struct CountingHaptics {
    pulses: std::cell::Cell<u32>,
}

impl CountingHaptics {
    pub fn pulses(&self) -> u32 {
        self.pulses.get()
    }
}

impl Haptics for CountingHaptics {
    fn pulse(&self) {
        self.pulses.set(self.pulses.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Tabs.path(), "/(tabs)");
        assert_eq!(Route::Auth.path(), "/(auth)");
        assert_eq!(Route::Workout("comp-01".into()).to_string(), "/workout/comp-01");
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        nav.push(Route::Workout("1".into()));
        nav.replace(Route::Tabs);
        assert_eq!(
            nav.history(),
            vec![
                Navigation::Push(Route::Workout("1".into())),
                Navigation::Replace(Route::Tabs),
            ]
        );
        assert_eq!(nav.last(), Some(Navigation::Replace(Route::Tabs)));
    }
}
