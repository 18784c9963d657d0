//! Integration tests for the full workout flow against SQLite storage.

use std::rc::Rc;
use std::time::Duration;

use wodlog_core::platform::{CountingHaptics, Navigation, RecordingNavigator};
use wodlog_core::records::ResultDetails;
use wodlog_core::{
    AppContext, AppParts, Config, CoreError, Database, Event, Route, SessionState, TickSource,
};

fn context(db_path: &std::path::Path) -> (Rc<RecordingNavigator>, AppContext) {
    let db = Database::open(db_path).unwrap();
    let nav = Rc::new(RecordingNavigator::new());
    let parts = AppParts {
        navigator: nav.clone(),
        ..AppParts::new(Rc::new(db))
    };
    (nav, AppContext::init(Config::default(), parts))
}

#[test]
fn test_recorded_result_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("wodlog.db");

    let (nav, mut ctx) = context(&db_path);
    let mut session = ctx.open_session_with("1", TickSource::Manual).unwrap();
    assert_eq!(
        nav.last(),
        Some(Navigation::Push(Route::Workout("1".into())))
    );

    session.start().unwrap();
    for _ in 0..765 {
        session.tick_now();
    }
    session.toggle_movement("fran-thrusters").unwrap();
    session.toggle_movement("fran-pull-ups").unwrap();
    assert!(session.all_movements_completed());
    session.finish().unwrap();

    let result = session
        .save_result(ctx.workouts_mut().unwrap(), "12:45", ResultDetails::default())
        .unwrap();
    assert_eq!(result.duration, 765);
    ctx.teardown().unwrap();

    // Reopen on the same file
    let (_, ctx) = context(&db_path);
    let store = ctx.workouts().unwrap();
    let last = store.last_workout().unwrap();
    assert_eq!(last.id, result.id);
    assert_eq!(last.result, "12:45");
    let exercises: Vec<&str> = store
        .personal_records()
        .iter()
        .map(|pr| pr.exercise.as_str())
        .collect();
    assert_eq!(exercises.len(), 2);
    assert!(exercises.contains(&"Thrusters"));
    assert!(exercises.contains(&"Pull-ups"));

    let stats = store.stats();
    assert_eq!(stats.total_workouts, 1);
    assert_eq!(stats.active_days, 1);
}

#[test]
fn test_unknown_workout_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (nav, ctx) = context(&dir.path().join("wodlog.db"));
    assert!(matches!(
        ctx.open_session("nonexistent-id"),
        Err(CoreError::NotFound { kind: "workout", .. })
    ));
    assert!(nav.history().is_empty());
}

#[test]
fn test_sign_in_persists_user() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("wodlog.db");

    let (nav, mut ctx) = context(&db_path);
    ctx.auth_mut()
        .unwrap()
        .register("Jane Doe", "jane@example.com", "secret1")
        .unwrap();
    assert_eq!(nav.last(), Some(Navigation::Replace(Route::Tabs)));
    ctx.teardown().unwrap();

    let (_, ctx) = context(&db_path);
    let user = ctx.auth().unwrap().user().unwrap();
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.initials(), "JD");
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_session_pulses_each_minute() {
    let haptics = Rc::new(CountingHaptics::default());
    let parts = AppParts {
        haptics: haptics.clone(),
        ..AppParts::new(Rc::new(Database::open_memory().unwrap()))
    };
    let ctx = AppContext::init(Config::default(), parts);
    let mut session = ctx
        .open_session_with("2", TickSource::Scheduled(Duration::from_secs(1)))
        .unwrap();

    session.start().unwrap();
    let mut minutes = Vec::new();
    for _ in 0..120 {
        if let Some(Event::MinuteElapsed { minute, .. }) = session.next_tick().await {
            minutes.push(minute);
        }
    }
    assert_eq!(minutes, vec![1, 2]);
    assert_eq!(haptics.pulses(), 2);
    assert_eq!(session.elapsed_secs(), 120);

    session.pause();
    assert_eq!(session.state(), SessionState::Paused);
    assert!(!session.is_ticking());
}
