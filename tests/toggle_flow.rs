//! End to end behavior of the theme toggle across the app and io threads.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;

use starter_tui::app::state::AppState;
use starter_tui::app::App;
use starter_tui::config::{ConfigPaths, SiteConfig};
use starter_tui::io::handler::IoAsyncHandler;
use starter_tui::io::IoEvent;
use starter_tui::locales::Locale;
use starter_tui::theme::{store, ThemePreference, TRANSITION_DURATION};

struct Harness {
    app: Arc<Mutex<App>>,
    handler: IoAsyncHandler,
    io_rx: UnboundedReceiver<IoEvent>,
    paths: ConfigPaths,
    _dir: TempDir,
}

fn harness(theme_override: Option<ThemePreference>) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let paths = ConfigPaths {
        site_file_path: dir.path().join("site.yml"),
        preference_file_path: dir.path().join("preference.yml"),
        themes_dir: dir.path().join("themes"),
    };
    let (io_tx, io_rx) = tokio::sync::mpsc::unbounded_channel();
    let state = AppState::new(
        SiteConfig::default(),
        paths.themes_dir.clone(),
        theme_override,
        Locale::En,
    );
    let app = Arc::new(Mutex::new(App::new(io_tx, state)));
    let handler = IoAsyncHandler::new(Arc::clone(&app), paths.clone());
    Harness {
        app,
        handler,
        io_rx,
        paths,
        _dir: dir,
    }
}

/// Run the io thread's next turn: receive one dispatched event and handle it.
async fn run_io_turn(h: &mut Harness) {
    let event = h.io_rx.recv().await.expect("expected a dispatched io event");
    h.handler.handle_io_event(event).await;
}

/// Give spawned reset timers a chance to run after time has advanced.
async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn initialize_establishes_the_override_preference() {
    let mut h = harness(Some(ThemePreference::Dark));
    h.app.lock().await.dispatch_to_io(IoEvent::Initialize);
    run_io_turn(&mut h).await;

    let app = h.app.lock().await;
    assert_eq!(app.state.switcher.current(), ThemePreference::Dark);
    assert!(!app.state.switcher.is_transitioning());
}

#[tokio::test]
async fn persisted_preference_seeds_the_next_run() {
    let mut h = harness(None);
    store::save_preference(&h.paths.preference_file_path, ThemePreference::Dark).unwrap();

    h.app.lock().await.dispatch_to_io(IoEvent::Initialize);
    run_io_turn(&mut h).await;

    assert_eq!(
        h.app.lock().await.state.switcher.current(),
        ThemePreference::Dark
    );
}

#[tokio::test(start_paused = true)]
async fn toggle_defers_flip_and_resets_flag_after_delay() {
    let mut h = harness(Some(ThemePreference::Light));
    h.app.lock().await.dispatch_to_io(IoEvent::Initialize);
    run_io_turn(&mut h).await;

    h.app.lock().await.toggle_theme();
    {
        let app = h.app.lock().await;
        // The flag is raised synchronously; the value does not change
        // until the io thread's next turn
        assert!(app.state.switcher.is_transitioning());
        assert_eq!(app.state.switcher.current(), ThemePreference::Light);
    }

    run_io_turn(&mut h).await;
    {
        let app = h.app.lock().await;
        assert_eq!(app.state.switcher.current(), ThemePreference::Dark);
        assert!(app.state.switcher.is_transitioning());
    }

    // The flip is also written back to the preference store
    assert_eq!(
        store::load_preference(&h.paths.preference_file_path).unwrap(),
        ThemePreference::Dark
    );

    tokio::time::sleep(TRANSITION_DURATION + Duration::from_millis(10)).await;
    settle().await;
    assert!(!h.app.lock().await.state.switcher.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn rapid_second_toggle_outlives_the_first_reset() {
    let mut h = harness(Some(ThemePreference::Light));
    h.app.lock().await.dispatch_to_io(IoEvent::Initialize);
    run_io_turn(&mut h).await;

    h.app.lock().await.toggle_theme();
    run_io_turn(&mut h).await; // Dark, first reset due in 1000ms

    tokio::time::sleep(Duration::from_millis(500)).await;
    h.app.lock().await.toggle_theme();
    run_io_turn(&mut h).await; // Light, second reset due in 1000ms

    // The first reset fires at 1000ms but must not lower the flag
    tokio::time::sleep(Duration::from_millis(600)).await;
    settle().await;
    assert!(h.app.lock().await.state.switcher.is_transitioning());

    // The second reset fires at 1500ms and ends the transition
    tokio::time::sleep(Duration::from_millis(500)).await;
    settle().await;
    let app = h.app.lock().await;
    assert!(!app.state.switcher.is_transitioning());
    assert_eq!(app.state.switcher.current(), ThemePreference::Light);
}

#[tokio::test]
async fn double_toggle_returns_to_the_initial_preference() {
    let mut h = harness(Some(ThemePreference::Dark));
    h.app.lock().await.dispatch_to_io(IoEvent::Initialize);
    run_io_turn(&mut h).await;

    for _ in 0..2 {
        h.app.lock().await.toggle_theme();
        run_io_turn(&mut h).await;
    }

    assert_eq!(
        h.app.lock().await.state.switcher.current(),
        ThemePreference::Dark
    );
}
