//! Scroll-driven refetching through the engine's poll loop.

use navlist::engine::{Engine, EngineConfig};
use navlist_core::contract::DataSource;
use navlist_core::window::FetchWindow;
use navlist_harness::{FakeDataSource, FakeSurface};
use web_time::{Duration, Instant};

const ITEM_HEIGHT: f32 = 35.0;
const CLIENT_HEIGHT: f32 = 350.0;

fn seeded_engine(
    total: usize,
) -> (Engine<FakeDataSource, FakeSurface>, FakeDataSource) {
    let surface = FakeSurface::new(ITEM_HEIGHT, CLIENT_HEIGHT);
    let mut source = FakeDataSource::new(total).mirrored_to(&surface);
    let first = source
        .fetch_window(FetchWindow::around(0, 30, 10, total))
        .expect("seed fetch");
    let mut engine = Engine::with_config(
        source.clone(),
        surface,
        EngineConfig {
            viewport_capacity: 30,
            ..EngineConfig::default()
        },
    );
    engine.apply_search_results(first);
    (engine, source)
}

/// Scroll position that puts `index` at the vertical middle of the viewport.
fn scroll_to_middle(index: usize) -> f32 {
    index as f32 * ITEM_HEIGHT - CLIENT_HEIGHT / 2.0
}

#[test]
fn debounced_scroll_refetches_around_the_viewport_middle() {
    let (mut engine, source) = seeded_engine(1000);
    let start = Instant::now();

    engine.on_scroll(scroll_to_middle(405), CLIENT_HEIGHT, start);

    // Before the deadline nothing happens.
    assert!(!engine.poll(start + Duration::from_millis(10)).unwrap());
    assert_eq!(source.fetch_count(), 1);

    assert!(engine.poll(start + Duration::from_millis(60)).unwrap());
    assert_eq!(source.fetch_count(), 2);
    assert_eq!(engine.state().visible_start, 405 - 25);
}

#[test]
fn scroll_within_the_current_window_is_skipped() {
    let (mut engine, source) = seeded_engine(1000);
    let start = Instant::now();

    // Middle index 5 proposes the window already loaded at start 0.
    engine.on_scroll(0.0, CLIENT_HEIGHT, start);

    assert!(!engine.poll(start + Duration::from_millis(60)).unwrap());
    assert_eq!(source.fetch_count(), 1);
}

#[test]
fn small_shifts_are_absorbed_by_hysteresis() {
    let (mut engine, source) = seeded_engine(1000);
    let start = Instant::now();

    // Middle index 28 proposes start 3 against a current start of 0;
    // a shift of 3 is below the quarter-viewport threshold of 7.
    engine.on_scroll(scroll_to_middle(28), CLIENT_HEIGHT, start);

    assert!(!engine.poll(start + Duration::from_millis(60)).unwrap());
    assert_eq!(source.fetch_count(), 1);
}

#[test]
fn rapid_scrolling_keeps_pushing_the_deadline() {
    let (mut engine, _source) = seeded_engine(1000);
    let start = Instant::now();

    engine.on_scroll(scroll_to_middle(200), CLIENT_HEIGHT, start);
    engine.on_scroll(
        scroll_to_middle(405),
        CLIENT_HEIGHT,
        start + Duration::from_millis(40),
    );

    // 60 ms in: the first deadline passed but the second event re-armed.
    assert!(!engine.poll(start + Duration::from_millis(60)).unwrap());
    assert!(engine.poll(start + Duration::from_millis(95)).unwrap());
    assert_eq!(engine.state().visible_start, 405 - 25);
}

#[test]
fn scroll_with_no_results_never_fetches() {
    let (mut engine, source) = seeded_engine(0);
    let start = Instant::now();

    engine.on_scroll(100.0, CLIENT_HEIGHT, start);

    assert!(!engine.poll(start + Duration::from_millis(60)).unwrap());
    assert_eq!(source.fetch_count(), 1, "seed fetch only");
}

#[test]
fn failed_refetch_keeps_the_current_window() {
    let (mut engine, source) = seeded_engine(1000);
    let start = Instant::now();

    source.fail_next();
    engine.on_scroll(scroll_to_middle(405), CLIENT_HEIGHT, start);

    let err = engine.poll(start + Duration::from_millis(60)).unwrap_err();
    assert!(err.to_string().contains("scroll"));
    assert_eq!(engine.state().visible_start, 0);

    // The debouncer is idle again afterwards.
    assert!(!engine.poll(start + Duration::from_millis(120)).unwrap());
}
