//! Property-based invariants for engine navigation: any in-range target
//! ends up selected, materialized, and focused, and a repeated
//! navigation never fetches again.

use navlist::engine::{Engine, EngineConfig};
use navlist::sync::SyncOutcome;
use navlist_core::contract::DataSource;
use navlist_core::window::FetchWindow;
use navlist_harness::{FakeDataSource, FakeSurface};
use proptest::prelude::*;

fn seeded_engine(
    total: usize,
) -> (Engine<FakeDataSource, FakeSurface>, FakeDataSource) {
    let surface = FakeSurface::new(35.0, 350.0);
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

proptest! {
    #[test]
    fn navigation_materializes_and_focuses_the_target(
        total in 1usize..2_000,
        target_seed in 0usize..2_000,
    ) {
        let target = target_seed % total;
        let (mut engine, _source) = seeded_engine(total);

        let nav = engine.navigate_to(Some(target)).unwrap();

        prop_assert_eq!(engine.state().selected, Some(target));
        prop_assert!(engine.state().is_materialized(target));
        prop_assert_eq!(nav.sync, Some(SyncOutcome::Focused));
    }

    #[test]
    fn repeated_navigation_fetches_at_most_once(
        total in 1usize..2_000,
        target_seed in 0usize..2_000,
    ) {
        let target = target_seed % total;
        let (mut engine, source) = seeded_engine(total);

        engine.navigate_to(Some(target)).unwrap();
        let after_first = source.fetch_count();
        let nav = engine.navigate_to(Some(target)).unwrap();

        prop_assert!(!nav.fetched);
        prop_assert_eq!(source.fetch_count(), after_first);
        prop_assert!(after_first <= 2, "seed fetch plus at most one more");
    }
}
