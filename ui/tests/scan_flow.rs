//! End-to-end runs of the scan sequence against fixture hosts, without real timers.

use std::cell::RefCell;

use futures::executor::block_on;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ui::core::timing::Timings;
use ui::scan::chart::load_categories;
use ui::scan::lifecycle::run_analysis;
use ui::scan::probe::FixtureProbe;
use ui::scan::{Browser, Lifecycle, Phase};

fn scan(probe: &FixtureProbe, seed: u64) -> (Lifecycle, Vec<u64>) {
    let lifecycle = RefCell::new(Lifecycle::new());
    let pauses = RefCell::new(Vec::new());
    assert!(lifecycle.borrow_mut().start());
    lifecycle.borrow_mut().hide_landing();

    let snapshot = block_on(run_analysis(
        probe,
        &Timings::default(),
        |line| lifecycle.borrow_mut().log(line),
        |ms| {
            pauses.borrow_mut().push(ms);
            async {}
        },
    ));

    let mut rng = StdRng::seed_from_u64(seed);
    assert!(lifecycle.borrow_mut().complete(snapshot, &mut rng));
    (lifecycle.into_inner(), pauses.into_inner())
}

#[test]
fn chrome_desktop_report() {
    let probe = FixtureProbe {
        user_agent: Some(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/119.0.0.0 Safari/537.36"
                .into(),
        ),
        hardware_concurrency: Some(8),
        device_memory_gb: Some(16.0),
        screen: Some((1920, 1080)),
        color_depth: Some(24),
        ..FixtureProbe::empty()
    };

    let (lifecycle, pauses) = scan(&probe, 42);
    let report = lifecycle.report().expect("report rendered");

    assert_eq!(lifecycle.phase(), Phase::Reported);
    assert_eq!(report.environment.browser, Browser::Chrome);
    assert_eq!(report.environment.color_depth, "24-bit");
    assert_eq!(report.hardware.cpu_cores, "8");
    assert_eq!(report.hardware.memory, ">=16 GB");
    assert_eq!(report.hardware.screen, "1920x1080");
    assert_eq!(report.hardware.gpu, "Unknown GPU");
    assert_eq!(pauses, [800, 0]);
}

#[test]
fn console_trace_is_fixed_and_ordered() {
    let (lifecycle, _) = scan(&FixtureProbe::chrome_desktop(), 1);
    assert_eq!(
        lifecycle.console(),
        [
            "> Initializing core modules...",
            "> Accessing hardware abstraction layer...",
            "> Hardware signatures acquired.",
        ]
    );
}

#[test]
fn bare_host_still_produces_a_full_report() {
    let (lifecycle, _) = scan(&FixtureProbe::empty(), 9);
    let report = lifecycle.report().expect("report rendered");

    assert_eq!(report.hardware.cpu_cores, "N/A");
    assert_eq!(report.hardware.memory, "Unknown");
    assert_eq!(report.environment.browser, Browser::Unknown);
    assert_eq!(report.connectivity.connection_type, "UNKNOWN");
    assert_eq!(report.threats.len(), 6);
    assert_eq!(report.applications.apps.len(), 6);
    assert_eq!(report.files.large_files.len(), 2);
}

#[test]
fn chart_values_are_redrawn_within_range_each_run() {
    let categories = load_categories();
    for seed in 0..50 {
        let (lifecycle, _) = scan(&FixtureProbe::chrome_desktop(), seed);
        let chart = lifecycle.chart().current().expect("chart drawn");
        for (value, category) in chart.dataset.values.iter().zip(&categories) {
            assert!(category.range.contains(value));
        }
    }
}

#[test]
fn reset_from_reported_returns_to_a_clean_landing() {
    let (mut lifecycle, _) = scan(&FixtureProbe::chrome_desktop(), 3);
    lifecycle.reset();

    assert_eq!(lifecycle.phase(), Phase::Landing);
    assert!(lifecycle.landing_visible());
    assert!(lifecycle.console().is_empty());
    assert!(lifecycle.report().is_none());
    assert!(lifecycle.chart().current().is_none());
    assert!(lifecycle.start(), "a fresh scan can begin after reset");
}
