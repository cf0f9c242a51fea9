//! Lifecycle controller: Landing -> Analyzing -> Reported, and the full reset back to Landing.

use std::future::Future;

use rand::Rng;
use tracing::{info, warn};

use crate::core::timing::Timings;

use super::chart::ChartHandle;
use super::narrator::{self, ACQUIRED_LINE};
use super::report::{render_report, Report};
use super::snapshot::{EnvironmentSnapshot, HostProbe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Landing,
    Analyzing,
    Reported,
}

/// All state of one page lifetime. A reset replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle {
    phase: Phase,
    landing_visible: bool,
    console: Vec<String>,
    snapshot: Option<EnvironmentSnapshot>,
    report: Option<Report>,
    chart: ChartHandle,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Landing,
            landing_visible: true,
            console: Vec::new(),
            snapshot: None,
            report: None,
            chart: ChartHandle::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn landing_visible(&self) -> bool {
        self.landing_visible
    }

    pub fn console(&self) -> &[String] {
        &self.console
    }

    pub fn snapshot(&self) -> Option<&EnvironmentSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn chart(&self) -> &ChartHandle {
        &self.chart
    }

    /// Landing -> Analyzing. Returns `false` (and changes nothing) from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Landing {
            warn!(phase = ?self.phase, "start ignored");
            return false;
        }
        info!("analysis started");
        self.phase = Phase::Analyzing;
        true
    }

    /// The landing cross-fade has finished.
    pub fn hide_landing(&mut self) {
        self.landing_visible = false;
    }

    pub fn log(&mut self, line: String) {
        self.console.push(line);
    }

    /// Analyzing -> Reported: render every fragment for `snapshot`.
    pub fn complete<R: Rng>(&mut self, snapshot: EnvironmentSnapshot, rng: &mut R) -> bool {
        if self.phase != Phase::Analyzing {
            warn!(phase = ?self.phase, "completion ignored");
            return false;
        }
        let report = render_report(&snapshot, &mut self.chart, rng);
        info!(run_id = %report.run_id, "report rendered");
        self.snapshot = Some(snapshot);
        self.report = Some(report);
        self.phase = Phase::Reported;
        true
    }

    /// Unconditional and total: nothing from the previous run survives.
    pub fn reset(&mut self) {
        self.chart.teardown();
        *self = Self::new();
        info!("lifecycle reset");
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Opening narration, snapshot collection, closing line. The returned snapshot
/// is ready for [`Lifecycle::complete`].
pub async fn run_analysis<P, E, S, F>(
    probe: &P,
    timings: &Timings,
    mut emit: E,
    sleep: S,
) -> EnvironmentSnapshot
where
    P: HostProbe,
    E: FnMut(String),
    S: FnMut(u64) -> F,
    F: Future<Output = ()>,
{
    narrator::narrate(&narrator::opening_stages(timings), &mut emit, sleep).await;
    let snapshot = EnvironmentSnapshot::collect(probe);
    let span = tracing::info_span!("scan", run_id = %snapshot.run_id);
    span.in_scope(|| info!(platform = %snapshot.platform, "environment collected"));
    emit(narrator::console_line(ACQUIRED_LINE));
    snapshot
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scan::probe::FixtureProbe;

    fn snapshot() -> EnvironmentSnapshot {
        EnvironmentSnapshot::collect(&FixtureProbe::chrome_desktop())
    }

    #[test]
    fn happy_path_walks_every_phase() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut lc = Lifecycle::new();
        assert_eq!(lc.phase(), Phase::Landing);
        assert!(lc.landing_visible());

        assert!(lc.start());
        lc.hide_landing();
        assert_eq!(lc.phase(), Phase::Analyzing);

        assert!(lc.complete(snapshot(), &mut rng));
        assert_eq!(lc.phase(), Phase::Reported);
        assert!(lc.report().is_some());
        assert!(lc.chart().current().is_some());
    }

    #[test]
    fn out_of_order_actions_are_ignored() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut lc = Lifecycle::new();
        assert!(!lc.complete(snapshot(), &mut rng));
        assert_eq!(lc.phase(), Phase::Landing);

        assert!(lc.start());
        assert!(!lc.start());
        assert!(lc.complete(snapshot(), &mut rng));
        assert!(!lc.start());
        assert_eq!(lc.phase(), Phase::Reported);
    }

    #[test]
    fn reset_discards_everything() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut lc = Lifecycle::new();
        lc.start();
        lc.hide_landing();
        lc.log("> something".into());
        lc.complete(snapshot(), &mut rng);

        lc.reset();

        assert_eq!(lc, Lifecycle::new());
        assert!(lc.console().is_empty());
        assert!(lc.report().is_none());
        assert!(lc.snapshot().is_none());
        assert!(lc.chart().current().is_none());
        assert!(lc.landing_visible());
    }
}
