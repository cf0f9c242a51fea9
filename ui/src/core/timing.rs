//! Timing configuration and the single sleep primitive used by every staged sequence.

/// Durations (milliseconds) for every cosmetic pause in the app.
///
/// Provided to the component tree through context so platforms can tune them;
/// tests construct [`Timings::instant`] to skip real waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pause after "Initializing core modules...".
    pub boot_pause_ms: u64,
    /// Pause after "Accessing hardware abstraction layer...".
    pub probe_pause_ms: u64,
    /// Landing view fade-out before it is hidden.
    pub landing_fade_ms: u64,
    /// Delay before the report view fades in.
    pub report_fade_delay_ms: u64,
    /// How long the contact button shows the transmitting label.
    pub transmit_ms: u64,
    /// How long the contact button shows the secure label before reverting.
    pub ack_hold_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            boot_pause_ms: 800,
            probe_pause_ms: 0,
            landing_fade_ms: 500,
            report_fade_delay_ms: 500,
            transmit_ms: 1_500,
            ack_hold_ms: 3_000,
        }
    }
}

impl Timings {
    pub fn instant() -> Self {
        Self {
            boot_pause_ms: 0,
            probe_pause_ms: 0,
            landing_fade_ms: 0,
            report_fade_delay_ms: 0,
            transmit_ms: 0,
            ack_hold_ms: 0,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_scan_choreography() {
        let t = Timings::default();
        assert_eq!(t.boot_pause_ms, 800);
        assert_eq!(t.transmit_ms, 1_500);
        assert_eq!(t.ack_hold_ms, 3_000);
        assert_eq!(t.landing_fade_ms, t.report_fade_delay_ms);
    }

    #[test]
    fn instant_timings_never_wait() {
        let t = Timings::instant();
        assert_eq!(
            t.boot_pause_ms + t.probe_pause_ms + t.transmit_ms + t.ack_hold_ms,
            0
        );
    }
}
