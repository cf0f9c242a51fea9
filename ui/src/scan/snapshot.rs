//! Environment snapshot and the collector that builds it from a host probe.

use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_GPU: &str = "Unknown GPU";

/// Why a probe could not supply a field. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("{0} is not exposed by this host")]
    Unavailable(&'static str),
    #[error("host rejected {field}: {reason}")]
    Host { field: &'static str, reason: String },
}

/// Introspection surfaces a host may (or may not) expose.
pub trait HostProbe {
    fn platform(&self) -> Result<String, ProbeError>;
    fn user_agent(&self) -> Result<String, ProbeError>;
    fn hardware_concurrency(&self) -> Result<u32, ProbeError>;
    fn device_memory_gb(&self) -> Result<f64, ProbeError>;
    fn gpu_renderer(&self) -> Result<String, ProbeError>;
    fn effective_connection_type(&self) -> Result<String, ProbeError>;
    fn round_trip_ms(&self) -> Result<u32, ProbeError>;
    fn online(&self) -> Result<bool, ProbeError>;
    fn screen_size(&self) -> Result<(u32, u32), ProbeError>;
    fn color_depth(&self) -> Result<u32, ProbeError>;
    fn language(&self) -> Result<String, ProbeError>;
}

/// Immutable record of one analysis run's view of the host.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSnapshot {
    pub run_id: Uuid,
    pub captured_at: OffsetDateTime,
    pub platform: String,
    pub user_agent: String,
    pub cpu_cores: Option<u32>,
    pub memory_gb: Option<f64>,
    pub gpu: String,
    pub network: String,
    pub round_trip_ms: Option<u32>,
    pub online: bool,
    pub screen: Option<(u32, u32)>,
    pub color_depth: Option<u32>,
    pub language: String,
}

impl EnvironmentSnapshot {
    /// Collect a snapshot. Every field falls back independently; this never fails.
    pub fn collect(probe: &impl HostProbe) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            captured_at: OffsetDateTime::now_utc(),
            platform: or_fallback(probe.platform(), UNKNOWN.to_string()),
            user_agent: or_fallback(probe.user_agent(), String::new()),
            cpu_cores: probed(probe.hardware_concurrency()).filter(|c| *c > 0),
            memory_gb: probed(probe.device_memory_gb()).filter(|gb| gb.is_finite() && *gb > 0.0),
            gpu: or_fallback(probe.gpu_renderer(), UNKNOWN_GPU.to_string()),
            network: or_fallback(probe.effective_connection_type(), UNKNOWN.to_string()),
            round_trip_ms: probed(probe.round_trip_ms()),
            online: or_fallback(probe.online(), true),
            screen: probed(probe.screen_size()).filter(|(w, h)| *w > 0 && *h > 0),
            color_depth: probed(probe.color_depth()).filter(|bits| *bits > 0),
            language: or_fallback(probe.language(), UNKNOWN.to_string()),
        }
    }

    pub fn network_known(&self) -> bool {
        self.network != UNKNOWN
    }
}

fn probed<T>(value: Result<T, ProbeError>) -> Option<T> {
    value
        .map_err(|err| debug!(%err, "probe fallback"))
        .ok()
}

fn or_fallback<T>(value: Result<T, ProbeError>, fallback: T) -> T {
    probed(value).unwrap_or(fallback)
}
