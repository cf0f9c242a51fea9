//! Report renderer: snapshot plus fixed reference data in, display fragments out.

use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::format;

use super::browser::Browser;
use super::chart::{ChartHandle, LoadDataset};
use super::reference::{
    InstalledApp, LargeFile, SecurityCheck, Threat, DUPLICATE_FILES, FILE_SYSTEM_VERDICT,
    INSTALLED_APPS, INTEGRITY_PERCENT, LARGE_FILES, SECURITY_CHECKS, SECURITY_VERDICT, THREATS,
};
use super::snapshot::EnvironmentSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareSummary {
    pub cpu_cores: String,
    pub memory: String,
    pub gpu: String,
    pub screen: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSummary {
    pub platform: String,
    pub browser: Browser,
    pub language: String,
    pub color_depth: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivitySummary {
    pub connection_type: String,
    pub online_status: &'static str,
    pub round_trip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityPosture {
    pub checks: &'static [SecurityCheck],
    pub integrity_percent: u8,
    pub verdict: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInventory {
    pub apps: &'static [InstalledApp],
    pub total_scanned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub large_files: &'static [LargeFile],
    pub duplicates: usize,
    pub verdict: &'static str,
}

/// Everything the report view displays, except the chart which lives in its handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub run_id: Uuid,
    pub captured_at: OffsetDateTime,
    pub hardware: HardwareSummary,
    pub environment: EnvironmentSummary,
    pub connectivity: ConnectivitySummary,
    pub security: SecurityPosture,
    pub recommendations: [Recommendation; 3],
    pub threats: &'static [Threat],
    pub applications: AppInventory,
    pub files: FileSummary,
}

/// Render every fragment and redraw the load chart with freshly sampled values.
pub fn render_report<R: Rng>(
    snapshot: &EnvironmentSnapshot,
    chart: &mut ChartHandle,
    rng: &mut R,
) -> Report {
    chart.draw(LoadDataset::sample(rng));

    let browser = Browser::classify(&snapshot.user_agent);

    Report {
        run_id: snapshot.run_id,
        captured_at: snapshot.captured_at,
        hardware: hardware_summary(snapshot),
        environment: environment_summary(snapshot, browser),
        connectivity: connectivity_summary(snapshot),
        security: security_posture(),
        recommendations: recommendations(snapshot, browser),
        threats: &THREATS,
        applications: AppInventory {
            apps: &INSTALLED_APPS,
            total_scanned: INSTALLED_APPS.len(),
        },
        files: FileSummary {
            large_files: &LARGE_FILES,
            duplicates: DUPLICATE_FILES,
            verdict: FILE_SYSTEM_VERDICT,
        },
    }
}

pub fn hardware_summary(snapshot: &EnvironmentSnapshot) -> HardwareSummary {
    HardwareSummary {
        cpu_cores: format::format_cores(snapshot.cpu_cores),
        memory: format::format_memory(snapshot.memory_gb),
        gpu: snapshot.gpu.clone(),
        screen: format::format_resolution(snapshot.screen),
    }
}

pub fn environment_summary(snapshot: &EnvironmentSnapshot, browser: Browser) -> EnvironmentSummary {
    EnvironmentSummary {
        platform: snapshot.platform.clone(),
        browser,
        language: snapshot.language.clone(),
        color_depth: format::format_color_depth(snapshot.color_depth),
    }
}

pub fn connectivity_summary(snapshot: &EnvironmentSnapshot) -> ConnectivitySummary {
    ConnectivitySummary {
        connection_type: snapshot.network.to_uppercase(),
        online_status: format::format_online(snapshot.online),
        round_trip: format::format_rtt(snapshot.round_trip_ms),
    }
}

pub fn security_posture() -> SecurityPosture {
    SecurityPosture {
        checks: &SECURITY_CHECKS,
        integrity_percent: INTEGRITY_PERCENT,
        verdict: SECURITY_VERDICT,
    }
}

pub fn recommendations(snapshot: &EnvironmentSnapshot, browser: Browser) -> [Recommendation; 3] {
    let connection = if snapshot.network_known() {
        snapshot.network.to_uppercase()
    } else {
        "Standard".to_string()
    };

    [
        Recommendation {
            icon: "⟳",
            title: "Update Browser",
            body: format!("Ensure {browser} is on the latest version for security patches."),
        },
        Recommendation {
            icon: "⛨",
            title: "Extension Audit",
            body: "Review installed extensions. Unused plugins can be security vectors."
                .to_string(),
        },
        Recommendation {
            icon: "◌",
            title: "Privacy Check",
            body: format!(
                "Connection is {connection}. Consider using a VPN for public networks."
            ),
        },
    ]
}
