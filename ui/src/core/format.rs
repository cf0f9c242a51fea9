//! Formatting helpers for presenting snapshot fields.

use time::{macros::format_description, OffsetDateTime};

pub fn format_memory(gigabytes: Option<f64>) -> String {
    match gigabytes {
        Some(gb) => format!(">={gb} GB"),
        None => "Unknown".to_string(),
    }
}

pub fn format_cores(cores: Option<u32>) -> String {
    cores
        .map(|c| c.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_resolution(screen: Option<(u32, u32)>) -> String {
    match screen {
        Some((width, height)) => format!("{width}x{height}"),
        None => "Unknown".to_string(),
    }
}

pub fn format_color_depth(bits: Option<u32>) -> String {
    match bits {
        Some(bits) => format!("{bits}-bit"),
        None => "Unknown".to_string(),
    }
}

pub fn format_rtt(rtt_ms: Option<u32>) -> String {
    rtt_ms
        .map(|ms| format!("{ms}ms"))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_online(online: bool) -> &'static str {
    if online {
        "ONLINE"
    } else {
        "OFFLINE"
    }
}

/// Compact UTC stamp such as `2025-09-28 14:30:05Z`.
pub fn format_captured_at(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]Z"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn memory_uses_lower_bound_notation() {
        assert_eq!(format_memory(Some(16.0)), ">=16 GB");
        assert_eq!(format_memory(Some(0.5)), ">=0.5 GB");
        assert_eq!(format_memory(None), "Unknown");
    }

    #[test]
    fn missing_cores_and_rtt_read_na() {
        assert_eq!(format_cores(None), "N/A");
        assert_eq!(format_cores(Some(8)), "8");
        assert_eq!(format_rtt(None), "N/A");
        assert_eq!(format_rtt(Some(50)), "50ms");
    }

    #[test]
    fn screen_metrics_fall_back_to_unknown() {
        assert_eq!(format_resolution(Some((1920, 1080))), "1920x1080");
        assert_eq!(format_resolution(None), "Unknown");
        assert_eq!(format_color_depth(Some(24)), "24-bit");
        assert_eq!(format_color_depth(None), "Unknown");
    }

    #[test]
    fn captured_stamp_is_compact() {
        let ts = datetime!(2025-09-28 14:30:05 UTC);
        assert_eq!(format_captured_at(ts), "2025-09-28 14:30:05Z");
    }
}
