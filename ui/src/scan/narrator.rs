//! Staged narrator: a fixed, ordered series of status lines with one timed pause each.

use std::future::Future;

use crate::core::timing::Timings;

pub const LINE_PREFIX: &str = "> ";

pub const BOOT_LINE: &str = "Initializing core modules...";
pub const PROBE_LINE: &str = "Accessing hardware abstraction layer...";
pub const ACQUIRED_LINE: &str = "Hardware signatures acquired.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub line: &'static str,
    pub pause_ms: u64,
}

/// Stages emitted before the snapshot is collected.
pub fn opening_stages(timings: &Timings) -> [Stage; 2] {
    [
        Stage {
            line: BOOT_LINE,
            pause_ms: timings.boot_pause_ms,
        },
        Stage {
            line: PROBE_LINE,
            pause_ms: timings.probe_pause_ms,
        },
    ]
}

pub fn console_line(text: &str) -> String {
    format!("{LINE_PREFIX}{text}")
}

/// Emit each stage in order, suspending once per stage through `sleep`.
pub async fn narrate<E, S, F>(stages: &[Stage], mut emit: E, mut sleep: S)
where
    E: FnMut(String),
    S: FnMut(u64) -> F,
    F: Future<Output = ()>,
{
    for stage in stages {
        tracing::info!(line = stage.line, pause_ms = stage.pause_ms, "narrator stage");
        emit(console_line(stage.line));
        sleep(stage.pause_ms).await;
    }
}
