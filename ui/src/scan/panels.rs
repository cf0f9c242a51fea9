//! Display-only report panels. Every panel renders one fragment produced by the report renderer.

use dioxus::prelude::*;

use crate::scan::chart::{DrawnChart, DATASET_LABEL, VIEWBOX};
use crate::scan::report::{
    AppInventory, ConnectivitySummary, EnvironmentSummary, FileSummary, HardwareSummary,
    Recommendation, SecurityPosture,
};
use crate::scan::reference::Threat;
use crate::t;

#[component]
fn DataRow(label: String, value: String) -> Element {
    rsx! {
        li { class: "data-list__row",
            span { class: "data-list__label", "{label}:" }
            span { class: "data-list__value", "{value}" }
        }
    }
}

#[component]
fn CardHeader(icon: &'static str, title: String) -> Element {
    rsx! {
        div { class: "card__header",
            span { class: "card__icon", aria_hidden: "true", "{icon}" }
            h3 { "{title}" }
        }
    }
}

#[component]
pub fn HardwareCard(summary: HardwareSummary) -> Element {
    rsx! {
        article { class: "card card--hardware",
            CardHeader { icon: "▣", title: t!("card-hardware") }
            ul { class: "data-list",
                DataRow { label: t!("hw-cpu-cores"), value: summary.cpu_cores }
                DataRow { label: t!("hw-memory"), value: summary.memory }
                DataRow { label: t!("hw-gpu"), value: summary.gpu }
                DataRow { label: t!("hw-screen"), value: summary.screen }
            }
        }
    }
}

#[component]
pub fn EnvironmentCard(summary: EnvironmentSummary) -> Element {
    rsx! {
        article { class: "card card--environment",
            CardHeader { icon: "◧", title: t!("card-environment") }
            ul { class: "data-list",
                DataRow { label: t!("env-platform"), value: summary.platform }
                DataRow { label: t!("env-browser"), value: summary.browser.to_string() }
                DataRow { label: t!("env-language"), value: summary.language }
                DataRow { label: t!("env-color-depth"), value: summary.color_depth }
            }
        }
    }
}

#[component]
pub fn ConnectivityCard(summary: ConnectivitySummary) -> Element {
    rsx! {
        article { class: "card card--connectivity",
            CardHeader { icon: "⇅", title: t!("card-connectivity") }
            ul { class: "data-list",
                DataRow { label: t!("net-type"), value: summary.connection_type }
                DataRow { label: t!("net-online"), value: summary.online_status.to_string() }
                DataRow { label: t!("net-rtt"), value: summary.round_trip }
            }
        }
    }
}

#[component]
pub fn SecurityCard(posture: SecurityPosture) -> Element {
    rsx! {
        article { class: "card card--security",
            CardHeader { icon: "⛨", title: t!("card-security") }
            div { class: "security-scan",
                for check in posture.checks.iter() {
                    div { key: "{check.name}", class: "security-scan__item",
                        span { "{check.name}" }
                        span { class: "status status--secure", "{check.status}" }
                    }
                }
            }
            div { class: "security-scan__verdict",
                h4 { "System Integrity: {posture.integrity_percent}%" }
                p { "{posture.verdict}" }
            }
        }
    }
}

#[component]
pub fn LoadChart(chart: DrawnChart) -> Element {
    let view_box = format!("0 0 {VIEWBOX} {VIEWBOX}");
    let center = VIEWBOX / 2.0;

    rsx! {
        article { class: "card card--chart",
            CardHeader { icon: "◔", title: t!("card-load") }
            div {
                key: "{chart.generation}",
                class: "load-chart",
                role: "img",
                aria_label: "{DATASET_LABEL}",
                svg {
                    class: "load-chart__plot",
                    view_box: "{view_box}",
                    for ring in 1..=3u32 {
                        circle {
                            key: "{ring}",
                            class: "load-chart__grid",
                            cx: "{center}",
                            cy: "{center}",
                            r: "{ring * 30}",
                        }
                    }
                    for wedge in chart.wedges.iter() {
                        path {
                            key: "{wedge.label}",
                            d: "{wedge.path}",
                            fill: "{wedge.fill}",
                            stroke: "{wedge.stroke}",
                            stroke_width: "1",
                        }
                    }
                }
                ul { class: "load-chart__legend",
                    for wedge in chart.wedges.iter() {
                        li { key: "{wedge.label}",
                            span {
                                class: "load-chart__swatch",
                                style: "background: {wedge.fill}; border-color: {wedge.stroke};",
                            }
                            "{wedge.label} · {wedge.value}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Optimizations(recommendations: Vec<Recommendation>) -> Element {
    rsx! {
        article { class: "card card--wide",
            CardHeader { icon: "⚙", title: t!("card-optimizations") }
            div { class: "recommendation-grid",
                for rec in recommendations.iter() {
                    div { key: "{rec.title}", class: "recommendation",
                        span { class: "recommendation__icon", aria_hidden: "true", "{rec.icon}" }
                        h5 { "{rec.title}" }
                        p { "{rec.body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ThreatIntel(threats: Vec<Threat>) -> Element {
    rsx! {
        article { class: "card card--wide",
            CardHeader { icon: "☷", title: t!("card-threats") }
            div { class: "threat-grid",
                for threat in threats.iter() {
                    div { key: "{threat.name}", class: "threat",
                        h5 { class: "threat__name", "{threat.name}" }
                        span { class: "threat__lang", "{threat.languages}" }
                        p { "{threat.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Applications(inventory: AppInventory) -> Element {
    rsx! {
        article { class: "card card--wide",
            CardHeader { icon: "▦", title: t!("card-apps") }
            div { class: "app-grid",
                for app in inventory.apps.iter() {
                    div { key: "{app.name}", class: "app-tile {app.risk.css_modifier()}",
                        div { class: "app-tile__name", "{app.name}" }
                        div { class: "app-tile__version", "v{app.version}" }
                        div { class: "app-tile__risk", "Risk: {app.risk.label()}" }
                    }
                }
            }
            p { class: "card__footnote", "Total Applications Scanned: {inventory.total_scanned}" }
        }
    }
}

#[component]
pub fn FileScan(summary: FileSummary) -> Element {
    rsx! {
        article { class: "card card--wide",
            CardHeader { icon: "▤", title: t!("card-files") }
            div { class: "file-scan",
                div {
                    h5 { class: "file-scan__heading", "Large Files Detected" }
                    for file in summary.large_files.iter() {
                        div { key: "{file.name}", class: "file-scan__entry",
                            div { class: "file-scan__name", "{file.name}" }
                            div { class: "file-scan__meta", "{file.size} • {file.path}" }
                        }
                    }
                }
                div {
                    h5 { class: "file-scan__heading file-scan__heading--alert", "Duplicate Analysis" }
                    div { class: "file-scan__duplicates",
                        span { class: "file-scan__count", "{summary.duplicates}" }
                        span { "Duplicates Found" }
                    }
                    p { class: "file-scan__meta", "{summary.verdict}" }
                }
            }
        }
    }
}
