use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::{format, platform, timing, timing::Timings};
use crate::t;

use super::contact::{self, ContactForm};
use super::lifecycle::{run_analysis, Lifecycle, Phase};
use super::panels::{
    Applications, ConnectivityCard, EnvironmentCard, FileScan, HardwareCard, LoadChart,
    Optimizations, SecurityCard, ThreatIntel,
};
use super::probe;

#[derive(Debug, Clone, Copy)]
enum ScanEvent {
    Start,
    Reset,
}

#[component]
pub fn ScanView() -> Element {
    let timings = try_use_context::<Timings>().unwrap_or_default();
    let lifecycle = use_signal(Lifecycle::new);

    let scan = use_coroutine(move |mut rx: UnboundedReceiver<ScanEvent>| {
        let mut lifecycle = lifecycle;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    ScanEvent::Start => {
                        if !lifecycle.write().start() {
                            continue;
                        }
                        timing::sleep_ms(timings.landing_fade_ms).await;
                        lifecycle.write().hide_landing();

                        let host = probe::host_probe();
                        let snapshot = run_analysis(
                            &host,
                            &timings,
                            move |line| lifecycle.write().log(line),
                            timing::sleep_ms,
                        )
                        .await;

                        let mut rng = rand::thread_rng();
                        lifecycle.write().complete(snapshot, &mut rng);
                    }
                    ScanEvent::Reset => lifecycle.write().reset(),
                }
            }
        }
    });

    let reset_scan = scan.clone();
    let on_reset = move |_: MouseEvent| {
        // A page reload discards everything, timers included; without one, rebuild in place.
        if !platform::reload_page() {
            reset_scan.send(ScanEvent::Reset);
        }
    };

    let state = lifecycle();
    let phase = state.phase();
    let landing_class = if phase == Phase::Landing {
        "landing"
    } else {
        "landing landing--leaving"
    };
    let fade_style = format!(
        "animation-duration: {}ms;",
        timings.landing_fade_ms.max(1)
    );
    let report_style = format!(
        "animation-delay: {}ms;",
        timings.report_fade_delay_ms
    );

    rsx! {
        if state.landing_visible() {
            section { class: "{landing_class}", style: "{fade_style}",
                h1 { class: "landing__title", {t!("landing-title")} }
                p { class: "landing__tagline", {t!("landing-tagline")} }
                button {
                    r#type: "button",
                    class: "button button--primary landing__start",
                    disabled: phase != Phase::Landing,
                    onclick: move |_| scan.send(ScanEvent::Start),
                    {t!("landing-start")}
                }
            }
        }

        if phase != Phase::Landing {
            section { class: "dashboard", style: "{report_style}",
                div { class: "dashboard__header",
                    h2 { {t!("dashboard-title")} }
                    if let Some(report) = state.report() {
                        span { class: "dashboard__meta",
                            "{format::format_captured_at(report.captured_at)} · {report.run_id}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost dashboard__reset",
                        onclick: on_reset,
                        {t!("dashboard-reset")}
                    }
                }

                // Newest first in the DOM; `column-reverse` keeps the scroll pinned to it.
                div { class: "console", role: "log",
                    if phase == Phase::Analyzing {
                        p { class: "console__line console__line--cursor", "_" }
                    }
                    for (i, line) in state.console().iter().enumerate().rev() {
                        p { key: "{i}", class: "console__line", "{line}" }
                    }
                }

                if let Some(report) = state.report() {
                    div { class: "dashboard__grid",
                        HardwareCard { summary: report.hardware.clone() }
                        EnvironmentCard { summary: report.environment.clone() }
                        ConnectivityCard { summary: report.connectivity.clone() }
                        SecurityCard { posture: report.security.clone() }
                        if let Some(chart) = state.chart().current().cloned() {
                            LoadChart { chart }
                        }
                    }
                    div { class: "dashboard__wide",
                        Optimizations { recommendations: report.recommendations.to_vec() }
                        ThreatIntel { threats: report.threats.to_vec() }
                        Applications { inventory: report.applications.clone() }
                        FileScan { summary: report.files.clone() }
                    }
                    ContactPanel {}
                }
            }
        }
    }
}

#[component]
fn ContactPanel() -> Element {
    let timings = try_use_context::<Timings>().unwrap_or_default();
    let mut form = use_signal(ContactForm::default);

    let acknowledgment = use_coroutine(move |mut rx: UnboundedReceiver<()>| {
        let mut form = form;

        async move {
            while rx.next().await.is_some() {
                contact::acknowledge(
                    &timings,
                    move |next| form.write().advance(next),
                    timing::sleep_ms,
                )
                .await;
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if form.write().submit() {
            tracing::debug!("contact submit acknowledged locally");
            acknowledgment.send(());
        }
    };

    let original_label = t!("contact-submit");
    let current = form.read().clone();
    let button_label = current.transmission.label(&original_label).to_string();

    rsx! {
        section { class: "contact",
            h3 { {t!("contact-title")} }
            p { class: "contact__intro", {t!("contact-intro")} }
            form { class: "contact__form", onsubmit: on_submit,
                input {
                    r#type: "text",
                    name: "name",
                    required: true,
                    placeholder: t!("contact-name"),
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                input {
                    r#type: "email",
                    name: "email",
                    required: true,
                    placeholder: t!("contact-email"),
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                textarea {
                    name: "message",
                    required: true,
                    rows: "4",
                    placeholder: t!("contact-message"),
                    value: "{current.message}",
                    oninput: move |evt| form.write().message = evt.value(),
                }
                button {
                    r#type: "submit",
                    class: "{current.transmission.css_class()}",
                    "{button_label}"
                }
            }
        }
    }
}
