use dioxus::prelude::*;

use crate::components::AppHeader;
use crate::scan::ScanView;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so the page re-renders on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        div { class: "backdrop", aria_hidden: "true",
            div { class: "backdrop__grid" }
            div { class: "backdrop__globe" }
        }
        AppHeader {}
        main { class: "page page-home",
            ScanView {}
        }
        footer { class: "footer", {crate::t!("footer-note")} }
    }
}
