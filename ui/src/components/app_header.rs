use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// Page header: brand mark plus the locale switcher.
///
/// Platforms may provide a `Signal<String>` language code through context; the
/// header writes the chosen tag back into it so the platform can remount the
/// tree under the new locale.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang =
        use_signal(move || initial_locale(lang_code_ctx.map(|c| c.peek().clone())));
    let langs = use_signal(i18n::available_languages);
    let lang_list = langs();
    let show_switcher = lang_list.len() > 1;
    // Reactive dependency on the platform's language signal.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        header { id: "header", class: "header",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "header__inner",
                div { class: "header__brand",
                    span { class: "header__brand-mark", "SENTINEL" }
                    span { class: "header__brand-subtitle", {t!("brand-tagline")} }
                }

                if show_switcher {
                    div { class: "header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("header-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in lang_list.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The shell's language signal wins; without one, show whatever bundle is active.
fn initial_locale(shell: Option<String>) -> String {
    shell
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(i18n::current_language)
}
