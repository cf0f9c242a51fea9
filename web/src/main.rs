use dioxus::prelude::*;

use ui::core::timing::Timings;
use ui::views::Home;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(Timings::default);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        // Keyed on the language so a locale switch remounts the page.
        div { key: "{lang_code()}", class: "app",
            Home {}
        }
    }
}
