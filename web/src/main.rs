use api::Language;
use dioxus::prelude::*;

use ui::i18n;
use ui::views::ProductView;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/?:lang")]
    Home { lang: String },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// The landing page. The `?lang` query parameter is the single source of
/// truth for the language; switching languages rewrites the URL and the view
/// follows.
#[component]
fn Home(lang: String) -> Element {
    let language = Language::from_query(&lang);

    rsx! {
        ProductView {
            lang: language,
            on_language_change: move |selected: Language| {
                navigator().replace(Route::Home {
                    lang: selected.as_str().to_string(),
                });
            },
        }
    }
}
