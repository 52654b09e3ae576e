use dioxus::prelude::*;

use crate::core::platform;
use crate::store::UiState;
use crate::t;

/// Show the affordance once the page has scrolled past this offset.
const VISIBILITY_THRESHOLD: f64 = 300.0;

#[component]
pub fn ScrollToTop() -> Element {
    let ui = use_context::<Signal<UiState>>();

    use_hook(move || {
        let mut ui = ui;
        platform::watch_scroll(move |offset| {
            let visible = offset > VISIBILITY_THRESHOLD;
            if ui.peek().scroll_to_top_visible != visible {
                ui.with_mut(|state| state.set_scroll_visible(visible));
            }
        });
    });

    if !ui().scroll_to_top_visible {
        return rsx! {};
    }

    rsx! {
        button {
            r#type: "button",
            class: "scroll-top",
            aria_label: t!("scroll-top-label"),
            onclick: move |_| platform::scroll_to_top(),
            "↑"
        }
    }
}
