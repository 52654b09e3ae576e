use api::section::Pointer;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn PointersSection(name: String, description: String, items: Vec<Pointer>) -> Element {
    rsx! {
        section { class: "section section--pointers",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                ul { class: "pointers",
                    for (index, pointer) in items.iter().enumerate() {
                        li { key: "{index}", class: "pointers__item",
                            span { class: "pointers__mark", aria_hidden: "true", "✓" }
                            span { {pointer.text.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
        }
    }
}
