use api::section::AboutBlock;
use dioxus::prelude::*;

use crate::t;

/// Long-form course details. Both the heading and the body of each block are
/// server-provided HTML.
#[component]
pub fn AboutSection(name: String, description: String, items: Vec<AboutBlock>) -> Element {
    rsx! {
        section { id: "details", class: "section section--about",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "about",
                    for (index, block) in items.iter().enumerate() {
                        article { key: "{index}", class: "about__block",
                            if let Some(title) = block.title.as_deref() {
                                div {
                                    class: "about__heading",
                                    dangerous_inner_html: "{title}",
                                }
                            }
                            if let Some(body) = block.description.as_deref() {
                                div {
                                    class: "about__body",
                                    dangerous_inner_html: "{body}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
