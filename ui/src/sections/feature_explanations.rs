use api::section::FeatureExplanation;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn FeatureExplanationsSection(
    name: String,
    description: String,
    items: Vec<FeatureExplanation>,
) -> Element {
    rsx! {
        section { class: "section section--explanations",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "explanations",
                    for (index, item) in items.iter().enumerate() {
                        div { key: "{index}", class: "explanations__row",
                            div { class: "explanations__copy",
                                h3 { class: "explanations__heading",
                                    {item.title.clone().unwrap_or_default()}
                                }
                                ul { class: "explanations__checklist",
                                    for (i, line) in item.checklist.iter().enumerate() {
                                        li { key: "{i}",
                                            span {
                                                class: "explanations__mark",
                                                aria_hidden: "true",
                                                "✓"
                                            }
                                            span { "{line}" }
                                        }
                                    }
                                }
                            }
                            if let Some(file_url) = item.file_url.as_deref() {
                                if !file_url.is_empty() {
                                    img {
                                        class: "explanations__figure",
                                        src: "{file_url}",
                                        alt: item.title.clone().unwrap_or_default(),
                                        loading: "lazy",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
