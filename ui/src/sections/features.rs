use api::section::FeatureItem;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn FeaturesSection(name: String, description: String, items: Vec<FeatureItem>) -> Element {
    rsx! {
        section { id: "features", class: "section section--features",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "features",
                    for (index, item) in items.iter().enumerate() {
                        div { key: "{index}", class: "features__tile",
                            if let Some(icon) = item.icon.as_deref() {
                                img { class: "features__icon", src: "{icon}", alt: "" }
                            }
                            div {
                                h3 { class: "features__heading",
                                    {item.title.clone().unwrap_or_default()}
                                }
                                if let Some(subtitle) = item.subtitle.as_deref() {
                                    p { class: "features__text", "{subtitle}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
