use api::section::Instructor;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn InstructorsSection(name: String, description: String, items: Vec<Instructor>) -> Element {
    rsx! {
        section { id: "instructor", class: "section section--instructors",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "instructors",
                    for (index, person) in items.iter().enumerate() {
                        div { key: "{index}", class: "instructors__card",
                            if let Some(image) = person.image.as_deref() {
                                img {
                                    class: "instructors__photo",
                                    src: "{image}",
                                    alt: person.name.clone().unwrap_or_default(),
                                }
                            }
                            div { class: "instructors__body",
                                h3 { class: "instructors__name",
                                    {person.name.clone().unwrap_or_default()}
                                }
                                if let Some(short) = person.short_description.as_deref() {
                                    p { class: "instructors__role", "{short}" }
                                }
                                if let Some(bio) = person.description.as_deref() {
                                    div {
                                        class: "instructors__bio",
                                        dangerous_inner_html: "{bio}",
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
