use std::collections::HashSet;

use api::section::FaqItem;
use api::Language;
use dioxus::prelude::*;

use crate::t;

/// Toggle one accordion entry; independent entries stay open together.
pub fn toggle(open: &mut HashSet<usize>, index: usize) {
    if !open.remove(&index) {
        open.insert(index);
    }
}

#[component]
pub fn FaqSection(
    name: String,
    description: String,
    items: Vec<FaqItem>,
    language: Language,
) -> Element {
    let mut open = use_signal(HashSet::<usize>::new);

    rsx! {
        section { id: "faq", class: "section section--faq",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "faq",
                    for (index, item) in items.iter().enumerate() {
                        div { key: "{index}", class: "faq__entry",
                            button {
                                r#type: "button",
                                class: "faq__question",
                                aria_expanded: open().contains(&index),
                                onclick: move |_| open.with_mut(|set| toggle(set, index)),
                                span { {item.question.clone().unwrap_or_default()} }
                                span { class: "faq__chevron", aria_hidden: "true",
                                    if open().contains(&index) { "−" } else { "+" }
                                }
                            }
                            if open().contains(&index) {
                                div {
                                    class: "faq__answer",
                                    lang: language.bcp47(),
                                    dangerous_inner_html: item
                                        .answer
                                        .clone()
                                        .unwrap_or_default(),
                                }
                            }
                        }
                    }
                }
            }
            div { class: "faq__contact",
                h3 { {t!("faq-contact-title")} }
                p { {t!("faq-contact-body")} }
                div { class: "faq__contact-links",
                    a { href: "tel:16910", {t!("faq-contact-phone")} }
                    a { href: "mailto:support@coursefront.app", {t!("faq-contact-mail")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_then_collapses() {
        let mut open = HashSet::new();
        toggle(&mut open, 2);
        assert!(open.contains(&2));
        toggle(&mut open, 2);
        assert!(!open.contains(&2));
    }

    #[test]
    fn entries_toggle_independently() {
        let mut open = HashSet::new();
        toggle(&mut open, 0);
        toggle(&mut open, 3);
        assert!(open.contains(&0) && open.contains(&3));
        toggle(&mut open, 0);
        assert!(!open.contains(&0));
        assert!(open.contains(&3));
    }
}
