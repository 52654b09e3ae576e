use api::section::Testimonial;
use dioxus::prelude::*;

use crate::core::video;
use crate::t;

use super::hero::step;

/// Student testimonials as a stepped slider. Video testimonials embed their
/// clip; text-only ones show the quote.
#[component]
pub fn TestimonialsSection(name: String, description: String, items: Vec<Testimonial>) -> Element {
    let mut cursor = use_signal(|| 0usize);

    let len = items.len();
    let current = if len == 0 { 0 } else { cursor() % len };

    rsx! {
        section { class: "section section--testimonials",
            h2 { class: "section__title", "{name}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "testimonials",
                    {render_card(&items[current])}
                    if len > 1 {
                        div { class: "testimonials__controls",
                            button {
                                r#type: "button",
                                class: "testimonials__nav",
                                aria_label: t!("testimonials-prev-label"),
                                onclick: move |_| cursor.set(step(cursor(), len, -1)),
                                "‹"
                            }
                            span { class: "testimonials__position", "{current + 1} / {len}" }
                            button {
                                r#type: "button",
                                class: "testimonials__nav",
                                aria_label: t!("testimonials-next-label"),
                                onclick: move |_| cursor.set(step(cursor(), len, 1)),
                                "›"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_card(item: &Testimonial) -> Element {
    let video_id = item.video_url.as_deref().and_then(video::youtube_id);
    rsx! {
        figure { class: "testimonials__card",
            if let Some(id) = video_id {
                iframe {
                    class: "testimonials__video",
                    src: video::embed_url(&id),
                    title: item.name.clone().unwrap_or_default(),
                    allowfullscreen: true,
                }
            } else if let Some(quote) = item.testimonial.as_deref() {
                blockquote { class: "testimonials__quote", "{quote}" }
            }
            figcaption { class: "testimonials__person",
                if let Some(photo) = item.profile_image.as_deref() {
                    img { class: "testimonials__photo", src: "{photo}", alt: "" }
                }
                div {
                    strong { {item.name.clone().unwrap_or_default()} }
                    if let Some(score) = item.description.as_deref() {
                        span { class: "testimonials__score", "{score}" }
                    }
                }
            }
        }
    }
}
