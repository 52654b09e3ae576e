//! Hero banner: title, rich-text description, media carousel, course facts
//! and the price/CTA block.

use api::model::{ChecklistItem, Media, Product};
use api::Language;
use dioxus::prelude::*;

use crate::core::{format, video};
use crate::t;

// Launch pricing; the payload carries no price field.
const PRICE: u64 = 1000;
const OLD_PRICE: u64 = 40000;

/// Media entries eligible for the hero carousel: gallery and thumbnail slots
/// with a usable resource (images must be absolute URLs).
pub fn gallery(media: &[Media]) -> Vec<Media> {
    media
        .iter()
        .filter(|m| matches!(m.name(), "preview_gallery" | "thumbnail"))
        .filter(|m| match m {
            Media::Video { resource_value, .. } => !resource_value.trim().is_empty(),
            Media::Image { resource_value, .. } => resource_value.starts_with("http"),
        })
        .cloned()
        .collect()
}

/// Wrapping slide arithmetic; `delta` is -1 or +1.
pub fn step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

fn discount_percent() -> u64 {
    (((OLD_PRICE - PRICE) as f64 / OLD_PRICE as f64) * 100.0).round() as u64
}

#[component]
pub fn HeroSection(product: ReadOnlySignal<Product>, language: ReadOnlySignal<Language>) -> Element {
    let mut slide = use_signal(|| 0usize);

    let snapshot = product();
    let lang = language();
    let slides = gallery(&snapshot.media);
    let slide_count = slides.len();
    // The product is replaced wholesale on a language change, so clamp the
    // slide index instead of trusting it.
    let current = if slide_count == 0 { 0 } else { slide() % slide_count };

    let cta_label = if snapshot.cta_text.name.is_empty() {
        t!("hero-cta-fallback")
    } else {
        snapshot.cta_text.name.clone()
    };
    let discount = discount_percent().to_string();

    rsx! {
        section { id: "course", class: "hero",
            div { class: "hero__inner",
                div { class: "hero__copy",
                    h1 { class: "hero__title", "{snapshot.title}" }
                    div { class: "hero__rating",
                        span { class: "hero__stars", aria_hidden: "true", "★★★★★" }
                        span { {t!("hero-ratings")} }
                        span { {t!("hero-students")} }
                    }
                    div {
                        class: "hero__description",
                        dangerous_inner_html: "{snapshot.description}",
                    }
                    div { class: "hero__pricing",
                        span { class: "hero__price", {format::format_price(PRICE, lang)} }
                        del { class: "hero__price-old", {format::format_price(OLD_PRICE, lang)} }
                        span { class: "hero__discount", {t!("hero-discount", percent = discount)} }
                    }
                    button { r#type: "button", class: "hero__cta", "{cta_label}" }
                    FactList { items: snapshot.checklist.clone() }
                }

                if !slides.is_empty() {
                    div { class: "hero__media",
                        div { class: "hero__slide", {render_slide(&slides[current])} }
                        if slides.len() > 1 {
                            div { class: "hero__controls",
                                button {
                                    r#type: "button",
                                    class: "hero__nav hero__nav--prev",
                                    aria_label: t!("carousel-prev-label"),
                                    onclick: move |_| slide.set(step(slide(), slide_count, -1)),
                                    "‹"
                                }
                                button {
                                    r#type: "button",
                                    class: "hero__nav hero__nav--next",
                                    aria_label: t!("carousel-next-label"),
                                    onclick: move |_| slide.set(step(slide(), slide_count, 1)),
                                    "›"
                                }
                            }
                            div { class: "hero__thumbs",
                                for (index, item) in gallery(&snapshot.media).into_iter().enumerate() {
                                    button {
                                        key: "{index}",
                                        r#type: "button",
                                        class: if index == current {
                                            "hero__thumb hero__thumb--active"
                                        } else {
                                            "hero__thumb"
                                        },
                                        onclick: move |_| slide.set(index),
                                        img {
                                            src: thumb_url(&item),
                                            alt: "Slide {index + 1}",
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
}

fn render_slide(media: &Media) -> Element {
    match media {
        Media::Video {
            resource_value,
            thumbnail_url,
            ..
        } => match video::youtube_id(resource_value) {
            Some(id) => rsx! {
                iframe {
                    class: "hero__video",
                    src: video::embed_url(&id),
                    title: "Course preview video",
                    allowfullscreen: true,
                }
            },
            // Unplayable video reference: fall back to its thumbnail.
            None => rsx! {
                img {
                    class: "hero__image",
                    src: thumbnail_url.clone().unwrap_or_default(),
                    alt: "Course preview",
                }
            },
        },
        Media::Image { resource_value, .. } => rsx! {
            img { class: "hero__image", src: "{resource_value}", alt: "Course preview" }
        },
    }
}

fn thumb_url(media: &Media) -> String {
    match media {
        Media::Video { thumbnail_url, .. } => thumbnail_url.clone().unwrap_or_default(),
        Media::Image { resource_value, .. } => resource_value.clone(),
    }
}

#[component]
fn FactList(items: Vec<ChecklistItem>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "hero__facts",
            for item in items.iter() {
                li { key: "{item.id}", class: "hero__fact",
                    if !item.icon.is_empty() {
                        img { class: "hero__fact-icon", src: "{item.icon}", alt: "" }
                    }
                    span { "{item.text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(name: &str, value: &str) -> Media {
        Media::Video {
            name: name.into(),
            resource_value: value.into(),
            thumbnail_url: Some("https://cdn.example.com/t.jpg".into()),
        }
    }

    fn image(name: &str, value: &str) -> Media {
        Media::Image {
            name: name.into(),
            resource_value: value.into(),
            thumbnail_url: None,
        }
    }

    #[test]
    fn gallery_keeps_only_usable_preview_media() {
        let media = vec![
            video("preview_gallery", "zrlYnaZftEQ"),
            image("sqr_img", "https://cdn.example.com/sq.png"),
            image("thumbnail", "https://cdn.example.com/t.png"),
            image("preview_gallery", "relative/path.png"),
            video("preview_gallery", "   "),
        ];
        let slides = gallery(&media);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].resource_value(), "zrlYnaZftEQ");
        assert_eq!(slides[1].resource_value(), "https://cdn.example.com/t.png");
    }

    #[test]
    fn slide_stepping_wraps_both_directions() {
        assert_eq!(step(0, 3, 1), 1);
        assert_eq!(step(2, 3, 1), 0);
        assert_eq!(step(0, 3, -1), 2);
        assert_eq!(step(0, 0, 1), 0);
    }

    #[test]
    fn discount_matches_launch_pricing() {
        assert_eq!(discount_percent(), 98);
    }
}
