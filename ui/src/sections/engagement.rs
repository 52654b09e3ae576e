use api::section::EngagementItem;
use dioxus::prelude::*;

use crate::t;

/// Lead-magnet banner. The payload drives the colors, so the inline styles
/// here are data, not presentation.
#[component]
pub fn EngagementSection(name: String, description: String, items: Vec<EngagementItem>) -> Element {
    rsx! {
        section { class: "section section--engagement",
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            }
            for (index, item) in items.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "engagement",
                    style: banner_style(item),
                    div { class: "engagement__copy",
                        if let Some(icon) = item.top_left_icon_img.as_deref() {
                            img { class: "engagement__icon", src: "{icon}", alt: "" }
                        }
                        h2 {
                            class: "engagement__title",
                            style: color_style(item.title_color.as_deref()),
                            {item.title.clone().unwrap_or_else(|| name.clone())}
                        }
                        p {
                            class: "engagement__text",
                            style: color_style(item.description_color.as_deref()),
                            {item.description.clone().unwrap_or_else(|| description.clone())}
                        }
                        if let Some(cta) = item.cta.as_ref() {
                            if !cta.clicked_url.is_empty() {
                                a {
                                    class: "engagement__cta",
                                    href: "{cta.clicked_url}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "{cta.text}"
                                }
                            }
                        }
                    }
                    if let Some(thumb) = item.thumbnail.as_deref() {
                        img {
                            class: "engagement__thumb",
                            src: "{thumb}",
                            alt: "",
                            loading: "lazy",
                        }
                    }
                }
            }
        }
    }
}

fn banner_style(item: &EngagementItem) -> String {
    match item.background.as_ref() {
        Some(bg) if !bg.image.is_empty() => {
            format!("background-image: url('{}');", bg.image)
        }
        Some(bg) if !bg.primary_color.is_empty() => {
            format!("background-color: {};", bg.primary_color)
        }
        _ => String::new(),
    }
}

fn color_style(color: Option<&str>) -> String {
    match color {
        Some(value) if !value.is_empty() => format!("color: {value};"),
        _ => String::new(),
    }
}
