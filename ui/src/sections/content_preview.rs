use api::section::PreviewItem;
use dioxus::prelude::*;

use crate::core::video;
use crate::t;

/// Lesson previews. Entries without a playable video render as plain rows;
/// clicking a playable one swaps in its embed.
#[component]
pub fn ContentPreviewSection(name: String, description: String, items: Vec<PreviewItem>) -> Element {
    let mut playing = use_signal(|| None::<usize>);

    let heading = if name.is_empty() {
        t!("content-preview-title-fallback")
    } else {
        name.clone()
    };

    rsx! {
        section { class: "section section--preview",
            h2 { class: "section__title", "{heading}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                ul { class: "preview",
                    for (index, item) in items.iter().enumerate() {
                        li { key: "{index}", class: "preview__row",
                            if playing() == Some(index) {
                                if let Some(id) = item
                                    .video_url
                                    .as_deref()
                                    .and_then(video::youtube_id)
                                {
                                    iframe {
                                        class: "preview__player",
                                        src: video::embed_url(&id),
                                        title: item.title.clone().unwrap_or_default(),
                                        allowfullscreen: true,
                                    }
                                }
                            } else {
                                button {
                                    r#type: "button",
                                    class: "preview__launcher",
                                    disabled: item
                                        .video_url
                                        .as_deref()
                                        .and_then(video::youtube_id)
                                        .is_none(),
                                    onclick: move |_| playing.set(Some(index)),
                                    if let Some(thumb) = item.thumb.as_deref() {
                                        img {
                                            class: "preview__thumb",
                                            src: "{thumb}",
                                            alt: "",
                                            loading: "lazy",
                                        }
                                    }
                                    span { class: "preview__label",
                                        {item.title.clone().unwrap_or_default()}
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
