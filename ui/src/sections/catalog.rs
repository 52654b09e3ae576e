use api::section::CatalogItem;
use dioxus::prelude::*;

use crate::t;

/// Which catalog-shaped section this instance renders. The payload shape is
/// shared; the variant picks the anchor, modifier class and fallback title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogVariant {
    Bundle,
    FreeItems,
    Certificate,
    Requirements,
    HowToPay,
}

impl CatalogVariant {
    fn modifier(self) -> &'static str {
        match self {
            CatalogVariant::Bundle => "bundle",
            CatalogVariant::FreeItems => "free-items",
            CatalogVariant::Certificate => "certificate",
            CatalogVariant::Requirements => "requirements",
            CatalogVariant::HowToPay => "how-to-pay",
        }
    }

    fn fallback_title(self) -> String {
        match self {
            CatalogVariant::Bundle => t!("bundle-title-fallback"),
            CatalogVariant::FreeItems => t!("free-items-title-fallback"),
            CatalogVariant::Certificate => t!("certificate-title-fallback"),
            CatalogVariant::Requirements => t!("requirements-title-fallback"),
            CatalogVariant::HowToPay => t!("how-to-pay-title-fallback"),
        }
    }
}

#[component]
pub fn CatalogSection(
    variant: CatalogVariant,
    name: String,
    description: String,
    items: Vec<CatalogItem>,
) -> Element {
    let heading = if name.is_empty() {
        variant.fallback_title()
    } else {
        name.clone()
    };

    rsx! {
        section { class: "section section--{variant.modifier()}",
            h2 { class: "section__title", "{heading}" }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            } else {
                div { class: "catalog",
                    for (index, item) in items.iter().enumerate() {
                        div { key: "{index}", class: "catalog__card",
                            if let Some(image) = item.image.as_deref().or(item.icon.as_deref()) {
                                if !image.is_empty() {
                                    img {
                                        class: "catalog__figure",
                                        src: "{image}",
                                        alt: item.title.clone().unwrap_or_default(),
                                        loading: "lazy",
                                    }
                                }
                            }
                            if let Some(title) = item.title.as_deref() {
                                h3 { class: "catalog__heading", "{title}" }
                            }
                            if let Some(body) = item.description.as_deref() {
                                // Trailing informational sections ship HTML here.
                                div {
                                    class: "catalog__body",
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
