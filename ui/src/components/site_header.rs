use api::Language;
use dioxus::prelude::*;

use crate::store::UiState;
use crate::t;

/// Sticky header: brand, in-page navigation and the language switcher. The
/// mobile menu flag lives in the shared [`UiState`] so other chrome can close
/// it.
#[component]
pub fn SiteHeader(language: Language, on_language_change: EventHandler<Language>) -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let menu_open = ui().menu_open;

    let nav_links = [
        ("#course", t!("nav-course")),
        ("#instructor", t!("nav-instructor")),
        ("#features", t!("nav-features")),
        ("#details", t!("nav-details")),
    ];

    rsx! {
        header { class: "header",
            div { class: "header__inner",
                a { class: "header__brand", href: "#course",
                    span { class: "header__brand-name", {t!("brand-name")} }
                    span { class: "header__brand-tagline", {t!("brand-tagline")} }
                }

                button {
                    r#type: "button",
                    class: "header__menu-toggle",
                    aria_label: t!("nav-menu-label"),
                    aria_expanded: menu_open,
                    onclick: move |_| ui.with_mut(UiState::toggle_menu),
                    "☰"
                }

                nav {
                    class: if menu_open { "header__nav header__nav--open" } else { "header__nav" },
                    for (href, label) in nav_links {
                        a {
                            key: "{href}",
                            class: "header__link",
                            href: "{href}",
                            onclick: move |_| {
                                ui.with_mut(|state| {
                                    state.set_menu_open(false);
                                    state.set_active_section(Some(href.trim_start_matches('#').to_string()));
                                });
                            },
                            "{label}"
                        }
                    }
                }

                div { class: "header__lang", role: "group", aria_label: t!("nav-language-label"),
                    LanguageButton {
                        target: Language::En,
                        current: language,
                        label: t!("lang-en"),
                        on_select: on_language_change,
                    }
                    LanguageButton {
                        target: Language::Bn,
                        current: language,
                        label: t!("lang-bn"),
                        on_select: on_language_change,
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageButton(
    target: Language,
    current: Language,
    label: String,
    on_select: EventHandler<Language>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if target == current {
                "header__lang-button header__lang-button--active"
            } else {
                "header__lang-button"
            },
            disabled: target == current,
            onclick: move |_| on_select.call(target),
            "{label}"
        }
    }
}
