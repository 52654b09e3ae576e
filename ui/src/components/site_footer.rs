use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                span { class: "footer__brand", {t!("brand-name")} }
                div { class: "footer__contact",
                    a { href: "tel:16910", {t!("faq-contact-phone")} }
                    a { href: "mailto:support@coursefront.app", {t!("faq-contact-mail")} }
                }
                span { class: "footer__rights", {t!("footer-rights")} }
            }
        }
    }
}
