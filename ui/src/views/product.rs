//! The course landing page. Owns the content store, runs the fetch
//! lifecycle through a coroutine and renders the hero, the normalized
//! sections and the page chrome around them.

use std::cell::RefCell;
use std::rc::Rc;

use api::{fetch_product, ClientConfig, Language, Product};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::components::{ScrollToTop, SiteFooter, SiteHeader};
use crate::core::platform;
use crate::i18n;
use crate::sections::{render_section, HeroSection};
use crate::seo::{self, SeoHead};
use crate::store::{ContentState, ContentStore, FetchTicket, UiState};
use crate::t;

enum ContentEvent {
    Select(Language),
    Retry,
    Resolved {
        seq: u64,
        outcome: Result<Option<Product>, String>,
    },
}

#[component]
pub fn ProductView(lang: ReadOnlySignal<Language>, on_language_change: EventHandler<Language>) -> Element {
    use_context_provider(|| Signal::new(UiState::default()));
    let store = use_signal(ContentStore::new);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ContentEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let store_ref = store.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ContentEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut store_signal = store_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        ContentEvent::Select(language) => {
                            i18n::apply(language);
                            let ticket =
                                store_signal.with_mut(|store| store.select_language(language));
                            launch_fetch(sender_slot.clone(), ticket);
                        }
                        ContentEvent::Retry => {
                            let ticket = store_signal.with_mut(ContentStore::retry);
                            launch_fetch(sender_slot.clone(), ticket);
                        }
                        ContentEvent::Resolved { seq, outcome } => {
                            store_signal.with_mut(|store| store.resolve(seq, outcome));
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    // The route owns the language; every change (including the initial render)
    // flows through the same selection path.
    use_effect(move || {
        coroutine.send(ContentEvent::Select(lang()));
    });

    let snapshot = store();

    rsx! {
        div { class: "page",
            SiteHeader {
                language: snapshot.language,
                on_language_change: move |language| on_language_change.call(language),
            }

            main { class: "page__main",
                match &snapshot.state {
                    ContentState::Idle | ContentState::Loading => rsx! {
                        div { class: "page__status page__status--loading",
                            span { class: "page__spinner", aria_hidden: "true" }
                            p { {t!("loading-course")} }
                        }
                    },
                    ContentState::Failed(message) => rsx! {
                        div { class: "page__status page__status--error",
                            h2 { {t!("error-title")} }
                            p { class: "page__error-detail", "{message}" }
                            button {
                                r#type: "button",
                                class: "page__retry",
                                onclick: move |_| coroutine.send(ContentEvent::Retry),
                                {t!("error-retry")}
                            }
                        }
                    },
                    ContentState::Empty => rsx! {
                        div { class: "page__status page__status--empty",
                            h2 { {t!("empty-title")} }
                            button {
                                r#type: "button",
                                class: "page__retry",
                                onclick: move |_| coroutine.send(ContentEvent::Retry),
                                {t!("empty-refresh")}
                            }
                        }
                    },
                    ContentState::Ready(content) => {
                        let plan = seo::synthesize(
                            &content.product.seo,
                            snapshot.language,
                            &platform::page_url(),
                        );
                        let product = content.product.clone();
                        rsx! {
                            SeoHead { plan }
                            HeroSection { product, language: snapshot.language }
                            for section in content.sections.iter() {
                                {render_section(section, snapshot.language)}
                            }
                        }
                    }
                }
            }

            SiteFooter {}
            ScrollToTop {}
        }
    }
}

/// Run one fetch for a ticket. The outcome is reported back tagged with the
/// ticket's sequence number; the store decides whether it is still relevant.
fn launch_fetch(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ContentEvent>>>>,
    ticket: FetchTicket,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_detached(async move {
            let outcome = fetch_product(&ClientConfig::default(), ticket.language)
                .await
                .map_err(|err| err.to_string());
            let _ = sender.unbounded_send(ContentEvent::Resolved {
                seq: ticket.seq,
                outcome,
            });
        });
    }
}
