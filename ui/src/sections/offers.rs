use api::section::OfferItem;
use dioxus::prelude::*;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::core::timing;
use crate::t;

/// Remaining time split for display. A deadline in the past clamps to all
/// zeros rather than counting up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub fn is_over(&self) -> bool {
        *self == Countdown::default()
    }
}

pub fn parse_deadline(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

pub fn until(now: OffsetDateTime, deadline: OffsetDateTime) -> Countdown {
    let remaining = (deadline - now).whole_seconds();
    if remaining <= 0 {
        return Countdown::default();
    }
    let remaining = remaining as u64;
    Countdown {
        days: remaining / 86_400,
        hours: (remaining % 86_400) / 3_600,
        minutes: (remaining % 3_600) / 60,
        seconds: remaining % 60,
    }
}

/// Whether the section needs a live clock: at least one timer offer with a
/// deadline to count down to.
pub fn needs_tick(items: &[OfferItem]) -> bool {
    items.iter().any(|o| o.is_timer() && o.end_at.is_some())
}

#[component]
pub fn OffersSection(name: String, description: String, items: Vec<OfferItem>) -> Element {
    let mut now = use_signal(timing::now);

    // 1s tick, but only while a timer offer is actually on screen.
    let has_timer = needs_tick(&items);
    use_future(move || async move {
        if !has_timer {
            return;
        }
        loop {
            timing::sleep_ms(1_000).await;
            now.set(timing::now());
        }
    });

    rsx! {
        section { class: "section section--offers",
            if !name.is_empty() {
                h2 { class: "section__title", "{name}" }
            }
            if !description.is_empty() {
                p { class: "section__subtitle", "{description}" }
            }
            if items.is_empty() {
                p { class: "section__empty", {t!("section-empty")} }
            }
            for (index, offer) in items.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "offer",
                    style: offer_style(offer),
                    if let Some(text) = offer.text.as_deref() {
                        p { class: "offer__text", "{text}" }
                    }
                    if has_timer && offer.is_timer() {
                        if let Some(deadline) = offer.end_at.as_deref().and_then(parse_deadline) {
                            {render_countdown(until(now(), deadline))}
                        }
                    }
                }
            }
        }
    }
}

fn render_countdown(countdown: Countdown) -> Element {
    if countdown.is_over() {
        return rsx! {};
    }
    rsx! {
        div { class: "offer__countdown",
            CountdownUnit { amount: countdown.days, label: t!("countdown-days") }
            CountdownUnit { amount: countdown.hours, label: t!("countdown-hours") }
            CountdownUnit { amount: countdown.minutes, label: t!("countdown-minutes") }
            CountdownUnit { amount: countdown.seconds, label: t!("countdown-seconds") }
        }
    }
}

#[component]
fn CountdownUnit(amount: u64, label: String) -> Element {
    rsx! {
        div { class: "offer__unit",
            span { class: "offer__amount", "{amount:02}" }
            span { class: "offer__label", "{label}" }
        }
    }
}

fn offer_style(offer: &OfferItem) -> String {
    let mut style = String::new();
    if let Some(color) = offer.background_color.as_deref() {
        if !color.is_empty() {
            style.push_str(&format!("background-color: {color};"));
        }
    }
    if let Some(image) = offer.background_img.as_deref() {
        if !image.is_empty() {
            style.push_str(&format!("background-image: url('{image}');"));
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn deadline_parses_rfc3339_with_fractional_seconds() {
        let deadline = parse_deadline("2025-12-31T17:59:00.000Z").expect("parses");
        assert_eq!(deadline.year(), 2025);
        assert_eq!(deadline.hour(), 17);
        assert!(parse_deadline("31-12-2025").is_none());
        assert!(parse_deadline("").is_none());
    }

    #[test]
    fn countdown_decomposes_remaining_time() {
        let now = datetime!(2025-12-30 17:59:00 UTC);
        let deadline = datetime!(2025-12-31 19:00:30 UTC);
        let countdown = until(now, deadline);
        assert_eq!(
            countdown,
            Countdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 30,
            }
        );
        assert!(!countdown.is_over());
    }

    #[test]
    fn expired_deadlines_clamp_to_zero() {
        let now = datetime!(2026-01-01 00:00:00 UTC);
        let deadline = datetime!(2025-12-31 17:59:00 UTC);
        let countdown = until(now, deadline);
        assert!(countdown.is_over());
        assert_eq!(countdown.seconds, 0);
    }

    #[test]
    fn deadline_exactly_now_counts_as_over() {
        let instant = datetime!(2025-06-01 12:00:00 UTC);
        assert!(until(instant, instant).is_over());
    }

    #[test]
    fn only_timer_offers_with_deadlines_need_a_clock() {
        assert!(!needs_tick(&[]));

        let plain = OfferItem {
            text: Some("Flat discount".into()),
            ..OfferItem::default()
        };
        assert!(!needs_tick(std::slice::from_ref(&plain)));

        let timer_without_deadline = OfferItem {
            template: Some("timer".into()),
            ..OfferItem::default()
        };
        assert!(!needs_tick(std::slice::from_ref(&timer_without_deadline)));

        let timer = OfferItem {
            template: Some("timer".into()),
            end_at: Some("2025-12-31T17:59:00.000Z".into()),
            ..OfferItem::default()
        };
        assert!(needs_tick(&[plain, timer]));
    }
}
