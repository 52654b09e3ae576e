//! Typed section model and the normalization registry.
//!
//! The wire format ships sections as `{ type, name, description, values }`
//! where the shape of `values` depends on `type`. This module turns that
//! string-keyed dispatch into a closed sum type so renderers can match
//! exhaustively, and owns the normalization policy:
//!
//! - at most one section per kind; the first occurrence wins, duplicates are
//!   silently dropped;
//! - unknown kinds are ignored (new server-side sections must not break old
//!   clients);
//! - a value item that fails to decode is dropped with a diagnostic, the rest
//!   of the section survives;
//! - output order is the client's fixed presentation order, not the payload's
//!   `order_idx` hint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::RawSection;

/// Closed set of section discriminants the client knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    BundleItems,
    Offers,
    Instructors,
    Features,
    GroupJoinEngagement,
    Pointers,
    ContentPreview,
    About,
    FeatureExplanations,
    FreeItems,
    Certificate,
    Testimonials,
    Requirements,
    HowToPay,
    Faq,
}

impl SectionKind {
    /// Fixed visual order of the page (the hero is implicit and always
    /// first). The payload's `order_idx` is deliberately not consulted.
    pub const PRESENTATION_ORDER: [SectionKind; 15] = [
        SectionKind::BundleItems,
        SectionKind::Offers,
        SectionKind::Instructors,
        SectionKind::Features,
        SectionKind::GroupJoinEngagement,
        SectionKind::Pointers,
        SectionKind::About,
        SectionKind::FeatureExplanations,
        SectionKind::ContentPreview,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::FreeItems,
        SectionKind::Certificate,
        SectionKind::Requirements,
        SectionKind::HowToPay,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "bundle_items" => SectionKind::BundleItems,
            "offers" => SectionKind::Offers,
            "instructors" => SectionKind::Instructors,
            "features" => SectionKind::Features,
            "group_join_engagement" => SectionKind::GroupJoinEngagement,
            "pointers" => SectionKind::Pointers,
            "content_preview" => SectionKind::ContentPreview,
            "about" => SectionKind::About,
            "feature_explanations" => SectionKind::FeatureExplanations,
            "free_items" => SectionKind::FreeItems,
            "certificate" => SectionKind::Certificate,
            "testimonials" => SectionKind::Testimonials,
            "requirements" => SectionKind::Requirements,
            "how_to_pay" => SectionKind::HowToPay,
            "faq" => SectionKind::Faq,
            _ => return None,
        })
    }

    pub fn tag(self) -> &'static str {
        match self {
            SectionKind::BundleItems => "bundle_items",
            SectionKind::Offers => "offers",
            SectionKind::Instructors => "instructors",
            SectionKind::Features => "features",
            SectionKind::GroupJoinEngagement => "group_join_engagement",
            SectionKind::Pointers => "pointers",
            SectionKind::ContentPreview => "content_preview",
            SectionKind::About => "about",
            SectionKind::FeatureExplanations => "feature_explanations",
            SectionKind::FreeItems => "free_items",
            SectionKind::Certificate => "certificate",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Requirements => "requirements",
            SectionKind::HowToPay => "how_to_pay",
            SectionKind::Faq => "faq",
        }
    }
}

/// Course instructor card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    /// HTML blob.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub has_instructor_page: bool,
}

/// "How the course is laid out" tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub clicked_url: String,
    #[serde(default)]
    pub color: String,
}

/// Lead-magnet banner ("download the free PDF" card).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_color: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub top_left_icon_img: Option<String>,
    #[serde(default)]
    pub background: Option<Background>,
    #[serde(default)]
    pub cta: Option<Cta>,
}

/// "What you will learn" bullet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Inline lesson preview (video or still).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Long-form course-details block; title and description are HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutBlock {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Exclusive-feature card with an illustration and a checklist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureExplanation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub video_thumbnail: Option<String>,
}

/// Generic catalog entry used by the bundle/free-items and the trailing
/// informational sections (certificate, requirements, payment process).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Carries the achieved band score in this dataset.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub testimonial: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub video_type: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    /// HTML blob.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Promotion entry; `template == "timer"` drives the countdown card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub start_at: Option<String>,
    #[serde(default)]
    pub end_at: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub background_img: Option<String>,
    #[serde(default)]
    pub checklist_text_color: Option<String>,
}

impl OfferItem {
    pub fn is_timer(&self) -> bool {
        self.template.as_deref() == Some("timer")
    }
}

/// Decoded payload, one variant per known section kind. A renderer matches on
/// this and gets compile-time coverage checking for free.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    BundleItems(Vec<CatalogItem>),
    Offers(Vec<OfferItem>),
    Instructors(Vec<Instructor>),
    Features(Vec<FeatureItem>),
    GroupJoinEngagement(Vec<EngagementItem>),
    Pointers(Vec<Pointer>),
    ContentPreview(Vec<PreviewItem>),
    About(Vec<AboutBlock>),
    FeatureExplanations(Vec<FeatureExplanation>),
    FreeItems(Vec<CatalogItem>),
    Certificate(Vec<CatalogItem>),
    Testimonials(Vec<Testimonial>),
    Requirements(Vec<CatalogItem>),
    HowToPay(Vec<CatalogItem>),
    Faq(Vec<FaqItem>),
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::BundleItems(_) => SectionKind::BundleItems,
            SectionBody::Offers(_) => SectionKind::Offers,
            SectionBody::Instructors(_) => SectionKind::Instructors,
            SectionBody::Features(_) => SectionKind::Features,
            SectionBody::GroupJoinEngagement(_) => SectionKind::GroupJoinEngagement,
            SectionBody::Pointers(_) => SectionKind::Pointers,
            SectionBody::ContentPreview(_) => SectionKind::ContentPreview,
            SectionBody::About(_) => SectionKind::About,
            SectionBody::FeatureExplanations(_) => SectionKind::FeatureExplanations,
            SectionBody::FreeItems(_) => SectionKind::FreeItems,
            SectionBody::Certificate(_) => SectionKind::Certificate,
            SectionBody::Testimonials(_) => SectionKind::Testimonials,
            SectionBody::Requirements(_) => SectionKind::Requirements,
            SectionBody::HowToPay(_) => SectionKind::HowToPay,
            SectionBody::Faq(_) => SectionKind::Faq,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SectionBody::BundleItems(v)
            | SectionBody::FreeItems(v)
            | SectionBody::Certificate(v)
            | SectionBody::Requirements(v)
            | SectionBody::HowToPay(v) => v.is_empty(),
            SectionBody::Offers(v) => v.is_empty(),
            SectionBody::Instructors(v) => v.is_empty(),
            SectionBody::Features(v) => v.is_empty(),
            SectionBody::GroupJoinEngagement(v) => v.is_empty(),
            SectionBody::Pointers(v) => v.is_empty(),
            SectionBody::ContentPreview(v) => v.is_empty(),
            SectionBody::About(v) => v.is_empty(),
            SectionBody::FeatureExplanations(v) => v.is_empty(),
            SectionBody::Testimonials(v) => v.is_empty(),
            SectionBody::Faq(v) => v.is_empty(),
        }
    }
}

/// A normalized section ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub description: String,
    pub body: SectionBody,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

/// The normalized, ordered section list for one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSet {
    ordered: Vec<Section>,
}

impl SectionSet {
    /// Build the set from the raw wire sections. See the module docs for the
    /// dedup / unknown-kind / bad-item policies.
    pub fn normalize(raw: &[RawSection]) -> Self {
        let mut ordered = Vec::new();
        for kind in SectionKind::PRESENTATION_ORDER {
            let Some(section) = raw.iter().find(|s| s.kind == kind.tag()) else {
                continue;
            };
            ordered.push(Section {
                name: section.name.clone(),
                description: section.description.clone(),
                body: decode_body(kind, &section.values),
            });
        }
        Self { ordered }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.ordered.iter()
    }

    pub fn get(&self, kind: SectionKind) -> Option<&Section> {
        self.ordered.iter().find(|s| s.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

fn decode_body(kind: SectionKind, values: &Value) -> SectionBody {
    match kind {
        SectionKind::BundleItems => SectionBody::BundleItems(decode_values(kind, values)),
        SectionKind::Offers => SectionBody::Offers(decode_values(kind, values)),
        SectionKind::Instructors => SectionBody::Instructors(decode_values(kind, values)),
        SectionKind::Features => SectionBody::Features(decode_values(kind, values)),
        SectionKind::GroupJoinEngagement => {
            SectionBody::GroupJoinEngagement(decode_values(kind, values))
        }
        SectionKind::Pointers => SectionBody::Pointers(decode_values(kind, values)),
        SectionKind::ContentPreview => SectionBody::ContentPreview(decode_values(kind, values)),
        SectionKind::About => SectionBody::About(decode_values(kind, values)),
        SectionKind::FeatureExplanations => {
            SectionBody::FeatureExplanations(decode_values(kind, values))
        }
        SectionKind::FreeItems => SectionBody::FreeItems(decode_values(kind, values)),
        SectionKind::Certificate => SectionBody::Certificate(decode_values(kind, values)),
        SectionKind::Testimonials => SectionBody::Testimonials(decode_values(kind, values)),
        SectionKind::Requirements => SectionBody::Requirements(decode_values(kind, values)),
        SectionKind::HowToPay => SectionBody::HowToPay(decode_values(kind, values)),
        SectionKind::Faq => SectionBody::Faq(decode_values(kind, values)),
    }
}

/// Decode each value item on its own so one malformed entry cannot take the
/// whole section down. Dropped items are logged, not fatal.
fn decode_values<T: DeserializeOwned>(kind: SectionKind, values: &Value) -> Vec<T> {
    let Some(items) = values.as_array() else {
        return Vec::new();
    };
    let mut decoded = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(value) => decoded.push(value),
            Err(err) => {
                eprintln!("[content] dropping malformed {} value: {err}", kind.tag());
            }
        }
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(kind: &str, name: &str, values: Value) -> RawSection {
        RawSection {
            kind: kind.into(),
            name: name.into(),
            values,
            ..RawSection::default()
        }
    }

    #[test]
    fn unknown_kinds_are_ignored() {
        let sections = [
            raw("faq", "FAQ", json!([{ "question": "Q1", "answer": "A1" }])),
            raw("bundle_certificate", "Certificates", json!([])),
            raw("holographic_preview", "??", json!([{ "weird": true }])),
        ];
        let set = SectionSet::normalize(&sections);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().map(Section::kind), Some(SectionKind::Faq));
    }

    #[test]
    fn first_duplicate_wins() {
        let sections = [
            raw("faq", "first", json!([{ "question": "Q1" }])),
            raw("faq", "second", json!([{ "question": "Q2" }, { "question": "Q3" }])),
        ];
        let set = SectionSet::normalize(&sections);
        assert_eq!(set.len(), 1);
        let faq = set.get(SectionKind::Faq).expect("faq present");
        assert_eq!(faq.name, "first");
        match &faq.body {
            SectionBody::Faq(items) => assert_eq!(items.len(), 1),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn output_follows_presentation_order_not_order_idx() {
        let mut faq = raw("faq", "FAQ", json!([]));
        faq.order_idx = 0;
        let mut offers = raw("offers", "Offers", json!([]));
        offers.order_idx = 99;
        let set = SectionSet::normalize(&[faq, offers]);
        let kinds: Vec<SectionKind> = set.iter().map(Section::kind).collect();
        assert_eq!(kinds, vec![SectionKind::Offers, SectionKind::Faq]);
    }

    #[test]
    fn empty_values_produce_empty_body() {
        let set = SectionSet::normalize(&[raw("certificate", "Certificate", json!([]))]);
        let section = set.get(SectionKind::Certificate).expect("present");
        assert!(section.body.is_empty());
    }

    #[test]
    fn malformed_value_items_are_dropped_individually() {
        let sections = [raw(
            "pointers",
            "Learn",
            json!([
                { "text": "valid", "color": "black" },
                "not-an-object",
                { "text": "also valid" }
            ]),
        )];
        let set = SectionSet::normalize(&sections);
        match &set.get(SectionKind::Pointers).expect("present").body {
            SectionBody::Pointers(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].text.as_deref(), Some("valid"));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn optional_everything_still_decodes() {
        let sections = [raw("instructors", "", json!([{}]))];
        let set = SectionSet::normalize(&sections);
        match &set.get(SectionKind::Instructors).expect("present").body {
            SectionBody::Instructors(items) => {
                assert_eq!(items.len(), 1);
                assert!(items[0].name.is_none());
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn non_array_values_are_treated_as_empty() {
        let set = SectionSet::normalize(&[raw("features", "Layout", Value::Null)]);
        assert!(set.get(SectionKind::Features).expect("present").body.is_empty());
    }
}
