//! SEO synthesis and document-head application.
//!
//! `synthesize` is a pure transformation from the payload's seo block (plus
//! the current language and page URL) to a [`HeadPlan`]: a declarative
//! description of every head mutation, keyed by stable slot ids. The
//! [`SeoHead`] component is the only place that touches the live document,
//! and it honors the idempotent contract: applying a plan replaces whatever
//! previously occupied a slot, and unmounting retracts every injected node.

use std::collections::BTreeMap;

use api::model::Seo;
use api::Language;
use dioxus::prelude::*;

/// Which attribute a meta descriptor keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaNamespace {
    Name,
    Property,
}

impl MetaNamespace {
    pub fn attr(self) -> &'static str {
        match self {
            MetaNamespace::Name => "name",
            MetaNamespace::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub slot: String,
    pub namespace: MetaNamespace,
    pub key: String,
    pub content: String,
}

/// A validated JSON-LD payload destined for a `<script>` block.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScript {
    pub slot: String,
    pub json: String,
}

/// Declarative description of the whole document head for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadPlan {
    pub title: String,
    pub description: String,
    /// Comma-joined keyword list.
    pub keywords: String,
    pub metas: Vec<MetaTag>,
    pub schemas: Vec<SchemaScript>,
    /// Count of structured-data entries rejected as malformed JSON.
    pub dropped_schemas: usize,
}

/// One occupant of a head slot, for the slot-map view of the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadSlot<'a> {
    Meta(&'a MetaTag),
    Schema(&'a SchemaScript),
}

impl HeadPlan {
    /// Map from slot id to its occupant. Slot ids are unique by construction;
    /// re-synthesizing after a content change yields the same id scheme, so
    /// application replaces rather than duplicates.
    pub fn slots(&self) -> BTreeMap<&str, HeadSlot<'_>> {
        let mut slots = BTreeMap::new();
        for meta in &self.metas {
            slots.insert(meta.slot.as_str(), HeadSlot::Meta(meta));
        }
        for schema in &self.schemas {
            slots.insert(schema.slot.as_str(), HeadSlot::Schema(schema));
        }
        slots
    }

    pub fn slot_ids(&self) -> Vec<String> {
        self.metas
            .iter()
            .map(|m| m.slot.clone())
            .chain(self.schemas.iter().map(|s| s.slot.clone()))
            .collect()
    }
}

/// Derive the head plan for a seo block.
///
/// Structured-data entries are parsed here solely to prove well-formedness;
/// a malformed entry is dropped with a warning and the rest continue. The
/// supplementary social/mobile tags are synthesized from the title and
/// description, with the Open Graph locale following the active language.
pub fn synthesize(seo: &Seo, language: Language, page_url: &str) -> HeadPlan {
    let mut metas = Vec::new();

    for (index, meta) in seo.default_meta.iter().enumerate() {
        let namespace = match meta.kind.as_str() {
            "property" => MetaNamespace::Property,
            // "name" and anything unrecognized land in the name namespace.
            _ => MetaNamespace::Name,
        };
        metas.push(MetaTag {
            slot: format!("dynamic-meta-{index}"),
            namespace,
            key: meta.value.clone(),
            content: meta.content.clone(),
        });
    }

    let mut schemas = Vec::new();
    let mut dropped = 0usize;
    for entry in &seo.schema {
        if entry.kind != "ld-json" || entry.meta_value.is_empty() {
            continue;
        }
        match serde_json::from_str::<serde_json::Value>(&entry.meta_value) {
            Ok(_) => schemas.push(SchemaScript {
                slot: format!("dynamic-schema-{}", schemas.len()),
                json: entry.meta_value.clone(),
            }),
            Err(err) => {
                dropped += 1;
                eprintln!("[seo] dropping malformed JSON-LD schema: {err}");
            }
        }
    }

    for (index, (namespace, key, content)) in
        supplementary_tags(seo, language, page_url).into_iter().enumerate()
    {
        metas.push(MetaTag {
            slot: format!("additional-meta-{index}"),
            namespace,
            key,
            content,
        });
    }

    HeadPlan {
        title: seo.title.clone(),
        description: seo.description.clone(),
        keywords: seo.keywords.join(", "),
        metas,
        schemas,
        dropped_schemas: dropped,
    }
}

/// Fixed social-sharing and mobile-web tags derived from the payload.
fn supplementary_tags(
    seo: &Seo,
    language: Language,
    page_url: &str,
) -> Vec<(MetaNamespace, String, String)> {
    use MetaNamespace::{Name, Property};

    let tag = |ns, key: &str, content: &str| (ns, key.to_string(), content.to_string());
    vec![
        tag(Property, "og:title", &seo.title),
        tag(Property, "og:description", &seo.description),
        tag(Property, "og:site_name", "Coursefront"),
        tag(Property, "og:type", "website"),
        tag(Property, "og:locale", language.locale_tag()),
        tag(Property, "og:url", page_url),
        tag(Name, "twitter:card", "summary_large_image"),
        tag(Name, "twitter:title", &seo.title),
        tag(Name, "twitter:description", &seo.description),
        tag(Name, "twitter:site", "@coursefront"),
        tag(Name, "robots", "index, follow"),
        tag(Name, "author", "Coursefront"),
        tag(Name, "theme-color", "#0ea5e9"),
        tag(Name, "apple-mobile-web-app-capable", "yes"),
        tag(Name, "apple-mobile-web-app-title", "Coursefront"),
    ]
}

/// Applies a [`HeadPlan`] to the live document head and retracts it on drop.
/// Off the web target this renders nothing and touches nothing.
#[component]
pub fn SeoHead(plan: ReadOnlySignal<HeadPlan>) -> Element {
    use std::cell::RefCell;
    use std::rc::Rc;

    let applied: Rc<RefCell<Vec<String>>> = use_hook(|| Rc::new(RefCell::new(Vec::new())));

    {
        let applied = applied.clone();
        use_effect(move || {
            let current = plan();
            let new_ids = head::apply(&current);
            // Retract slots the previous plan used but this one no longer does.
            let mut book = applied.borrow_mut();
            for stale in book.iter().filter(|id| !new_ids.contains(id)) {
                head::remove_slot(stale);
            }
            *book = new_ids;
        });
    }

    use_drop(move || {
        head::retract(&applied.borrow());
    });

    rsx! {}
}

/// Imperative head bookkeeping, isolated so the rest of the module stays
/// pure. Replace-by-id semantics throughout.
mod head {
    use super::HeadPlan;

    /// Fixed slots for the always-present singleton tags.
    pub const DESCRIPTION_SLOT: &str = "seo-description";
    pub const KEYWORDS_SLOT: &str = "seo-keywords";

    #[cfg(target_arch = "wasm32")]
    pub fn apply(plan: &HeadPlan) -> Vec<String> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Some(head) = document.head() else {
            return Vec::new();
        };

        document.set_title(&plan.title);

        let mut applied = Vec::new();
        let mut place = |slot: &str, element: Option<web_sys::Element>| {
            if let Some(element) = element {
                if let Some(existing) = document.get_element_by_id(slot) {
                    existing.remove();
                }
                let _ = element.set_attribute("id", slot);
                let _ = head.append_child(&element);
                applied.push(slot.to_string());
            }
        };

        place(
            DESCRIPTION_SLOT,
            meta_element(&document, "name", "description", &plan.description),
        );
        place(
            KEYWORDS_SLOT,
            meta_element(&document, "name", "keywords", &plan.keywords),
        );
        for meta in &plan.metas {
            place(
                &meta.slot,
                meta_element(&document, meta.namespace.attr(), &meta.key, &meta.content),
            );
        }
        for schema in &plan.schemas {
            let element = document.create_element("script").ok().map(|el| {
                let _ = el.set_attribute("type", "application/ld+json");
                el.set_text_content(Some(&schema.json));
                el
            });
            place(&schema.slot, element);
        }
        applied
    }

    #[cfg(target_arch = "wasm32")]
    fn meta_element(
        document: &web_sys::Document,
        attr: &str,
        key: &str,
        content: &str,
    ) -> Option<web_sys::Element> {
        let element = document.create_element("meta").ok()?;
        element.set_attribute(attr, key).ok()?;
        element.set_attribute("content", content).ok()?;
        Some(element)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn remove_slot(slot: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(slot) {
                element.remove();
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn retract(slots: &[String]) {
        for slot in slots {
            remove_slot(slot);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply(_plan: &HeadPlan) -> Vec<String> {
        Vec::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn remove_slot(_slot: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn retract(_slots: &[String]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::model::{SeoMeta, SeoSchema};

    fn seo_fixture() -> Seo {
        Seo {
            title: "Best IELTS Preparation Course".into(),
            description: "Mock tests and a premium study book.".into(),
            keywords: vec!["IELTS".into(), "IELTS Course".into()],
            default_meta: vec![
                SeoMeta {
                    kind: "property".into(),
                    value: "og:image".into(),
                    content: "https://cdn.example.com/a.png".into(),
                },
                SeoMeta {
                    kind: "name".into(),
                    value: "og:description".into(),
                    content: "desc".into(),
                },
                SeoMeta {
                    kind: "mystery".into(),
                    value: "x:key".into(),
                    content: "v".into(),
                },
            ],
            schema: Vec::new(),
        }
    }

    fn schema(value: &str) -> SeoSchema {
        SeoSchema {
            kind: "ld-json".into(),
            meta_name: "ld-json".into(),
            meta_value: value.into(),
        }
    }

    #[test]
    fn namespaces_follow_the_source_discriminant() {
        let plan = synthesize(&seo_fixture(), Language::En, "https://x.test/");
        assert_eq!(plan.metas[0].namespace, MetaNamespace::Property);
        assert_eq!(plan.metas[0].key, "og:image");
        assert_eq!(plan.metas[1].namespace, MetaNamespace::Name);
        // Unrecognized discriminants default to the name namespace.
        assert_eq!(plan.metas[2].namespace, MetaNamespace::Name);
    }

    #[test]
    fn malformed_schemas_are_dropped_and_counted() {
        let mut seo = seo_fixture();
        seo.schema = vec![
            schema(r#"{"@type": "Product"}"#),
            schema("{ not json at all"),
            schema(r#"{"@type": "VideoObject"}"#),
            schema(r#"{"@type": "Brand"}"#),
        ];
        let plan = synthesize(&seo, Language::En, "https://x.test/");
        assert_eq!(plan.schemas.len(), 3);
        assert_eq!(plan.dropped_schemas, 1);
        // Kept schemas are numbered densely so slots stay stable.
        assert_eq!(plan.schemas[0].slot, "dynamic-schema-0");
        assert_eq!(plan.schemas[2].slot, "dynamic-schema-2");
    }

    #[test]
    fn empty_and_foreign_schema_entries_are_skipped_silently() {
        let mut seo = seo_fixture();
        seo.schema = vec![
            schema(""),
            SeoSchema {
                kind: "microdata".into(),
                meta_name: "other".into(),
                meta_value: r#"{"ok": true}"#.into(),
            },
        ];
        let plan = synthesize(&seo, Language::En, "https://x.test/");
        assert!(plan.schemas.is_empty());
        assert_eq!(plan.dropped_schemas, 0);
    }

    #[test]
    fn locale_tag_tracks_the_language() {
        let plan = synthesize(&seo_fixture(), Language::Bn, "https://x.test/p");
        let locale = plan
            .metas
            .iter()
            .find(|m| m.key == "og:locale")
            .expect("og:locale present");
        assert_eq!(locale.content, "bn_BD");
        let url = plan.metas.iter().find(|m| m.key == "og:url").expect("og:url");
        assert_eq!(url.content, "https://x.test/p");

        let plan = synthesize(&seo_fixture(), Language::En, "https://x.test/p");
        let locale = plan
            .metas
            .iter()
            .find(|m| m.key == "og:locale")
            .expect("og:locale present");
        assert_eq!(locale.content, "en_US");
    }

    #[test]
    fn slot_ids_are_unique_and_stable() {
        let seo = seo_fixture();
        let first = synthesize(&seo, Language::En, "https://x.test/");
        let second = synthesize(&seo, Language::En, "https://x.test/");
        assert_eq!(first.slot_ids(), second.slot_ids());

        let slots = first.slots();
        assert_eq!(slots.len(), first.metas.len() + first.schemas.len());
        assert!(slots.contains_key("dynamic-meta-0"));
        assert!(slots.contains_key("additional-meta-0"));
    }

    #[test]
    fn keywords_are_comma_joined() {
        let plan = synthesize(&seo_fixture(), Language::En, "https://x.test/");
        assert_eq!(plan.keywords, "IELTS, IELTS Course");
    }
}
