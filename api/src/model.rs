//! Wire-level types for the product content service.
//!
//! Everything here mirrors the JSON the discovery endpoint returns. Fields the
//! renderer never reads are left out on purpose; collections default to empty
//! and scalars are optional so no payload permutation fails to deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level response wrapper. A populated `error` array means the request
/// failed regardless of the HTTP status code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub data: Option<Product>,
    #[serde(default)]
    pub error: Vec<Value>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub payload: Vec<Value>,
    #[serde(default)]
    pub status_code: i64,
}

/// The fetched product. Immutable once constructed; a re-fetch replaces the
/// whole value, nothing is patched in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Rich-text HTML blob.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub modality: String,
    #[serde(default)]
    pub start_at: String,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub seo: Seo,
    #[serde(default)]
    pub cta_text: CtaText,
    #[serde(default)]
    pub sections: Vec<RawSection>,
    #[serde(default)]
    pub delivery_method: String,
}

impl Product {
    /// A product with no title and no sections renders as nothing useful, so
    /// the store treats it as the "no data" outcome.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.sections.is_empty()
    }
}

/// Gallery entry. Video values carry a YouTube id (or URL) plus a thumbnail;
/// image values carry an absolute URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resource_type", rename_all = "lowercase")]
pub enum Media {
    Video {
        #[serde(default)]
        name: String,
        #[serde(default)]
        resource_value: String,
        #[serde(default)]
        thumbnail_url: Option<String>,
    },
    Image {
        #[serde(default)]
        name: String,
        #[serde(default)]
        resource_value: String,
        #[serde(default)]
        thumbnail_url: Option<String>,
    },
}

impl Media {
    pub fn name(&self) -> &str {
        match self {
            Media::Video { name, .. } | Media::Image { name, .. } => name,
        }
    }

    pub fn resource_value(&self) -> &str {
        match self {
            Media::Video { resource_value, .. } | Media::Image { resource_value, .. } => {
                resource_value
            }
        }
    }
}

/// Hero fact row ("Total Enrolled 33007", "54 Videos", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub list_page_visibility: bool,
}

/// Document-head description shipped with the product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, rename = "defaultMeta")]
    pub default_meta: Vec<SeoMeta>,
    #[serde(default)]
    pub schema: Vec<SeoSchema>,
}

/// Generic meta-tag descriptor. `kind` picks the attribute namespace: `name`
/// or `property`; `value` is the key (e.g. `og:title`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoMeta {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub content: String,
}

/// Structured-data payload. `meta_value` is an opaque JSON-LD string; it is
/// only parsed (to validate well-formedness) at injection time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoSchema {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub meta_name: String,
    #[serde(default)]
    pub meta_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaText {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// A section as it appears on the wire: a string discriminant plus a payload
/// whose shape depends on that discriminant. Normalization into the typed
/// [`crate::section::SectionBody`] happens in `section::SectionSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bg_color: String,
    /// Server-side ordering hint. The client ignores it; see DESIGN.md.
    #[serde(default)]
    pub order_idx: i64,
    #[serde(default)]
    pub values: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_fields() {
        let envelope: Envelope = serde_json::from_str("{}").expect("empty envelope");
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_empty());
    }

    #[test]
    fn media_decodes_by_resource_type() {
        let json = r#"[
            {"name": "preview_gallery", "resource_type": "video", "resource_value": "zrlYnaZftEQ", "thumbnail_url": "https://cdn.example.com/t.png"},
            {"name": "thumbnail", "resource_type": "image", "resource_value": "https://cdn.example.com/i.png"}
        ]"#;
        let media: Vec<Media> = serde_json::from_str(json).expect("media list");
        assert!(matches!(&media[0], Media::Video { resource_value, .. } if resource_value == "zrlYnaZftEQ"));
        assert!(matches!(&media[1], Media::Image { .. }));
    }

    #[test]
    fn raw_section_keeps_values_opaque() {
        let json = r#"{"type": "faq", "name": "FAQ", "order_idx": 9,
                       "values": [{"question": "Q", "answer": "A"}]}"#;
        let section: RawSection = serde_json::from_str(json).expect("raw section");
        assert_eq!(section.kind, "faq");
        assert!(section.values.is_array());
    }

    #[test]
    fn blank_product_detection() {
        assert!(Product::default().is_blank());
        let named = Product {
            title: "IELTS Course".into(),
            ..Product::default()
        };
        assert!(!named.is_blank());
    }
}
