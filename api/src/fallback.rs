//! Deterministic stand-in product used when no network is available.
//!
//! The live deployment surfaces fetch failures as a retry prompt instead of
//! silently swapping this in (see DESIGN.md); the fixture exists so the whole
//! normalize/render pipeline can be exercised offline and in tests. It must
//! satisfy every invariant a live product does: well-formed seo block, every
//! section tag inside the known set, schema-valid JSON-LD.

use serde_json::json;

use crate::language::Language;
use crate::model::{ChecklistItem, CtaText, Media, Product, RawSection, Seo, SeoMeta, SeoSchema};

const THUMB_16_9: &str = "https://cdn.coursefront.app/images/thumbnails/ielts_16_9.png";
const THUMB_1_1: &str = "https://cdn.coursefront.app/images/thumbnails/ielts_1_1.png";

/// Build the complete fallback product for a language. Pure; calling it twice
/// with the same language yields identical values.
pub fn fallback_product(language: Language) -> Product {
    let en = language == Language::En;

    Product {
        slug: "ielts-course".into(),
        id: 153,
        title: if en {
            "IELTS Course by Munzereen Shahid".into()
        } else {
            "IELTS কোর্স - মুনজেরিন শহীদ".into()
        },
        description: if en {
            "<p>Get complete preparation for Academic and General Training IELTS \
             in one course, guided by the country's best IELTS instructor.</p>"
                .into()
        } else {
            "<p>দেশসেরা IELTS ইন্সট্রাক্টরের গাইডলাইনে এক কোর্সেই Academic ও General \
             Training IELTS-এর সম্পূর্ণ প্রস্তুতি নিন।</p>"
                .into()
        },
        platform: "skills".into(),
        kind: "regular".into(),
        modality: "recorded".into(),
        start_at: String::new(),
        media: vec![
            Media::Video {
                name: "preview_gallery".into(),
                resource_value: "zrlYnaZftEQ".into(),
                thumbnail_url: Some(THUMB_16_9.into()),
            },
            Media::Image {
                name: "thumbnail".into(),
                resource_value: THUMB_16_9.into(),
                thumbnail_url: None,
            },
            Media::Image {
                name: "sqr_img".into(),
                resource_value: THUMB_1_1.into(),
                thumbnail_url: None,
            },
        ],
        checklist: vec![
            fact("fact-enrolled", if en { "Total Enrolled 33007" } else { "৩৩০০৭ জন শিক্ষার্থী" }, true),
            fact("fact-hours", if en { "Time Required 50 hours" } else { "সময় লাগবে ৫০ ঘণ্টা" }, true),
            fact("fact-videos", if en { "54 Videos" } else { "৫৪টি ভিডিও" }, true),
            fact("fact-mocks", if en { "10 Reading & 10 Listening Mocktests" } else { "১০টি রিডিং ও ১০টি লিসেনিং মক টেস্ট" }, false),
            fact("fact-validity", if en { "Course Validity Lifetime" } else { "কোর্সের মেয়াদ আজীবন" }, false),
        ],
        seo: fallback_seo(language),
        cta_text: CtaText {
            name: if en { "Enroll".into() } else { "কোর্সটি কিনুন".into() },
            value: "enroll".into(),
        },
        sections: fallback_sections(language),
        delivery_method: "courier".into(),
    }
}

fn fact(id: &str, text: &str, visible: bool) -> ChecklistItem {
    ChecklistItem {
        id: id.into(),
        text: text.into(),
        icon: format!("https://cdn.coursefront.app/icons/{id}.png"),
        color: "black".into(),
        list_page_visibility: visible,
    }
}

fn meta(kind: &str, value: &str, content: &str) -> SeoMeta {
    SeoMeta {
        kind: kind.into(),
        value: value.into(),
        content: content.into(),
    }
}

fn fallback_seo(language: Language) -> Seo {
    let en = language == Language::En;
    let title = if en {
        "Best IELTS Preparation Course by Munzereen Shahid"
    } else {
        "মুনজেরিন শহীদের সেরা IELTS প্রিপারেশন কোর্স"
    };
    let description = if en {
        "Take the best IELTS preparation with mock tests and a premium study book."
    } else {
        "মক টেস্ট ও প্রিমিয়াম বইসহ সেরা IELTS প্রস্তুতি নিন।"
    };

    Seo {
        title: title.into(),
        description: description.into(),
        keywords: vec![
            "IELTS Course".into(),
            "IELTS Preparation".into(),
            "IELTS Bangladesh".into(),
        ],
        default_meta: vec![
            meta("property", "og:title", title),
            meta("name", "og:description", description),
            meta("property", "og:type", "product"),
            meta("property", "og:image", THUMB_16_9),
            meta("property", "og:locale", language.locale_tag()),
        ],
        schema: vec![SeoSchema {
            kind: "ld-json".into(),
            meta_name: "ld-json".into(),
            meta_value: json!({
                "@context": "https://schema.org/",
                "@type": "Product",
                "name": "IELTS Course by Munzereen Shahid",
                "image": THUMB_16_9,
                "description": description,
                "sku": "153",
                "offers": {
                    "@type": "Offer",
                    "priceCurrency": "BDT",
                    "price": "5000"
                }
            })
            .to_string(),
        }],
    }
}

fn fallback_sections(language: Language) -> Vec<RawSection> {
    let en = language == Language::En;

    let mut sections = Vec::new();
    let mut push = |kind: &str, name: &str, values: serde_json::Value| {
        let order_idx = sections.len() as i64;
        sections.push(RawSection {
            kind: kind.into(),
            name: name.into(),
            description: String::new(),
            bg_color: String::new(),
            order_idx,
            values,
        });
    };

    push(
        "offers",
        "",
        json!([{
            "id": "offer-timer",
            "template": "timer",
            "text": if en { "Special offer ends in" } else { "অফার শেষ হতে বাকি" },
            "start_at": "2025-09-01T00:00:00.000Z",
            "end_at": "2025-12-31T17:59:00.000Z",
            "background_color": "#ff0000"
        }]),
    );

    push(
        "instructors",
        if en { "Course instructor" } else { "কোর্স ইন্সট্রাক্টর" },
        json!([{
            "name": "Munzereen Shahid",
            "short_description": if en { "Course Instructor" } else { "কোর্স ইন্সট্রাক্টর" },
            "description": "<p>MSc (English), University of Oxford (UK);<br>BA, MA (English), University of Dhaka;<br>IELTS: 8.5</p>",
            "image": "https://cdn.coursefront.app/images/instructors/munzereen.jpg",
            "slug": "munzereen-shahid",
            "has_instructor_page": true
        }]),
    );

    push(
        "features",
        if en { "How the course is laid out" } else { "কোর্সটি যেভাবে সাজানো হয়েছে" },
        json!([
            {
                "id": "feature-lectures",
                "icon": "https://cdn.coursefront.app/icons/lectures.png",
                "title": if en { "50+ video lectures" } else { "৫০+ ভিডিও লেকচার" },
                "subtitle": if en {
                    "In-depth discussion of the Academic and General Training formats"
                } else {
                    "Academic ও General Training ফরম্যাট নিয়ে বিস্তারিত আলোচনা"
                }
            },
            {
                "id": "feature-sheets",
                "icon": "https://cdn.coursefront.app/icons/sheets.png",
                "title": if en { "38 lecture sheets" } else { "৩৮টি লেকচার শিট" },
                "subtitle": if en {
                    "Answer strategies for every question type plus 600+ vocabulary"
                } else {
                    "প্রতিটি প্রশ্নের উত্তর করার স্ট্র্যাটেজি এবং ৬০০+ ভোকাবুলারি"
                }
            }
        ]),
    );

    push(
        "group_join_engagement",
        "",
        json!([{
            "id": "engagement-pdf",
            "title": if en { "IELTS Confirm 7+ Score (Guideline)" } else { "IELTS নিশ্চিত ৭+ স্কোর (গাইডলাইন)" },
            "title_color": "#ffffff",
            "description": if en {
                "Learn the best strategies to score high in IELTS."
            } else {
                "IELTS-এ ভালো স্কোর করার সেরা স্ট্র্যাটেজি জানুন।"
            },
            "description_color": "#ededed",
            "thumbnail": "https://cdn.coursefront.app/images/engagement/pdf_thumb.jpg",
            "background": { "image": "https://cdn.coursefront.app/images/engagement/card_bg.png", "primary_color": "", "secondary_color": "" },
            "cta": { "text": if en { "Download free PDF" } else { "ফ্রি PDF ডাউনলোড করুন" }, "clicked_url": "https://cdn.coursefront.app/files/ielts_guideline.pdf", "color": "" }
        }]),
    );

    push(
        "pointers",
        if en { "What you will learn by doing the course" } else { "কোর্সটি করে যা শিখবেন" },
        json!([
            { "id": "pointer-1", "color": "black", "icon": "0", "text": if en { "Detailed rules and regulations of each module of the IELTS test" } else { "IELTS পরীক্ষার প্রতিটি মডিউলের খুঁটিনাটি নিয়ম" } },
            { "id": "pointer-2", "color": "black", "icon": "0", "text": if en { "Formats and strategies to ace the IELTS test" } else { "IELTS-এ ভালো করার ফরম্যাট ও স্ট্র্যাটেজি" } },
            { "id": "pointer-3", "color": "black", "icon": "0", "text": if en { "Time management for a better band score" } else { "ভালো ব্যান্ড স্কোরের জন্য টাইম ম্যানেজমেন্ট" } }
        ]),
    );

    push(
        "about",
        if en { "Course details" } else { "কোর্স সম্পর্কে বিস্তারিত" },
        json!([{
            "id": "about-audience",
            "icon": "0",
            "title": if en { "<h2><b>This IELTS course is for</b></h2>" } else { "<h2><b>এই কোর্সটি যাদের জন্য</b></h2>" },
            "description": if en {
                "<li>Those who aim to go abroad for work or higher education</li><li>Those who want to improve all four language skills</li>"
            } else {
                "<li>যারা কাজ বা উচ্চশিক্ষার জন্য বিদেশে যেতে চান</li><li>যারা চারটি ল্যাঙ্গুয়েজ স্কিল উন্নত করতে চান</li>"
            }
        }]),
    );

    push(
        "feature_explanations",
        if en { "Course Exclusive Feature" } else { "কোর্স এক্সক্লুসিভ ফিচার" },
        json!([{
            "id": "exclusive-video",
            "title": if en { "Video lectures" } else { "ভিডিও লেকচার" },
            "checklist": [
                if en { "Academic and General Training covered" } else { "Academic ও General Training নিয়ে আলোচনা" },
                if en { "Question-type based answer strategies" } else { "প্রশ্নের ধরন-ভিত্তিক উত্তর করার স্ট্র্যাটেজি" }
            ],
            "file_type": "image",
            "file_url": "https://cdn.coursefront.app/images/features/video_lectures.png",
            "video_thumbnail": ""
        }]),
    );

    push("content_preview", if en { "Content preview" } else { "কনটেন্ট প্রিভিউ" }, json!([]));

    push(
        "testimonials",
        if en { "Students opinion" } else { "শিক্ষার্থীরা যা বলছে" },
        json!([
            {
                "id": "testimonial-1",
                "name": "Junaed Bin Samad",
                "description": "8.5",
                "testimonial": if en {
                    "The mock tests felt exactly like the real exam. The strategies alone raised my score a full band."
                } else {
                    "মক টেস্টগুলো একদম আসল পরীক্ষার মতো। স্ট্র্যাটেজিগুলোই আমার স্কোর এক ব্যান্ড বাড়িয়েছে।"
                },
                "profile_image": "https://cdn.coursefront.app/images/testimonials/junaed.jpg"
            },
            {
                "id": "testimonial-2",
                "name": "Sadia Afrin",
                "description": "7.5",
                "video_url": "30y-wlDtIIQ",
                "thumb": "https://cdn.coursefront.app/images/testimonials/sadia_thumb.jpg"
            }
        ]),
    );

    push(
        "faq",
        if en { "Frequently Asked Questions" } else { "সচরাচর জিজ্ঞাসা" },
        json!([
            {
                "id": "faq-validity",
                "question": if en { "How long is the course valid after purchase?" } else { "কোর্সটি কেনার পর কতদিন দেখা যাবে?" },
                "answer": if en { "<p>The course is valid for a lifetime.</p>" } else { "<p>কোর্সটির মেয়াদ আজীবন।</p>" }
            },
            {
                "id": "faq-book",
                "question": if en { "Is the hardcopy book included?" } else { "হার্ডকপি বইটি কি কোর্সের সাথে পাওয়া যাবে?" },
                "answer": if en { "<p>Yes, the book ships for free with the course.</p>" } else { "<p>হ্যাঁ, বইটি কোর্সের সাথে ফ্রি পৌঁছে যাবে।</p>" }
            }
        ]),
    );

    push("free_items", if en { "Free items with this course" } else { "এই কোর্সের সাথে ফ্রি" }, json!([]));
    push("certificate", if en { "Course certificate" } else { "কোর্স সার্টিফিকেট" }, json!([]));
    push("requirements", if en { "Course requirements" } else { "যা যা প্রয়োজন" }, json!([]));
    push("how_to_pay", if en { "Payment process" } else { "যেভাবে পেমেন্ট করবেন" }, json!([]));

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionKind, SectionSet};

    #[test]
    fn fixture_is_deterministic() {
        assert_eq!(fallback_product(Language::En), fallback_product(Language::En));
        assert_ne!(
            fallback_product(Language::En).title,
            fallback_product(Language::Bn).title
        );
    }

    #[test]
    fn fixture_round_trips_through_normalization() {
        for language in [Language::En, Language::Bn] {
            let product = fallback_product(language);
            assert!(!product.is_blank());
            assert!(!product.seo.title.is_empty());

            let set = SectionSet::normalize(&product.sections);
            // Every fixture tag is in the known set, so nothing may be lost.
            assert_eq!(set.len(), product.sections.len());
            assert!(set.get(SectionKind::Faq).is_some());
            assert!(set.get(SectionKind::Instructors).is_some());
        }
    }

    #[test]
    fn fixture_seo_meta_is_fully_populated() {
        for language in [Language::En, Language::Bn] {
            let seo = fallback_product(language).seo;
            assert_eq!(seo.default_meta.len(), 5);
            for entry in &seo.default_meta {
                assert!(matches!(entry.kind.as_str(), "name" | "property"));
                assert!(!entry.value.is_empty());
                assert!(!entry.content.is_empty());
            }
            let locale = seo
                .default_meta
                .iter()
                .find(|m| m.value == "og:locale")
                .expect("og:locale present");
            assert_eq!(locale.content, language.locale_tag());
        }
    }

    #[test]
    fn fixture_json_ld_is_well_formed() {
        let product = fallback_product(Language::En);
        for schema in &product.seo.schema {
            serde_json::from_str::<serde_json::Value>(&schema.meta_value)
                .expect("fixture JSON-LD must parse");
        }
    }

    #[test]
    fn fixture_survives_a_wire_round_trip() {
        let product = fallback_product(Language::Bn);
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(product, back);
    }
}
