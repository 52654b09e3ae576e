//! One renderer per section kind plus the hero.
//!
//! `render_section` is the registry's rendering half: an exhaustive match
//! over [`SectionBody`], so adding a kind without a renderer is a compile
//! error. Every renderer owns its own empty-payload presentation and treats
//! every payload field as optional.

mod about;
mod catalog;
mod content_preview;
mod engagement;
mod faq;
mod feature_explanations;
mod features;
mod hero;
mod instructors;
mod offers;
mod pointers;
mod testimonials;

pub use hero::HeroSection;

use api::{Language, Section, SectionBody};
use dioxus::prelude::*;

use about::AboutSection;
use catalog::{CatalogSection, CatalogVariant};
use content_preview::ContentPreviewSection;
use engagement::EngagementSection;
use faq::FaqSection;
use feature_explanations::FeatureExplanationsSection;
use features::FeaturesSection;
use instructors::InstructorsSection;
use offers::OffersSection;
use pointers::PointersSection;
use testimonials::TestimonialsSection;

pub fn render_section(section: &Section, language: Language) -> Element {
    let name = section.name.clone();
    let description = section.description.clone();
    match &section.body {
        SectionBody::BundleItems(items) => rsx! {
            CatalogSection {
                variant: CatalogVariant::Bundle,
                name, description,
                items: items.clone(),
            }
        },
        SectionBody::Offers(items) => rsx! {
            OffersSection { name, description, items: items.clone() }
        },
        SectionBody::Instructors(items) => rsx! {
            InstructorsSection { name, description, items: items.clone() }
        },
        SectionBody::Features(items) => rsx! {
            FeaturesSection { name, description, items: items.clone() }
        },
        SectionBody::GroupJoinEngagement(items) => rsx! {
            EngagementSection { name, description, items: items.clone() }
        },
        SectionBody::Pointers(items) => rsx! {
            PointersSection { name, description, items: items.clone() }
        },
        SectionBody::ContentPreview(items) => rsx! {
            ContentPreviewSection { name, description, items: items.clone() }
        },
        SectionBody::About(items) => rsx! {
            AboutSection { name, description, items: items.clone() }
        },
        SectionBody::FeatureExplanations(items) => rsx! {
            FeatureExplanationsSection { name, description, items: items.clone() }
        },
        SectionBody::FreeItems(items) => rsx! {
            CatalogSection {
                variant: CatalogVariant::FreeItems,
                name, description,
                items: items.clone(),
            }
        },
        SectionBody::Certificate(items) => rsx! {
            CatalogSection {
                variant: CatalogVariant::Certificate,
                name, description,
                items: items.clone(),
            }
        },
        SectionBody::Testimonials(items) => rsx! {
            TestimonialsSection { name, description, items: items.clone() }
        },
        SectionBody::Requirements(items) => rsx! {
            CatalogSection {
                variant: CatalogVariant::Requirements,
                name, description,
                items: items.clone(),
            }
        },
        SectionBody::HowToPay(items) => rsx! {
            CatalogSection {
                variant: CatalogVariant::HowToPay,
                name, description,
                items: items.clone(),
            }
        },
        SectionBody::Faq(items) => rsx! {
            FaqSection { name, description, items: items.clone(), language }
        },
    }
}
