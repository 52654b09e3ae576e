//! Shared UI crate for Coursefront. The content/UI state store, the SEO
//! synthesizer, the section renderers and the page chrome live here.

pub mod core;
pub mod i18n;
pub mod sections;
pub mod seo;
pub mod store;
pub mod views;

pub mod components {
    // Page chrome: header with the language switcher, footer, scroll affordance.
    pub mod scroll_to_top;
    pub mod site_footer;
    pub mod site_header;

    pub use scroll_to_top::ScrollToTop;
    pub use site_footer::SiteFooter;
    pub use site_header::SiteHeader;
}
