//! Content-service client for Coursefront. Wire model, fetch, section
//! normalization and the offline fallback fixture live here; nothing in this
//! crate knows about rendering.

pub mod client;
pub mod fallback;
pub mod language;
pub mod model;
pub mod section;

pub use client::{fetch_product, ClientConfig, FetchError};
pub use language::Language;
pub use model::Product;
pub use section::{Section, SectionBody, SectionKind, SectionSet};
