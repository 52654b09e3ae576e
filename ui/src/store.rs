//! Content and UI state. Pure state machines with an explicit action set;
//! the Dioxus wiring (signals, coroutine) lives in `views::product`.
//!
//! The one real race in the system is handled here: every fetch is issued
//! against a [`FetchTicket`], selecting a language (or retrying) invalidates
//! all earlier tickets, and [`ContentStore::resolve`] discards completions
//! whose ticket is no longer live. A slow response for an old selection can
//! therefore never overwrite the result of a newer one.

use api::{Language, Product, SectionSet};

/// Everything one render pass needs: the product as fetched plus its
/// normalized section list. Built once per successful fetch, replaced
/// wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub product: Product,
    pub sections: SectionSet,
}

impl PageContent {
    pub fn new(product: Product) -> Self {
        let sections = SectionSet::normalize(&product.sections);
        Self { product, sections }
    }
}

/// Content lifecycle. `Empty` is the distinct "fetch succeeded but there is
/// nothing to show" outcome, separate from `Failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentState {
    #[default]
    Idle,
    Loading,
    Ready(PageContent),
    Empty,
    Failed(String),
}

/// Handle for one in-flight fetch. Carries the language it was issued for so
/// the fetch task knows what to request, and a sequence number so the store
/// can tell live completions from stale ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub language: Language,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    pub language: Language,
    pub state: ContentState,
    next_seq: u64,
    live_seq: Option<u64>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a language: clears any previous error, enters `Loading` and
    /// hands back the ticket the caller must fetch under. Any ticket issued
    /// earlier is dead from this point on.
    pub fn select_language(&mut self, language: Language) -> FetchTicket {
        self.language = language;
        self.issue()
    }

    /// Re-issue the fetch for the current language (user-initiated retry or
    /// refresh). Same invalidation rules as a language change.
    pub fn retry(&mut self) -> FetchTicket {
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.next_seq += 1;
        self.live_seq = Some(self.next_seq);
        self.state = ContentState::Loading;
        FetchTicket {
            seq: self.next_seq,
            language: self.language,
        }
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when the
    /// ticket has been superseded by a newer selection.
    pub fn resolve(&mut self, seq: u64, outcome: Result<Option<Product>, String>) -> bool {
        if self.live_seq != Some(seq) {
            return false;
        }
        self.live_seq = None;
        self.state = match outcome {
            Ok(Some(product)) if !product.is_blank() => {
                ContentState::Ready(PageContent::new(product))
            }
            Ok(_) => ContentState::Empty,
            Err(message) => ContentState::Failed(message),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ContentState::Loading)
    }
}

/// Transient page chrome flags, mutated only through this action set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub scroll_to_top_visible: bool,
    pub menu_open: bool,
    pub active_section: Option<String>,
}

impl UiState {
    pub fn set_scroll_visible(&mut self, visible: bool) {
        self.scroll_to_top_visible = visible;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn set_active_section(&mut self, section: Option<String>) {
        self.active_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::fallback::fallback_product;

    fn product(language: Language) -> Product {
        fallback_product(language)
    }

    #[test]
    fn selecting_a_language_enters_loading_and_clears_errors() {
        let mut store = ContentStore::new();
        let ticket = store.select_language(Language::En);
        assert!(store.is_loading());
        assert!(store.resolve(ticket.seq, Err("offline".into())));
        assert!(matches!(store.state, ContentState::Failed(_)));

        let ticket = store.select_language(Language::Bn);
        assert!(store.is_loading());
        assert_eq!(ticket.language, Language::Bn);
    }

    #[test]
    fn latest_selection_wins_when_the_old_fetch_finishes_last() {
        let mut store = ContentStore::new();
        let ticket_a = store.select_language(Language::En);
        let ticket_b = store.select_language(Language::Bn);

        // B's response arrives first, then A's limps in.
        assert!(store.resolve(ticket_b.seq, Ok(Some(product(Language::Bn)))));
        assert!(!store.resolve(ticket_a.seq, Ok(Some(product(Language::En)))));

        match &store.state {
            ContentState::Ready(content) => {
                assert_eq!(content.product.title, product(Language::Bn).title)
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn latest_selection_wins_when_the_old_fetch_finishes_first() {
        let mut store = ContentStore::new();
        let ticket_a = store.select_language(Language::En);
        let ticket_b = store.select_language(Language::Bn);

        // A's response arrives while B is still in flight: it must be
        // discarded and the store must stay in Loading for B.
        assert!(!store.resolve(ticket_a.seq, Ok(Some(product(Language::En)))));
        assert!(store.is_loading());

        assert!(store.resolve(ticket_b.seq, Ok(Some(product(Language::Bn)))));
        match &store.state {
            ContentState::Ready(content) => {
                assert_eq!(content.product.title, product(Language::Bn).title)
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn rapid_same_language_reissue_invalidates_the_first_ticket() {
        let mut store = ContentStore::new();
        let first = store.select_language(Language::En);
        let second = store.retry();
        assert_ne!(first.seq, second.seq);
        assert!(!store.resolve(first.seq, Err("stale".into())));
        assert!(store.is_loading());
        assert!(store.resolve(second.seq, Ok(Some(product(Language::En)))));
    }

    #[test]
    fn null_or_blank_payloads_land_in_empty_not_failed() {
        let mut store = ContentStore::new();
        let ticket = store.select_language(Language::En);
        assert!(store.resolve(ticket.seq, Ok(None)));
        assert_eq!(store.state, ContentState::Empty);

        let ticket = store.retry();
        assert!(store.resolve(ticket.seq, Ok(Some(Product::default()))));
        assert_eq!(store.state, ContentState::Empty);
    }

    #[test]
    fn ready_content_carries_normalized_sections() {
        let mut store = ContentStore::new();
        let ticket = store.select_language(Language::En);
        store.resolve(ticket.seq, Ok(Some(product(Language::En))));
        match &store.state {
            ContentState::Ready(content) => assert!(!content.sections.is_empty()),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn ui_flags_follow_their_action_set() {
        let mut ui = UiState::default();
        assert!(!ui.scroll_to_top_visible);
        ui.set_scroll_visible(true);
        assert!(ui.scroll_to_top_visible);

        ui.toggle_menu();
        assert!(ui.menu_open);
        ui.toggle_menu();
        assert!(!ui.menu_open);
        ui.set_menu_open(true);
        assert!(ui.menu_open);

        ui.set_active_section(Some("faq".into()));
        assert_eq!(ui.active_section.as_deref(), Some("faq"));
    }
}
