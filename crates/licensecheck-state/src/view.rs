//! # View State Machine
//!
//! Single-owner state for one rendering of the interface. Not shared,
//! not persisted; the HTTP layer rebuilds one per request.

use licensecheck_core::{LicenseId, LicenseRecord, Locale, Texts};
use licensecheck_registry::{LicenseRegistry, SearchQuery};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from view-state transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The requested record is not among the displayed results.
    #[error("record {0} is not in the current results")]
    NotInResults(LicenseId),
}

/// Ticket for a submitted search, redeemed by [`ViewState::complete_search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSearch {
    query: SearchQuery,
}

impl PendingSearch {
    /// The query this search was submitted with.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Evaluate the search against a registry.
    pub fn run(&self, registry: &LicenseRegistry) -> Vec<LicenseRecord> {
        licensecheck_registry::filter(registry.records(), &self.query)
    }
}

/// Everything the interface renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    language: Locale,
    query: String,
    results: Vec<LicenseRecord>,
    searching: bool,
    last_search: Option<String>,
    selected: Option<LicenseRecord>,
}

impl ViewState {
    /// Fresh state in the given language.
    pub fn new(language: Locale) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    // ── Language ────────────────────────────────────────────────────

    /// Active language.
    pub fn language(&self) -> Locale {
        self.language
    }

    /// Active dictionary.
    pub fn texts(&self) -> &'static Texts {
        self.language.texts()
    }

    /// Switch to the other language.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    // ── Query & search ──────────────────────────────────────────────

    /// Current query text, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text (a keystroke). Does not search.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Start a search for the current query.
    ///
    /// Returns `None` and changes nothing when the query is blank.
    pub fn submit_search(&mut self) -> Option<PendingSearch> {
        let query = SearchQuery::parse(&self.query)?;
        self.searching = true;
        Some(PendingSearch { query })
    }

    /// Finish a search, replacing the result set.
    pub fn complete_search(&mut self, pending: PendingSearch, results: Vec<LicenseRecord>) {
        tracing::debug!(query = %pending.query, hits = results.len(), "search completed");
        self.results = results;
        self.searching = false;
        self.last_search = Some(pending.query.as_str().to_string());
    }

    /// Submit and complete a search in one step. Returns whether a search ran.
    pub fn search(&mut self, registry: &LicenseRegistry) -> bool {
        match self.submit_search() {
            Some(pending) => {
                let results = pending.run(registry);
                self.complete_search(pending, results);
                true
            }
            None => false,
        }
    }

    /// Whether a search is in flight.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Results of the last completed search.
    pub fn results(&self) -> &[LicenseRecord] {
        &self.results
    }

    /// The trimmed query of the last completed search, if any.
    pub fn last_search(&self) -> Option<&str> {
        self.last_search.as_deref()
    }

    /// Whether the last completed search was for the text now in the
    /// query box (compared trimmed).
    pub fn searched_current_query(&self) -> bool {
        self.last_search.as_deref() == Some(self.query.trim())
    }

    /// Label for the search button: `...` while searching.
    pub fn search_button_label(&self) -> &'static str {
        if self.searching {
            "..."
        } else {
            self.texts().search_button
        }
    }

    /// Whether the results grid is shown.
    pub fn shows_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Whether the no-results message is shown: the query box still holds
    /// the text of a completed search that found nothing, and no search is
    /// in flight.
    pub fn shows_no_results(&self) -> bool {
        self.searched_current_query() && self.results.is_empty() && !self.searching
    }

    // ── Detail overlay ──────────────────────────────────────────────

    /// Open the detail overlay for a record in the current results.
    pub fn select(&mut self, id: &LicenseId) -> Result<&LicenseRecord, ViewError> {
        let record = self
            .results
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| ViewError::NotInResults(id.clone()))?;
        let selected: &LicenseRecord = self.selected.insert(record);
        Ok(selected)
    }

    /// Close the detail overlay.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// Record open in the detail overlay.
    pub fn selected(&self) -> Option<&LicenseRecord> {
        self.selected.as_ref()
    }
}
