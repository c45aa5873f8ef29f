//! Autocomplete state owned by one address field.
//!
//! Invariants:
//! - `candidates` is only `Some` after results for the current value were
//!   applied; it is dropped on clear.
//! - A history response is applied only if it answers the newest request and
//!   the value it was issued for is still the current value. Anything else is
//!   stale and discarded.
//! - `cursor` always matches the length of `candidates` and is reset whenever
//!   the list is replaced.

use crate::candidate::Candidate;
use crate::classify::classify;
use crate::config::SearchProvider;
use crate::cursor::SelectionCursor;
use crate::decorate::{decorate, search_terms};
use crate::rank::merge;
use crate::scheme::correct_content_address;
use core_types::RequestId;

/// A history lookup the host should run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub request_id: RequestId,
    pub query: String,
}

/// What an edit of the address field means for autocomplete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputChange {
    /// The trimmed value changed; run this lookup.
    Search(SearchRequest),
    /// The field is empty now; the dropdown was closed.
    Cleared,
    /// Same trimmed value as before, nothing to do.
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Default)]
pub struct AutocompleteSession {
    provider: SearchProvider,
    current_value: Option<String>,
    candidates: Option<Vec<Candidate>>,
    cursor: SelectionCursor,
    query_gen: RequestId,
    pending: Option<(RequestId, String)>,
}

impl AutocompleteSession {
    pub fn new(provider: SearchProvider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    pub fn current_value(&self) -> Option<&str> {
        self.current_value.as_deref()
    }

    /// The dropdown rows, if the dropdown is open.
    pub fn candidates(&self) -> Option<&[Candidate]> {
        self.candidates.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.candidates.is_some()
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    /// The lookup still awaiting an answer, if any.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// Handles new text in the address field.
    ///
    /// The returned request carries the untrimmed text; results are matched
    /// back by request id.
    pub fn on_input(&mut self, raw: &str) -> InputChange {
        let value = raw.trim();
        if value.is_empty() {
            self.clear();
            return InputChange::Cleared;
        }
        if self.current_value.as_deref() == Some(value) {
            return InputChange::Unchanged;
        }

        self.current_value = Some(value.to_string());
        self.cursor.reset();
        self.query_gen = self.query_gen.wrapping_add(1);
        let request_id = self.query_gen;
        self.pending = Some((request_id, value.to_string()));

        log::debug!(target: "omnibox", "history search #{request_id}: {raw:?}");
        InputChange::Search(SearchRequest {
            request_id,
            query: raw.to_string(),
        })
    }

    /// Applies the history service's answer to `request_id`.
    ///
    /// A failed lookup still opens the dropdown with the "go to" and
    /// "search" rows. Returns `false` if the response was stale.
    pub fn apply_results(
        &mut self,
        request_id: RequestId,
        results: Result<Vec<Candidate>, String>,
    ) -> bool {
        let Some(value) = self.current_value.clone() else {
            log::trace!(target: "omnibox", "discarding #{request_id}: autocomplete closed");
            return false;
        };
        let is_current = matches!(
            &self.pending,
            Some((id, issued)) if *id == request_id && *issued == value
        );
        if !is_current {
            log::trace!(target: "omnibox", "discarding stale history results #{request_id}");
            return false;
        }
        self.pending = None;

        let mut external = results.unwrap_or_else(|err| {
            log::warn!(target: "omnibox", "history search for {value:?} failed: {err}");
            Vec::new()
        });
        let terms = search_terms(&value);
        for candidate in &mut external {
            decorate(&terms, candidate);
        }

        let Some(classification) = classify(&value) else {
            return false;
        };
        let list = merge(&value, &classification, external, &self.provider);
        log::debug!(target: "omnibox", "applied #{request_id}: {} rows", list.len());

        self.cursor = SelectionCursor::new(list.len());
        self.candidates = Some(list);
        true
    }

    /// Moves the highlight. Returns the newly selected url for the address
    /// field, or `None` when the dropdown is closed.
    pub fn move_selection(&mut self, direction: Direction) -> Option<String> {
        let list = self.candidates.as_ref()?;
        match direction {
            Direction::Up => self.cursor.move_up(),
            Direction::Down => self.cursor.move_down(),
        };
        list.get(self.cursor.index()).map(|c| c.url.clone())
    }

    /// Closes the dropdown and forgets the current value. Safe to call repeatedly.
    ///
    /// Returns `true` if the dropdown was open.
    pub fn clear(&mut self) -> bool {
        let was_open = self.candidates.is_some();
        self.current_value = None;
        self.candidates = None;
        self.pending = None;
        self.cursor = SelectionCursor::default();
        was_open
    }

    /// The candidate to load: row `index` (default: the highlighted row), or
    /// a candidate built from `field_text` when that row does not exist.
    pub fn resolve(&self, index: Option<usize>, field_text: &str) -> Candidate {
        let index = index.unwrap_or(self.cursor.index());
        if let Some(candidate) = self.candidates.as_ref().and_then(|list| list.get(index)) {
            return candidate.clone();
        }
        resolve_field_text(field_text)
    }
}

/// Builds a candidate straight from address field text, rewriting
/// peer-to-peer and content-addressed shapes into loadable URLs.
pub fn resolve_field_text(field_text: &str) -> Candidate {
    let text = field_text.trim();
    let url = correct_content_address(text).unwrap_or_else(|| text.to_string());
    Candidate::new(url, String::new())
}

#[cfg(test)]
mod tests;
