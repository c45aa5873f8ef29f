//! A small in-process history index.
//!
//! Matches typed terms against the start of words in each entry's url and
//! title, and reports hits the way a full-text `offsets()` function does:
//! `column term byte_offset token_length`, space separated.

use crate::HistorySource;
use omnibox::{HistoryHit, search_terms};

const MAX_RESULTS: usize = 20;

#[derive(Clone, Debug)]
struct Entry {
    url: String,
    title: String,
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryHistory {
    entries: Vec<Entry>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit. Revisiting a url moves it to the front and updates its title.
    pub fn visit(&mut self, url: impl Into<String>, title: impl Into<String>) {
        let url = url.into();
        self.entries.retain(|e| e.url != url);
        self.entries.insert(
            0,
            Entry {
                url,
                title: title.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistorySource for InMemoryHistory {
    fn search(&mut self, query: &str) -> Result<Vec<HistoryHit>, String> {
        let terms: Vec<String> = search_terms(query)
            .iter()
            .map(|t| t.to_ascii_lowercase())
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let hits = self
            .entries
            .iter()
            .filter_map(|entry| match_entry(entry, &terms))
            .take(MAX_RESULTS)
            .collect();
        Ok(hits)
    }
}

fn match_entry(entry: &Entry, terms: &[String]) -> Option<HistoryHit> {
    let mut offsets: Vec<(usize, usize, usize, usize)> = Vec::new();
    for (term_index, term) in terms.iter().enumerate() {
        let before = offsets.len();
        for (column, text) in [entry.url.as_str(), entry.title.as_str()].iter().enumerate() {
            for (offset, token_len) in word_prefix_matches(text, term) {
                offsets.push((column, term_index, offset, token_len));
            }
        }
        // every term has to hit somewhere
        if offsets.len() == before {
            return None;
        }
    }
    offsets.sort_by_key(|&(column, _, offset, _)| (column, offset));

    let encoded = offsets
        .iter()
        .map(|(c, t, o, l)| format!("{c} {t} {o} {l}"))
        .collect::<Vec<_>>()
        .join(" ");
    Some(HistoryHit {
        url: entry.url.clone(),
        title: entry.title.clone(),
        offsets: Some(encoded),
    })
}

/// Byte offsets of words in `text` starting with `term`, paired with the
/// length of the whole word.
fn word_prefix_matches(text: &str, term: &str) -> Vec<(usize, usize)> {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut found = Vec::new();
    let mut start = 0;
    while let Some(pos) = lower[start..].find(term) {
        let offset = start + pos;
        let at_word_start = offset == 0 || !bytes[offset - 1].is_ascii_alphanumeric();
        if at_word_start {
            let word_len = bytes[offset..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || !b.is_ascii())
                .count()
                .max(term.len());
            found.push((offset, word_len));
        }
        start = offset + term.len().max(1);
    }
    found
}
