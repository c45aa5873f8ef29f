//! Autocomplete suggestions and the raw match data attached to them.

use crate::decorate::Decoration;
use serde::Deserialize;

/// Which text of a candidate a match offset refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Url,
    Title,
}

impl Column {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Column::Url),
            1 => Some(Column::Title),
            _ => None,
        }
    }
}

/// One hit reported by the history index: `(column, term, offset, length)`.
///
/// `offset` is a byte offset into the column text. `len` is the length of the
/// whole matching token as the index sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOffset {
    pub column: usize,
    pub term: usize,
    pub offset: usize,
    pub len: usize,
}

impl MatchOffset {
    pub fn new(column: usize, term: usize, offset: usize, len: usize) -> Self {
        Self {
            column,
            term,
            offset,
            len,
        }
    }

    /// Parses the space separated integer list produced by a full-text
    /// `offsets()` function, four integers per hit.
    ///
    /// Tokens that are not integers are ignored; a trailing partial group is dropped.
    pub fn parse_list(raw: &str) -> Vec<MatchOffset> {
        let numbers: Vec<usize> = raw
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        numbers
            .chunks_exact(4)
            .map(|t| MatchOffset::new(t[0], t[1], t[2], t[3]))
            .collect()
    }
}

/// A history entry as the search service returns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryHit {
    pub url: String,
    pub title: String,
    pub offsets: Option<String>,
}

/// One row of the autocomplete dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub title: String,
    /// The typed query, for "search the web" rows.
    pub search: Option<String>,
    pub is_guessing_scheme: bool,
    match_offsets: Vec<MatchOffset>,
    decoration: Option<Decoration>,
}

impl Candidate {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_match_offsets(mut self, offsets: Vec<MatchOffset>) -> Self {
        self.set_match_offsets(offsets);
        self
    }

    pub fn is_search(&self) -> bool {
        self.search.is_some()
    }

    pub fn match_offsets(&self) -> &[MatchOffset] {
        &self.match_offsets
    }

    /// Replaces the match data. Any decoration computed from the old offsets is dropped.
    pub fn set_match_offsets(&mut self, offsets: Vec<MatchOffset>) {
        self.match_offsets = offsets;
        self.decoration = None;
    }

    /// Highlighted url/title, if [`decorate`](crate::decorate) found matches.
    pub fn decoration(&self) -> Option<&Decoration> {
        self.decoration.as_ref()
    }

    pub(crate) fn set_decoration(&mut self, decoration: Option<Decoration>) {
        self.decoration = decoration;
    }
}

impl From<HistoryHit> for Candidate {
    fn from(hit: HistoryHit) -> Self {
        let offsets = hit
            .offsets
            .as_deref()
            .map(MatchOffset::parse_list)
            .unwrap_or_default();
        Candidate::new(hit.url, hit.title).with_match_offsets(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offset_groups_of_four() {
        let parsed = MatchOffset::parse_list("0 0 3 7 1 1 0 4");
        assert_eq!(
            parsed,
            vec![MatchOffset::new(0, 0, 3, 7), MatchOffset::new(1, 1, 0, 4)]
        );
    }

    #[test]
    fn drops_trailing_partial_group() {
        assert_eq!(MatchOffset::parse_list("1 0 2 3 4").len(), 1);
        assert!(MatchOffset::parse_list("").is_empty());
    }

    #[test]
    fn history_hit_converts_with_offsets() {
        let hit = HistoryHit {
            url: "https://rust-lang.org".into(),
            title: "Rust".into(),
            offsets: Some("1 0 0 4".into()),
        };
        let candidate = Candidate::from(hit);
        assert_eq!(candidate.match_offsets(), &[MatchOffset::new(1, 0, 0, 4)]);
        assert!(!candidate.is_search());
        assert!(candidate.decoration().is_none());
    }

    #[test]
    fn column_indices() {
        assert_eq!(Column::from_index(0), Some(Column::Url));
        assert_eq!(Column::from_index(1), Some(Column::Title));
        assert_eq!(Column::from_index(2), None);
    }
}
