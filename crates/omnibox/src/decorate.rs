//! Match highlighting for autocomplete rows.
//!
//! The history index reports where each search term hit a candidate's url
//! or title. [`decorate`] turns those hits into alternating plain/emphasized
//! segments. Rendering is left to the caller; [`DecoratedText::to_markup`]
//! exists for hosts that draw HTML.

use crate::candidate::{Candidate, Column};

/// A run of text that is either plain or part of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

/// Text split into plain and emphasized segments, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecoratedText {
    segments: Vec<Segment>,
}

impl DecoratedText {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn has_emphasis(&self) -> bool {
        self.segments.iter().any(|s| s.emphasized)
    }

    /// Renders as HTML: every segment has `<` and `>` escaped and emphasized
    /// segments are wrapped in `<strong>`.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let escaped = escape_angle_brackets(&segment.text);
            if segment.emphasized {
                out.push_str("<strong>");
                out.push_str(&escaped);
                out.push_str("</strong>");
            } else {
                out.push_str(&escaped);
            }
        }
        out
    }

    fn push(&mut self, text: &str, emphasized: bool) {
        if !text.is_empty() {
            self.segments.push(Segment {
                text: text.to_string(),
                emphasized,
            });
        }
    }
}

/// Highlighted url and title of one candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoration {
    pub url: DecoratedText,
    pub title: DecoratedText,
}

/// Splits typed text into the terms the history index matched against.
///
/// Must mirror the index tokenizer, otherwise term indices in match offsets
/// point at the wrong words. `:`, `^` and `*` through `.` become separators.
pub fn search_terms(value: &str) -> Vec<String> {
    value
        .chars()
        .map(|c| match c {
            ':' | '^' | '*'..='.' => ' ',
            other => other,
        })
        .collect::<String>()
        .split(' ')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Recomputes `candidate`'s decoration from its match offsets and `search_terms`.
///
/// Candidates without offsets end up undecorated.
pub fn decorate(search_terms: &[String], candidate: &mut Candidate) {
    let decoration = compute_decoration(search_terms, candidate);
    candidate.set_decoration(decoration);
}

fn compute_decoration(search_terms: &[String], candidate: &Candidate) -> Option<Decoration> {
    let offsets = candidate.match_offsets();
    if offsets.is_empty() {
        return None;
    }

    let mut url = ColumnCursor::new(&candidate.url);
    let mut title = ColumnCursor::new(&candidate.title);
    let mut previous: Option<(usize, usize)> = None;

    for hit in offsets {
        // several terms can hit the same spot; only the first one counts
        if previous == Some((hit.column, hit.offset)) {
            continue;
        }
        previous = Some((hit.column, hit.offset));

        // the index reports the whole token length, the typed term is what we highlight
        let Some(term) = search_terms.get(hit.term).filter(|t| !t.is_empty()) else {
            continue;
        };
        let column = match Column::from_index(hit.column) {
            Some(Column::Url) => &mut url,
            Some(Column::Title) => &mut title,
            None => continue,
        };
        column.emphasize(hit.offset, term.len());
    }

    Some(Decoration {
        url: url.finish(),
        title: title.finish(),
    })
}

struct ColumnCursor<'a> {
    text: &'a str,
    cursor: usize,
    decorated: DecoratedText,
}

impl<'a> ColumnCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            cursor: 0,
            decorated: DecoratedText::default(),
        }
    }

    fn emphasize(&mut self, offset: usize, len: usize) {
        let start = clamp_to_char_boundary(self.text, offset.max(self.cursor));
        let end = clamp_to_char_boundary(self.text, offset.saturating_add(len)).max(start);
        self.decorated.push(&self.text[self.cursor..start], false);
        self.decorated.push(&self.text[start..end], true);
        self.cursor = end;
    }

    fn finish(mut self) -> DecoratedText {
        self.decorated.push(&self.text[self.cursor..], false);
        self.decorated
    }
}

fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::MatchOffset;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn decorated(candidate: &Candidate) -> &Decoration {
        match candidate.decoration() {
            Some(d) => d,
            None => panic!("candidate was not decorated"),
        }
    }

    #[test]
    fn highlights_term_length_not_reported_length() {
        let mut candidate = Candidate::new("https://example.com", "concatenate")
            .with_match_offsets(vec![MatchOffset::new(1, 0, 3, 7)]);
        decorate(&terms(&["cat"]), &mut candidate);

        let d = decorated(&candidate);
        assert_eq!(d.title.to_markup(), "con<strong>cat</strong>enate");
        assert_eq!(d.url.to_markup(), "https://example.com");
    }

    #[test]
    fn duplicate_hits_produce_one_span() {
        let mut candidate = Candidate::new("u", "concatenate").with_match_offsets(vec![
            MatchOffset::new(1, 0, 3, 3),
            MatchOffset::new(1, 1, 3, 3),
        ]);
        decorate(&terms(&["cat", "catenate"]), &mut candidate);

        let title = &decorated(&candidate).title;
        assert_eq!(title.to_markup(), "con<strong>cat</strong>enate");
        assert_eq!(title.segments().iter().filter(|s| s.emphasized).count(), 1);
    }

    #[test]
    fn missing_term_is_skipped() {
        let mut candidate = Candidate::new("u", "rustacean").with_match_offsets(vec![
            MatchOffset::new(1, 5, 0, 4),
            MatchOffset::new(1, 0, 4, 4),
        ]);
        decorate(&terms(&["acean"]), &mut candidate);
        assert_eq!(
            decorated(&candidate).title.to_markup(),
            "rust<strong>acean</strong>"
        );
    }

    #[test]
    fn escapes_angle_brackets_everywhere() {
        let mut candidate = Candidate::new("https://x.test/?q=<b>", "<script>alert(1)</script>")
            .with_match_offsets(vec![MatchOffset::new(1, 0, 1, 6)]);
        decorate(&terms(&["script"]), &mut candidate);

        let d = decorated(&candidate);
        let title = d.title.to_markup();
        assert_eq!(
            title,
            "&lt;<strong>script</strong>&gt;alert(1)&lt;/script&gt;"
        );
        let stripped = title.replace("<strong>", "").replace("</strong>", "");
        assert!(!stripped.contains('<') && !stripped.contains('>'));
        assert_eq!(d.url.to_markup(), "https://x.test/?q=&lt;b&gt;");
    }

    #[test]
    fn highlights_both_columns_independently() {
        let mut candidate = Candidate::new("https://docs.rs/serde", "serde docs")
            .with_match_offsets(vec![
                MatchOffset::new(0, 0, 8, 4),
                MatchOffset::new(0, 1, 16, 5),
                MatchOffset::new(1, 1, 0, 5),
                MatchOffset::new(1, 0, 6, 4),
            ]);
        decorate(&terms(&["docs", "serde"]), &mut candidate);

        let d = decorated(&candidate);
        assert_eq!(
            d.url.to_markup(),
            "https://<strong>docs</strong>.rs/<strong>serde</strong>"
        );
        assert_eq!(
            d.title.to_markup(),
            "<strong>serde</strong> <strong>docs</strong>"
        );
    }

    #[test]
    fn no_offsets_leaves_candidate_undecorated() {
        let mut candidate = Candidate::new("https://a.test", "A");
        decorate(&terms(&["a"]), &mut candidate);
        assert!(candidate.decoration().is_none());
    }

    #[test]
    fn replacing_offsets_discards_stale_decoration() {
        let mut candidate =
            Candidate::new("u", "title").with_match_offsets(vec![MatchOffset::new(1, 0, 0, 5)]);
        decorate(&terms(&["tit"]), &mut candidate);
        assert!(candidate.decoration().is_some());

        candidate.set_match_offsets(Vec::new());
        assert!(candidate.decoration().is_none());
    }

    #[test]
    fn out_of_range_offsets_are_clamped() {
        let mut candidate =
            Candidate::new("u", "héllo").with_match_offsets(vec![MatchOffset::new(1, 0, 2, 1)]);
        decorate(&terms(&["llo"]), &mut candidate);
        // offset 2 falls inside `é`; the span starts at its boundary instead
        assert_eq!(decorated(&candidate).title.plain_text(), "héllo");

        let mut far =
            Candidate::new("u", "abc").with_match_offsets(vec![MatchOffset::new(1, 0, 10, 1)]);
        decorate(&terms(&["z"]), &mut far);
        assert_eq!(decorated(&far).title.to_markup(), "abc");
    }

    #[test]
    fn tokenizes_like_the_index() {
        assert_eq!(search_terms("docs.rs serde"), terms(&["docs", "rs", "serde"]));
        assert_eq!(
            search_terms("https://a-b.c"),
            terms(&["https", "//a", "b", "c"])
        );
        assert_eq!(search_terms("a^b*c+d,e"), terms(&["a", "b", "c", "d", "e"]));
        assert_eq!(search_terms("  spaced   out "), terms(&["spaced", "out"]));
        assert!(search_terms(":::").is_empty());
    }
}
