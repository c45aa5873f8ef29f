use super::*;
use crate::candidate::MatchOffset;

const CID_V0: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

fn session() -> AutocompleteSession {
    AutocompleteSession::new(SearchProvider::default())
}

fn issue(session: &mut AutocompleteSession, text: &str) -> RequestId {
    match session.on_input(text) {
        InputChange::Search(req) => req.request_id,
        other => panic!("expected a search for {text:?}, got {other:?}"),
    }
}

fn urls(session: &AutocompleteSession) -> Vec<String> {
    session
        .candidates()
        .unwrap_or_default()
        .iter()
        .map(|c| c.url.clone())
        .collect()
}

#[test]
fn new_value_issues_search_with_raw_text() {
    let mut s = session();
    let change = s.on_input("  rust  ");
    assert_eq!(
        change,
        InputChange::Search(SearchRequest {
            request_id: 1,
            query: "  rust  ".into(),
        })
    );
    assert_eq!(s.current_value(), Some("rust"));
    assert!(!s.is_open());
}

#[test]
fn same_trimmed_value_is_unchanged() {
    let mut s = session();
    issue(&mut s, "rust");
    assert_eq!(s.on_input("rust "), InputChange::Unchanged);
}

#[test]
fn applies_current_results_after_synthesized_rows() {
    let mut s = session();
    let id = issue(&mut s, "docs");
    let hit = Candidate::new("https://docs.rs", "Docs.rs")
        .with_match_offsets(vec![MatchOffset::new(1, 0, 0, 7)]);

    assert!(s.apply_results(id, Ok(vec![hit])));
    assert_eq!(
        urls(&s),
        ["https://duckduckgo.com/?q=docs", "docs", "https://docs.rs"]
    );

    let list = s.candidates().unwrap_or_default();
    let decoration = list[2].decoration();
    assert_eq!(
        decoration.map(|d| d.title.to_markup()),
        Some("<strong>Docs</strong>.rs".to_string())
    );
    assert_eq!(s.selected_index(), 0);
}

#[test]
fn stale_response_is_discarded() {
    let mut s = session();
    let first = issue(&mut s, "ru");
    let second = issue(&mut s, "rust");

    assert!(!s.apply_results(first, Ok(vec![Candidate::new("https://old.test", "old")])));
    assert!(!s.is_open());

    assert!(s.apply_results(second, Ok(Vec::new())));
    assert_eq!(urls(&s).len(), 2);
}

#[test]
fn response_after_clear_is_discarded() {
    let mut s = session();
    let id = issue(&mut s, "rust");
    assert_eq!(s.on_input("   "), InputChange::Cleared);
    assert!(!s.apply_results(id, Ok(Vec::new())));
    assert!(!s.is_open());

    // clearing twice is fine
    assert!(!s.clear());
}

#[test]
fn duplicate_delivery_is_applied_once() {
    let mut s = session();
    let id = issue(&mut s, "rust");
    assert!(s.apply_results(id, Ok(Vec::new())));
    s.move_selection(Direction::Down);
    assert!(!s.apply_results(id, Ok(Vec::new())));
    assert_eq!(s.selected_index(), 1);
}

#[test]
fn failed_search_still_offers_navigate_and_search() {
    let mut s = session();
    let id = issue(&mut s, "example.com");
    assert!(s.apply_results(id, Err("index locked".into())));
    assert_eq!(
        urls(&s),
        ["https://example.com", "https://duckduckgo.com/?q=example.com"]
    );
}

#[test]
fn selection_moves_within_bounds_and_reports_url() {
    let mut s = session();
    assert_eq!(s.move_selection(Direction::Down), None);

    let id = issue(&mut s, "example.com");
    s.apply_results(id, Ok(vec![Candidate::new("https://example.com/a", "A")]));

    assert_eq!(
        s.move_selection(Direction::Up).as_deref(),
        Some("https://example.com")
    );
    assert_eq!(s.selected_index(), 0);
    s.move_selection(Direction::Down);
    s.move_selection(Direction::Down);
    assert_eq!(
        s.move_selection(Direction::Down).as_deref(),
        Some("https://example.com/a")
    );
    assert_eq!(s.selected_index(), 2);
}

#[test]
fn new_results_reset_selection() {
    let mut s = session();
    let id = issue(&mut s, "a.test");
    s.apply_results(id, Ok(Vec::new()));
    s.move_selection(Direction::Down);
    assert_eq!(s.selected_index(), 1);

    let id = issue(&mut s, "b.test");
    assert_eq!(s.selected_index(), 0);
    s.apply_results(id, Ok(Vec::new()));
    assert_eq!(s.selected_index(), 0);
}

#[test]
fn resolve_returns_highlighted_or_indexed_row() {
    let mut s = session();
    let id = issue(&mut s, "example.com");
    s.apply_results(id, Ok(Vec::new()));

    let first = s.resolve(None, "ignored");
    assert_eq!(first.url, "https://example.com");
    assert!(first.is_guessing_scheme);

    let second = s.resolve(Some(1), "ignored");
    assert!(second.is_search());
}

#[test]
fn resolve_without_dropdown_uses_field_text() {
    let s = session();
    assert_eq!(s.resolve(None, "https://a.test/").url, "https://a.test/");

    let key = "0f".repeat(32);
    assert_eq!(s.resolve(None, &key).url, format!("dat://{key}"));
    assert_eq!(s.resolve(None, CID_V0).url, format!("fs:/ipfs/{CID_V0}"));
    assert_eq!(
        s.resolve(None, &format!("/ipfs/{CID_V0}/a")).url,
        format!("fs:/ipfs/{CID_V0}/a")
    );
    assert_eq!(s.resolve(Some(7), "/ipns/ipfs.io").url, "fs:/ipns/ipfs.io");
}
