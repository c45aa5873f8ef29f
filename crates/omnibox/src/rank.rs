use crate::candidate::Candidate;
use crate::classify::Classification;
use crate::config::SearchProvider;

/// Builds the dropdown list for `input`.
///
/// The first two rows are always "go to" and "search"; the one matching the
/// classification comes first. External results follow in the order given.
pub fn merge(
    input: &str,
    classification: &Classification,
    external: Vec<Candidate>,
    provider: &SearchProvider,
) -> Vec<Candidate> {
    let mut navigate = Candidate::new(classification.resolved_url.clone(), format!("Go to {input}"));
    navigate.is_guessing_scheme = classification.is_guessing_scheme;

    let mut search = Candidate::new(provider.query_url_for(input), provider.label.clone());
    search.search = Some(input.to_string());

    let mut list = Vec::with_capacity(external.len() + 2);
    if classification.is_likely_url {
        list.push(navigate);
        list.push(search);
    } else {
        list.push(search);
        list.push(navigate);
    }
    list.extend(external);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn classified(input: &str) -> Classification {
        match classify(input) {
            Some(c) => c,
            None => panic!("no classification for {input:?}"),
        }
    }

    #[test]
    fn url_like_input_puts_navigate_first() {
        let list = merge(
            "example.com",
            &classified("example.com"),
            Vec::new(),
            &SearchProvider::default(),
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].url, "https://example.com");
        assert_eq!(list[0].title, "Go to example.com");
        assert!(list[0].is_guessing_scheme);
        assert!(!list[0].is_search());
        assert!(list[1].is_search());
    }

    #[test]
    fn query_input_puts_search_first() {
        let list = merge(
            "hello world",
            &classified("hello world"),
            Vec::new(),
            &SearchProvider::default(),
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].url, "https://duckduckgo.com/?q=hello+world");
        assert_eq!(list[0].title, "DuckDuckGo Search");
        assert_eq!(list[0].search.as_deref(), Some("hello world"));
        assert_eq!(list[1].title, "Go to hello world");
    }

    #[test]
    fn external_results_follow_in_order() {
        let external = vec![
            Candidate::new("https://b.test", "B"),
            Candidate::new("https://a.test", "A"),
        ];
        let list = merge("x", &classified("x"), external, &SearchProvider::default());
        let urls: Vec<_> = list.iter().skip(2).map(|c| c.url.as_str()).collect();
        assert_eq!(urls, ["https://b.test", "https://a.test"]);
    }
}
