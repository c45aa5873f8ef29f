//! Decides whether typed text is an address or a search query, and guesses a
//! loadable URL for it.

use crate::content_address::{
    has_dat_key_prefix, is_ipfs_path, is_ipns_path, is_multihash, strip_outer_slashes,
};
use crate::scheme::{
    DAT_SCHEME, FILESYSTEM_PREFIX, HTTP_SCHEME, HTTPS_SCHEME, INTERNAL_PREFIX, SCHEME_SEPARATOR,
    has_explicit_scheme,
};

const LOCALHOST: &str = "localhost";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub is_likely_url: bool,
    /// Best-guess absolute address. Equal to the trimmed input when nothing
    /// was synthesized.
    pub resolved_url: String,
    /// Set when `https://` was prepended without evidence. The navigation
    /// host must retry with `http://` if that load fails.
    pub is_guessing_scheme: bool,
}

/// Classifies `input`. Returns `None` for empty or whitespace-only text.
pub fn classify(input: &str) -> Option<Classification> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    let multihash = strip_outer_slashes(value);
    let is_likely_url = !value.chars().any(char::is_whitespace)
        && (has_domain_dot(value)
            || has_dat_key_prefix(value)
            || is_multihash(multihash)
            || is_ipfs_path(value)
            || is_ipns_path(value)
            || value.starts_with(LOCALHOST)
            || value.contains(SCHEME_SEPARATOR)
            || value.starts_with(INTERNAL_PREFIX)
            || value.starts_with(FILESYSTEM_PREFIX));

    let mut classification = Classification {
        is_likely_url,
        resolved_url: value.to_string(),
        is_guessing_scheme: false,
    };
    if !is_likely_url || has_explicit_scheme(value) {
        return Some(classification);
    }

    classification.resolved_url = if has_dat_key_prefix(value) {
        format!("{DAT_SCHEME}{value}")
    } else if value.starts_with(LOCALHOST) {
        format!("{HTTP_SCHEME}{value}")
    } else if is_multihash(multihash) {
        format!("fs:/ipfs/{multihash}")
    } else if is_ipfs_path(value) || is_ipns_path(value) {
        format!("fs:{value}")
    } else {
        classification.is_guessing_scheme = true;
        format!("{HTTPS_SCHEME}{value}")
    };
    Some(classification)
}

/// A letter directly after a `.`, as in `example.com`.
fn has_domain_dot(value: &str) -> bool {
    value
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'.' && pair[1].is_ascii_alphabetic())
}
