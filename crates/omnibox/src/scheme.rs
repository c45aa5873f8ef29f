//! Scheme prefixes and the rewrite rules shared by classification and the
//! no-dropdown fallback.

use crate::content_address::{
    has_dat_key_prefix, is_ipfs_path, is_ipns_path, is_multihash, strip_outer_slashes,
};

pub const DAT_SCHEME: &str = "dat://";
pub const HTTP_SCHEME: &str = "http://";
pub const HTTPS_SCHEME: &str = "https://";
pub const INTERNAL_PREFIX: &str = "beaker:";
pub const FILESYSTEM_PREFIX: &str = "fs:/";
pub const SCHEME_SEPARATOR: &str = "://";

/// Returns `true` if `value` already names how it should be loaded.
pub fn has_explicit_scheme(value: &str) -> bool {
    value.contains(SCHEME_SEPARATOR)
        || value.starts_with(INTERNAL_PREFIX)
        || value.starts_with(FILESYSTEM_PREFIX)
}

/// Rewrites peer-to-peer and content-addressed shapes into loadable URLs.
///
/// Returns `None` when `value` has none of those shapes.
pub fn correct_content_address(value: &str) -> Option<String> {
    if has_dat_key_prefix(value) {
        return Some(format!("{DAT_SCHEME}{value}"));
    }
    let multihash = strip_outer_slashes(value);
    if is_multihash(multihash) {
        return Some(format!("fs:/ipfs/{multihash}"));
    }
    if is_ipfs_path(value) || is_ipns_path(value) {
        return Some(format!("fs:{value}"));
    }
    None
}

/// The address to try after a guessed `https://` load failed.
///
/// Returns `None` unless `url` starts with `https://`.
pub fn http_fallback(url: &str) -> Option<String> {
    url.strip_prefix(HTTPS_SCHEME)
        .map(|rest| format!("{HTTP_SCHEME}{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_schemes() {
        assert!(has_explicit_scheme("gopher://x"));
        assert!(has_explicit_scheme("beaker:settings"));
        assert!(has_explicit_scheme("fs:/ipfs/Qm"));
        assert!(!has_explicit_scheme("fs:ipfs"));
        assert!(!has_explicit_scheme("example.com"));
    }

    #[test]
    fn content_address_corrections() {
        let key = "f".repeat(64);
        assert_eq!(
            correct_content_address(&key).as_deref(),
            Some(format!("dat://{key}").as_str())
        );

        let hash = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
        assert_eq!(
            correct_content_address(&format!("/{hash}/")).as_deref(),
            Some(format!("fs:/ipfs/{hash}").as_str())
        );
        assert_eq!(
            correct_content_address("/ipns/ipfs.io").as_deref(),
            Some("fs:/ipns/ipfs.io")
        );
        assert_eq!(correct_content_address("example.com"), None);
    }

    #[test]
    fn http_fallback_only_downgrades_https() {
        assert_eq!(
            http_fallback("https://example.com/a").as_deref(),
            Some("http://example.com/a")
        );
        assert_eq!(http_fallback("http://example.com"), None);
        assert_eq!(http_fallback("dat://abc"), None);
    }
}
