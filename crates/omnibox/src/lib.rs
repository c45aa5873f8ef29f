//! # omnibox
//!
//! UI-agnostic engine behind the browser address field.
//!
//! - [`classify`]: is the typed text an address or a query, and what URL would it load?
//! - [`merge`]: the dropdown list, synthesized "go to"/"search" rows first.
//! - [`decorate`]: highlight segments from history match offsets.
//! - [`AutocompleteSession`]: owned per-field state (current value, rows,
//!   selection) with the stale-response guard for history lookups.
//!
//! Nothing here draws anything or talks to a history index directly; hosts
//! feed [`SearchRequest`]s to their index and hand the answers back.

mod candidate;
mod classify;
mod config;
mod content_address;
mod cursor;
mod decorate;
mod error;
mod rank;
mod scheme;
mod session;

pub use candidate::{Candidate, Column, HistoryHit, MatchOffset};
pub use classify::{Classification, classify};
pub use config::{DEFAULT_SEARCH_LABEL, DEFAULT_SEARCH_URL, OmniboxConfig, SearchProvider};
pub use content_address::{
    has_dat_key_prefix, is_ipfs_path, is_ipns_path, is_multihash, pretty_hash,
};
pub use cursor::SelectionCursor;
pub use decorate::{DecoratedText, Decoration, Segment, decorate, search_terms};
pub use error::ConfigError;
pub use rank::merge;
pub use scheme::{
    DAT_SCHEME, FILESYSTEM_PREFIX, HTTP_SCHEME, HTTPS_SCHEME, INTERNAL_PREFIX,
    correct_content_address, http_fallback,
};
pub use session::{
    AutocompleteSession, Direction, InputChange, SearchRequest, resolve_field_text,
};
