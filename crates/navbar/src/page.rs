//! The page a navbar belongs to, as seen from the navbar.
//!
//! Loading, history, bookmarks and find-in-page live in the host; the navbar
//! only calls through [`PageHandle`].

use crate::zoom::ZoomLevel;
use core_types::PageId;
use omnibox::http_fallback;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// `https://` was guessed; retry over `http://` if the load fails.
    pub is_guessing_scheme: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FindOptions {
    /// Advance to the next match instead of restarting the search.
    pub find_next: bool,
    pub forward: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            find_next: false,
            forward: true,
        }
    }
}

/// Which view of a peer-to-peer site to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatView {
    Fork,
    Files,
}

/// What the host knows about a peer-to-peer site being viewed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteInfo {
    pub key: String,
    pub is_saved: bool,
}

/// Protocol details of a regular site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtocolInfo {
    pub hostname: String,
}

pub trait PageHandle {
    fn id(&self) -> PageId;
    fn is_loading(&self) -> bool;
    /// The committed url.
    fn url(&self) -> &str;
    /// The url being loaded, or the committed one when idle.
    fn intended_url(&self) -> &str;

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn stop(&mut self);
    fn load_url(&mut self, url: &str, options: LoadOptions);

    fn is_bookmarked(&self) -> bool;
    fn toggle_bookmark(&mut self);

    fn zoom(&self) -> ZoomLevel;
    fn set_zoom(&mut self, level: ZoomLevel);

    fn find_in_page(&mut self, text: &str, options: FindOptions);
    fn stop_find_in_page(&mut self);

    fn site_info(&self) -> Option<&SiteInfo> {
        None
    }
    fn set_site_saved(&mut self, _saved: bool) {}
    fn protocol_info(&self) -> Option<&ProtocolInfo> {
        None
    }
    fn site_has_dat_alternative(&self) -> bool {
        false
    }
    fn is_live_reloading(&self) -> bool {
        false
    }
    fn toggle_live_reloading(&mut self) {}
    fn view_files_url(&self, _view: DatView) -> Option<String> {
        None
    }
}

/// Bookkeeping for one load, for hosts implementing the scheme-guess retry.
///
/// ```
/// use navbar::{LoadOptions, PendingLoad};
///
/// let mut load = PendingLoad::new("https://intranet", LoadOptions { is_guessing_scheme: true });
/// assert_eq!(load.retry_after_failure().as_deref(), Some("http://intranet"));
/// assert_eq!(load.retry_after_failure(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLoad {
    url: String,
    is_guessing_scheme: bool,
}

impl PendingLoad {
    pub fn new(url: impl Into<String>, options: LoadOptions) -> Self {
        Self {
            url: url.into(),
            is_guessing_scheme: options.is_guessing_scheme,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call when the load failed. Returns the `http://` address to try
    /// instead, at most once and only if the scheme was guessed.
    pub fn retry_after_failure(&mut self) -> Option<String> {
        if !self.is_guessing_scheme {
            return None;
        }
        self.is_guessing_scheme = false;
        let retry = http_fallback(&self.url)?;
        log::debug!(target: "navbar", "retrying {} as {retry}", self.url);
        self.url = retry.clone();
        Some(retry)
    }
}
