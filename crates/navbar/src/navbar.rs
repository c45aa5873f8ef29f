//! Per-page navbar state and event handling.
//!
//! Invariants:
//! - Each `Navbar` owns exactly one `AutocompleteSession`; nothing is shared
//!   between pages.
//! - Every entry point takes the page explicitly; the navbar never looks a
//!   page up on its own.
//! - Committing a selection (enter or click), escape and blur all close the
//!   dropdown.

use crate::events::{LocationKey, NavbarEvent, NavbarOutput};
use crate::find::FindBar;
use crate::location::LocationField;
use crate::page::{LoadOptions, PageHandle};
use core_types::{PageId, RequestId};
use omnibox::{
    AutocompleteSession, Candidate, Direction, HistoryHit, InputChange, SearchProvider,
};

const DAT_URL_PREFIX: &str = "dat://";

pub struct Navbar {
    page_id: PageId,
    pub location: LocationField,
    pub find: FindBar,
    autocomplete: AutocompleteSession,
}

impl Navbar {
    pub fn new(page_id: PageId, provider: SearchProvider) -> Self {
        Self {
            page_id,
            location: LocationField::default(),
            find: FindBar::default(),
            autocomplete: AutocompleteSession::new(provider),
        }
    }

    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    pub fn autocomplete(&self) -> &AutocompleteSession {
        &self.autocomplete
    }

    // -- Host-driven actions ---
    pub fn focus_location(&mut self) {
        self.location.focus();
    }

    pub fn show_find(&mut self) {
        self.find.show();
    }

    pub fn hide_find(&mut self, page: &mut dyn PageHandle) {
        self.find.hide(page);
    }

    /// Mirrors the page's url into the address field unless the user is typing.
    pub fn update_location(&mut self, page: &dyn PageHandle) {
        self.location.sync_from_page(page.intended_url());
    }

    /// Closes the dropdown. Returns the lookup to cancel, if one was in flight.
    pub fn clear_autocomplete(&mut self) -> Option<RequestId> {
        let pending = self.autocomplete.pending_request();
        self.autocomplete.clear();
        pending
    }

    /// Feeds the history service's answer back in. Returns `false` for stale answers.
    pub fn on_history_results(
        &mut self,
        request_id: RequestId,
        results: Result<Vec<HistoryHit>, String>,
    ) -> bool {
        let results = results.map(|hits| hits.into_iter().map(Candidate::from).collect());
        self.autocomplete.apply_results(request_id, results)
    }

    // -- Event Handling ---
    pub fn handle(&mut self, page: &mut dyn PageHandle, event: NavbarEvent) -> NavbarOutput {
        let mut out = NavbarOutput::default();
        match event {
            NavbarEvent::Back => {
                if page.can_go_back() {
                    page.go_back();
                }
            }
            NavbarEvent::Forward => {
                if page.can_go_forward() {
                    page.go_forward();
                }
            }
            NavbarEvent::Reload => page.reload(),
            NavbarEvent::Cancel => page.stop(),
            NavbarEvent::ToggleBookmark => page.toggle_bookmark(),

            NavbarEvent::FocusLocation => self.location.focus(),
            NavbarEvent::BlurLocation => out.cancel_search = self.blur_location(),
            NavbarEvent::LocationInput(text) => self.on_location_input(text, &mut out),
            NavbarEvent::LocationKey(key) => self.on_location_key(page, key, &mut out),
            NavbarEvent::ClickResult { index } => {
                let selection = self.autocomplete.resolve(Some(index), &self.location.value);
                self.commit(page, selection, &mut out);
            }

            NavbarEvent::FindInput(text) => self.find.on_input(page, text),
            NavbarEvent::FindEnter { backwards } => self.find.on_enter(page, backwards),
            NavbarEvent::FindEscape => self.find.hide(page),

            NavbarEvent::Zoom(action) => {
                let level = action.apply(page.zoom());
                page.set_zoom(level);
            }

            NavbarEvent::ToggleLiveReload => {
                if page.site_info().is_some() {
                    page.toggle_live_reloading();
                }
            }
            NavbarEvent::OpenDatView { view, new_page } => {
                if !page.url().starts_with(DAT_URL_PREFIX) {
                    return out;
                }
                if let Some(url) = page.view_files_url(view) {
                    open(page, url, new_page, &mut out);
                }
            }
            NavbarEvent::ToggleSaveSite => {
                if let Some(saved) = page.site_info().map(|info| info.is_saved) {
                    page.set_site_saved(!saved);
                }
            }
            NavbarEvent::GotoDatVersion { new_page } => {
                if let Some(hostname) = page.protocol_info().map(|p| p.hostname.clone()) {
                    open(page, format!("{DAT_URL_PREFIX}{hostname}"), new_page, &mut out);
                }
            }
        }
        out
    }

    // -- Internal Helpers ---
    fn on_location_input(&mut self, text: String, out: &mut NavbarOutput) {
        let previous = self.autocomplete.pending_request();
        match self.autocomplete.on_input(&text) {
            InputChange::Search(request) => {
                out.search = Some(request);
                out.cancel_search = previous;
            }
            InputChange::Cleared => out.cancel_search = previous,
            InputChange::Unchanged => {}
        }
        self.location.value = text;
    }

    fn on_location_key(
        &mut self,
        page: &mut dyn PageHandle,
        key: LocationKey,
        out: &mut NavbarOutput,
    ) {
        match key {
            LocationKey::Enter => {
                let selection = self.autocomplete.resolve(None, &self.location.value);
                self.commit(page, selection, out);
            }
            LocationKey::Escape => {
                self.location.value = page.intended_url().to_string();
                out.cancel_search = self.blur_location();
            }
            LocationKey::Up | LocationKey::Down => {
                let direction = match key {
                    LocationKey::Up => Direction::Up,
                    _ => Direction::Down,
                };
                if let Some(url) = self.autocomplete.move_selection(direction) {
                    self.location.value = url;
                }
            }
        }
    }

    fn commit(&mut self, page: &mut dyn PageHandle, selection: Candidate, out: &mut NavbarOutput) {
        if selection.url.is_empty() {
            return;
        }
        log::debug!(target: "navbar", "page {}: navigate to {}", self.page_id, selection.url);
        page.load_url(
            &selection.url,
            LoadOptions {
                is_guessing_scheme: selection.is_guessing_scheme,
            },
        );
        out.cancel_search = self.blur_location();
    }

    fn blur_location(&mut self) -> Option<RequestId> {
        self.location.blur();
        self.clear_autocomplete()
    }
}

fn open(page: &mut dyn PageHandle, url: String, new_page: bool, out: &mut NavbarOutput) {
    if new_page {
        out.open_in_new_page = Some(url);
    } else {
        page.load_url(&url, LoadOptions::default());
    }
}
