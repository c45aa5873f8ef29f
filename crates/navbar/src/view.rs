//! What the navbar should draw this frame, computed from the page and the
//! navbar state. Kept free of egui so it can be tested directly.

use crate::location::{PrettyLocation, pretty_location};
use crate::navbar::Navbar;
use crate::page::PageHandle;
use omnibox::{Candidate, DecoratedText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadButton {
    Reload,
    /// The page is loading; the button stops it.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatButtons {
    None,
    Viewing { live_reloading: bool, saved: bool },
    /// The regular site also serves a peer-to-peer version.
    Alternative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowIcon {
    Search,
    Window,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowText {
    Plain(String),
    Decorated(DecoratedText),
}

impl RowText {
    fn from_parts(decorated: Option<&DecoratedText>, plain: &str) -> Self {
        match decorated {
            Some(text) => RowText::Decorated(text.clone()),
            None => RowText::Plain(plain.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownRow {
    pub index: usize,
    pub icon: RowIcon,
    pub content: RowText,
    pub title: RowText,
    pub selected: bool,
}

impl DropdownRow {
    fn new(index: usize, candidate: &Candidate, selected: bool) -> Self {
        let decoration = candidate.decoration();
        let (icon, content) = match &candidate.search {
            Some(query) => (RowIcon::Search, RowText::Plain(query.clone())),
            None => (
                RowIcon::Window,
                RowText::from_parts(decoration.map(|d| &d.url), &candidate.url),
            ),
        };
        let title = RowText::from_parts(decoration.map(|d| &d.title), &candidate.title);
        Self {
            index,
            icon,
            content,
            title,
            selected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavbarView {
    pub hidden: bool,
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub reload: ReloadButton,
    pub bookmarked: bool,
    /// Label of the zoom button, only while the page is zoomed.
    pub zoom_percent: Option<u32>,
    pub dat: DatButtons,
    /// Find input text, while the find bar is visible.
    pub find: Option<String>,
    pub location_editing: bool,
    pub pretty_location: PrettyLocation,
    pub dropdown: Option<Vec<DropdownRow>>,
}

impl NavbarView {
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            back_enabled: false,
            forward_enabled: false,
            reload: ReloadButton::Reload,
            bookmarked: false,
            zoom_percent: None,
            dat: DatButtons::None,
            find: None,
            location_editing: false,
            pretty_location: PrettyLocation::Raw(String::new()),
            dropdown: None,
        }
    }

    pub fn build(page: Option<&dyn PageHandle>, active: bool, navbar: &Navbar) -> Self {
        let Some(page) = page.filter(|_| active) else {
            return Self::hidden();
        };

        let zoom = page.zoom();
        let dat = if page.url().starts_with("dat:") {
            DatButtons::Viewing {
                live_reloading: page.is_live_reloading(),
                saved: page.site_info().is_some_and(|info| info.is_saved),
            }
        } else if page.site_has_dat_alternative() {
            DatButtons::Alternative
        } else {
            DatButtons::None
        };

        let autocomplete = navbar.autocomplete();
        let selected = autocomplete.selected_index();
        let dropdown = autocomplete.candidates().map(|list| {
            list.iter()
                .enumerate()
                .map(|(i, candidate)| DropdownRow::new(i, candidate, i == selected))
                .collect()
        });

        Self {
            hidden: false,
            back_enabled: page.can_go_back(),
            forward_enabled: page.can_go_forward(),
            reload: if page.is_loading() {
                ReloadButton::Cancel
            } else {
                ReloadButton::Reload
            },
            bookmarked: page.is_bookmarked(),
            zoom_percent: (!zoom.is_default()).then(|| zoom.percent()),
            dat,
            find: navbar.find.visible.then(|| navbar.find.value.clone()),
            location_editing: navbar.location.focused,
            pretty_location: pretty_location(&navbar.location.value),
            dropdown,
        }
    }
}
