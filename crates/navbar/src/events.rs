use crate::page::DatView;
use crate::zoom::ZoomAction;
use core_types::RequestId;
use omnibox::SearchRequest;

/// Keys the address field reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKey {
    Enter,
    Escape,
    Up,
    Down,
}

/// Everything a user can do to the navbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavbarEvent {
    Back,
    Forward,
    Reload,
    Cancel,
    ToggleBookmark,

    FocusLocation,
    BlurLocation,
    LocationInput(String),
    LocationKey(LocationKey),
    ClickResult { index: usize },

    FindInput(String),
    FindEnter { backwards: bool },
    FindEscape,

    Zoom(ZoomAction),

    // peer-to-peer site controls
    ToggleLiveReload,
    OpenDatView { view: DatView, new_page: bool },
    ToggleSaveSite,
    GotoDatVersion { new_page: bool },
}

/// Work the navbar hands back to its owner after an event.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavbarOutput {
    /// Run this history lookup and report back by request id.
    pub search: Option<SearchRequest>,
    /// A lookup whose answer is no longer wanted.
    pub cancel_search: Option<RequestId>,
    /// Open this url in a new page.
    pub open_in_new_page: Option<String>,
}
