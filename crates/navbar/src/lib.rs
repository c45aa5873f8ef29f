//! # navbar
//!
//! The browser navigation bar: back/forward/reload, the address field with
//! its autocomplete dropdown, in-page find, zoom and peer-to-peer site
//! controls.
//!
//! [`Navbar`] holds the per-page state and turns [`NavbarEvent`]s into calls
//! on a [`PageHandle`]. [`NavbarView`] and [`navbar_ui`] draw it with egui;
//! [`NavbarShell`] hosts several pages behind a tab strip and talks to the
//! history runtime over the bus.

mod events;
mod find;
mod location;
mod navbar;
mod page;
mod shell;
mod view;
mod widget;
mod zoom;

pub use events::{LocationKey, NavbarEvent, NavbarOutput};
pub use find::FindBar;
pub use location::{LocationField, PrettyLocation, ProtocolClass, pretty_location};
pub use navbar::Navbar;
pub use page::{
    DatView, FindOptions, LoadOptions, PageHandle, PendingLoad, ProtocolInfo, SiteInfo,
};
pub use shell::{NavbarShell, PageContent};
pub use view::{DatButtons, DropdownRow, NavbarView, ReloadButton, RowIcon, RowText};
pub use widget::{navbar_ui, read_browser_input};
pub use zoom::{ZoomAction, ZoomLevel};
