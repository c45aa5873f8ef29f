use std::sync::mpsc;

use egui::{CentralPanel, Context, Key, TopBottomPanel, Ui};

use app_api::{RepaintHandle, UiApp};
use bus::{CoreCommand, CoreEvent};
use core_types::PageId;
use omnibox::SearchProvider;

use crate::events::{NavbarEvent, NavbarOutput};
use crate::navbar::Navbar;
use crate::page::{LoadOptions, PageHandle};
use crate::view::NavbarView;
use crate::widget::{navbar_ui, read_browser_input};

/// A page the shell can host: navbar-facing handle plus its own content area.
pub trait PageContent: PageHandle {
    fn title(&self) -> &str {
        self.url()
    }
    fn ui_content(&mut self, ui: &mut Ui);
}

struct PageSlot<P> {
    page: P,
    navbar: Navbar,
}

pub struct NavbarShell<P: PageContent> {
    slots: Vec<PageSlot<P>>,
    active: usize,

    provider: SearchProvider,
    new_page: Box<dyn FnMut(PageId) -> P>,

    cmd_tx: Option<mpsc::Sender<CoreCommand>>,
    repaint: Option<RepaintHandle>,

    next_page_id: PageId,
}

impl<P: PageContent> NavbarShell<P> {
    pub fn new(provider: SearchProvider, new_page: impl FnMut(PageId) -> P + 'static) -> Self {
        let mut s = Self {
            slots: Vec::new(),
            active: 0,
            provider,
            new_page: Box::new(new_page),
            cmd_tx: None,
            repaint: None,
            next_page_id: 1,
        };
        s.add_page();
        s
    }

    fn alloc_page_id(&mut self) -> PageId {
        let id = self.next_page_id;
        self.next_page_id = self.next_page_id.wrapping_add(1);
        id
    }

    pub fn add_page(&mut self) -> PageId {
        let id = self.alloc_page_id();
        let page = (self.new_page)(id);
        let mut navbar = Navbar::new(id, self.provider.clone());
        navbar.update_location(&page);
        // a blank page starts with the cursor in the address field
        if page.url().is_empty() {
            navbar.focus_location();
        }
        self.slots.push(PageSlot { page, navbar });
        self.active = self.slots.len() - 1;
        id
    }

    pub fn close_active(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        let idx = self.active;
        let slot = &mut self.slots[idx];
        let page_id = slot.navbar.page_id();
        if let Some(request_id) = slot.navbar.clear_autocomplete() {
            self.send(CoreCommand::CancelHistorySearch {
                page_id,
                request_id,
            });
        }

        self.slots.remove(idx);
        if self.slots.is_empty() {
            // always keep one page around
            self.add_page();
        } else {
            self.active = self.active.saturating_sub(1);
        }
    }

    pub fn page_count(&self) -> usize {
        self.slots.len()
    }

    pub fn active_page(&self) -> Option<&P> {
        self.slots.get(self.active).map(|s| &s.page)
    }

    pub fn active_navbar(&self) -> Option<&Navbar> {
        self.slots.get(self.active).map(|s| &s.navbar)
    }

    pub fn set_active(&mut self, idx: usize) {
        if idx < self.slots.len() {
            self.active = idx;
        }
    }

    fn send(&self, cmd: CoreCommand) {
        if let Some(tx) = &self.cmd_tx {
            let _ = tx.send(cmd);
        }
    }

    /// Forwards what the navbar asked for to the history runtime or a new page.
    fn dispatch(&mut self, page_id: PageId, out: NavbarOutput) {
        if let Some(request_id) = out.cancel_search {
            self.send(CoreCommand::CancelHistorySearch {
                page_id,
                request_id,
            });
        }
        if let Some(request) = out.search {
            self.send(CoreCommand::HistorySearch {
                page_id,
                request_id: request.request_id,
                query: request.query,
            });
        }
        if let Some(url) = out.open_in_new_page {
            self.add_page();
            let slot = &mut self.slots[self.active];
            slot.page.load_url(&url, LoadOptions::default());
            slot.navbar.location.blur();
            slot.navbar.update_location(&slot.page);
        }
    }

    // --- UI helpers ---
    fn ui_tabstrip(&mut self, ui: &mut Ui) {
        let mut clicked = None;
        for (i, slot) in self.slots.iter().enumerate() {
            let title = match slot.page.title() {
                "" => "New Page",
                title => title,
            };
            if ui.selectable_label(i == self.active, title).clicked() {
                clicked = Some(i);
            }
        }
        if let Some(i) = clicked {
            self.active = i;
        }
        if ui.button("+").clicked() {
            self.add_page();
        }
        if ui.button("✖").clicked() {
            self.close_active();
        }
    }

    fn ui_navbar(&mut self, ui: &mut Ui) {
        let input = read_browser_input(ui.ctx());
        let Some(slot) = self.slots.get_mut(self.active) else {
            return;
        };
        slot.navbar.update_location(&slot.page);
        let view = NavbarView::build(Some(&slot.page), true, &slot.navbar);
        let events = navbar_ui(
            ui,
            &view,
            &mut slot.navbar.location,
            &mut slot.navbar.find,
            input,
        );

        let idx = self.active;
        self.handle_events(idx, events);
    }

    /// Applies a frame's events to the page they were raised on, even when an
    /// earlier one opened another page.
    fn handle_events(&mut self, idx: usize, events: Vec<NavbarEvent>) {
        for event in events {
            let Some(slot) = self.slots.get_mut(idx) else {
                return;
            };
            let page_id = slot.navbar.page_id();
            let out = slot.navbar.handle(&mut slot.page, event);
            self.dispatch(page_id, out);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        let (focus_location, show_find, new_page) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (
                cmd && i.key_pressed(Key::L),
                cmd && i.key_pressed(Key::F),
                cmd && i.key_pressed(Key::T),
            )
        });
        if new_page {
            self.add_page();
        }
        let Some(slot) = self.slots.get_mut(self.active) else {
            return;
        };
        if focus_location {
            slot.navbar.focus_location();
        }
        if show_find {
            slot.navbar.show_find();
        }
    }
}

impl<P: PageContent> UiApp for NavbarShell<P> {
    fn ui(&mut self, ctx: &Context) {
        self.handle_shortcuts(ctx);

        TopBottomPanel::top("Navbar Shell").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.ui_tabstrip(ui);
            });
            ui.separator();
            self.ui_navbar(ui);
        });

        CentralPanel::default().show(ctx, |ui| {
            if let Some(slot) = self.slots.get_mut(self.active) {
                slot.page.ui_content(ui);
            }
        });
    }

    fn set_bus_sender(&mut self, tx: mpsc::Sender<CoreCommand>) {
        self.cmd_tx = Some(tx);
    }

    fn on_core_event(&mut self, evt: CoreEvent) {
        let page_id = evt.page_id();
        let Some(slot) = self.slots.iter_mut().find(|s| s.navbar.page_id() == page_id) else {
            log::trace!(target: "navbar", "dropping event for closed page {page_id}");
            return;
        };
        let applied = match evt {
            CoreEvent::HistoryResults {
                request_id, hits, ..
            } => slot.navbar.on_history_results(request_id, Ok(hits)),
            CoreEvent::HistoryError {
                request_id, error, ..
            } => slot.navbar.on_history_results(request_id, Err(error)),
        };
        if applied {
            if let Some(repaint) = &self.repaint {
                repaint();
            }
        }
    }

    fn set_repaint_handle(&mut self, h: RepaintHandle) {
        self.repaint = Some(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{FindOptions, ProtocolInfo};
    use crate::zoom::ZoomLevel;
    use omnibox::HistoryHit;

    #[derive(Default)]
    struct BlankPage {
        id: PageId,
        url: String,
        protocol: Option<ProtocolInfo>,
    }

    impl PageHandle for BlankPage {
        fn id(&self) -> PageId {
            self.id
        }
        fn is_loading(&self) -> bool {
            false
        }
        fn url(&self) -> &str {
            &self.url
        }
        fn intended_url(&self) -> &str {
            &self.url
        }
        fn can_go_back(&self) -> bool {
            false
        }
        fn can_go_forward(&self) -> bool {
            false
        }
        fn go_back(&mut self) {}
        fn go_forward(&mut self) {}
        fn reload(&mut self) {}
        fn stop(&mut self) {}
        fn load_url(&mut self, url: &str, _options: LoadOptions) {
            self.url = url.to_string();
        }
        fn is_bookmarked(&self) -> bool {
            false
        }
        fn toggle_bookmark(&mut self) {}
        fn zoom(&self) -> ZoomLevel {
            ZoomLevel::DEFAULT
        }
        fn set_zoom(&mut self, _level: ZoomLevel) {}
        fn find_in_page(&mut self, _text: &str, _options: FindOptions) {}
        fn stop_find_in_page(&mut self) {}
        fn protocol_info(&self) -> Option<&ProtocolInfo> {
            self.protocol.as_ref()
        }
    }

    impl PageContent for BlankPage {
        fn ui_content(&mut self, _ui: &mut Ui) {}
    }

    fn shell() -> (NavbarShell<BlankPage>, mpsc::Receiver<CoreCommand>) {
        let mut shell = NavbarShell::new(SearchProvider::default(), |id| BlankPage {
            id,
            ..BlankPage::default()
        });
        let (tx, rx) = mpsc::channel();
        shell.set_bus_sender(tx);
        (shell, rx)
    }

    fn type_into_active(shell: &mut NavbarShell<BlankPage>, text: &str) {
        let slot = &mut shell.slots[shell.active];
        let page_id = slot.navbar.page_id();
        let out = slot
            .navbar
            .handle(&mut slot.page, NavbarEvent::LocationInput(text.into()));
        shell.dispatch(page_id, out);
    }

    #[test]
    fn typing_sends_history_searches() {
        let (mut shell, rx) = shell();
        type_into_active(&mut shell, "ex");
        type_into_active(&mut shell, "exa");

        let cmds: Vec<_> = rx.try_iter().collect();
        assert!(matches!(
            cmds.as_slice(),
            [
                CoreCommand::HistorySearch { page_id: 1, request_id: 1, .. },
                CoreCommand::CancelHistorySearch { page_id: 1, request_id: 1 },
                CoreCommand::HistorySearch { page_id: 1, request_id: 2, query },
            ] if query == "exa"
        ));
    }

    #[test]
    fn events_are_routed_by_page() {
        let (mut shell, _rx) = shell();
        type_into_active(&mut shell, "example.com");
        shell.add_page();
        assert_eq!(shell.page_count(), 2);

        shell.on_core_event(CoreEvent::HistoryResults {
            page_id: 1,
            request_id: 1,
            hits: vec![HistoryHit {
                url: "https://example.com/".into(),
                title: "Example".into(),
                offsets: None,
            }],
        });

        assert!(shell.slots[0].navbar.autocomplete().is_open());
        assert!(!shell.slots[1].navbar.autocomplete().is_open());
    }

    #[test]
    fn closing_a_page_cancels_its_lookup() {
        let (mut shell, rx) = shell();
        type_into_active(&mut shell, "rust");
        shell.close_active();

        let last = rx.try_iter().last();
        assert!(matches!(
            last,
            Some(CoreCommand::CancelHistorySearch { page_id: 1, request_id: 1 })
        ));
        // a fresh page replaces the last one
        assert_eq!(shell.page_count(), 1);
        assert_eq!(shell.active_navbar().map(Navbar::page_id), Some(2));
    }

    #[test]
    fn new_page_requests_open_a_page() {
        let (mut shell, _rx) = shell();
        shell.dispatch(
            1,
            NavbarOutput {
                open_in_new_page: Some("dat://site.test".into()),
                ..NavbarOutput::default()
            },
        );
        assert_eq!(shell.page_count(), 2);
        assert_eq!(shell.active_page().map(|p| p.url()), Some("dat://site.test"));
        assert_eq!(
            shell.active_navbar().map(|n| n.location.value.as_str()),
            Some("dat://site.test")
        );
    }

    #[test]
    fn events_after_opening_a_page_stay_with_their_page() {
        let (mut shell, rx) = shell();
        shell.slots[0].page.url = "https://site.test/".into();
        shell.slots[0].page.protocol = Some(ProtocolInfo {
            hostname: "site.test".into(),
        });

        shell.handle_events(
            0,
            vec![
                NavbarEvent::GotoDatVersion { new_page: true },
                NavbarEvent::LocationInput("rust".into()),
            ],
        );

        assert_eq!(shell.page_count(), 2);
        assert_eq!(shell.active_page().map(|p| p.url()), Some("dat://site.test"));
        assert_eq!(shell.slots[0].navbar.autocomplete().pending_request(), Some(1));
        assert_eq!(shell.slots[1].navbar.autocomplete().pending_request(), None);

        let cmds: Vec<_> = rx.try_iter().collect();
        assert!(matches!(
            cmds.as_slice(),
            [CoreCommand::HistorySearch { page_id: 1, request_id: 1, query }] if query == "rust"
        ));
    }
}
