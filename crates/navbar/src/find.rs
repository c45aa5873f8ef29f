use crate::page::{FindOptions, PageHandle};

/// In-page find input shown next to the address field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindBar {
    pub visible: bool,
    pub value: String,
    /// Focus the input (and select its text) on the next frame.
    pub focus_requested: bool,
}

impl FindBar {
    pub fn show(&mut self) {
        self.visible = true;
        self.focus_requested = true;
    }

    pub fn hide(&mut self, page: &mut dyn PageHandle) {
        page.stop_find_in_page();
        self.visible = false;
        self.focus_requested = false;
        self.value.clear();
    }

    /// Searches as the user types; an empty value clears the highlight.
    pub fn on_input(&mut self, page: &mut dyn PageHandle, text: String) {
        self.value = text;
        if self.value.is_empty() {
            page.stop_find_in_page();
        } else {
            page.find_in_page(&self.value, FindOptions::default());
        }
    }

    /// Enter jumps to the next match, Shift+Enter to the previous one.
    pub fn on_enter(&mut self, page: &mut dyn PageHandle, backwards: bool) {
        if self.value.is_empty() {
            page.stop_find_in_page();
            return;
        }
        page.find_in_page(
            &self.value,
            FindOptions {
                find_next: true,
                forward: !backwards,
            },
        );
    }
}
