pub type PageId = u64;
pub type RequestId = u64;

/// Keys observed during one UI frame that the navbar reacts to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserInput {
    pub enter_pressed: bool,
    pub escape_pressed: bool,
    pub up_pressed: bool,
    pub down_pressed: bool,
    /// Ctrl+P
    pub prev_pressed: bool,
    /// Ctrl+N
    pub next_pressed: bool,
    pub shift_held: bool,
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub command_held: bool,
}

impl BrowserInput {
    pub fn wants_up(&self) -> bool {
        self.up_pressed || self.prev_pressed
    }

    pub fn wants_down(&self) -> bool {
        self.down_pressed || self.next_pressed
    }
}
