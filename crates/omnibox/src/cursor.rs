/// Highlighted row of the dropdown.
///
/// The index always stays within `0..len`; moving past either end is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
    len: usize,
}

impl SelectionCursor {
    /// A cursor on the first row of a list with `len` rows.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the cursor moved.
    pub fn move_up(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the cursor moved.
    pub fn move_down(&mut self) -> bool {
        if self.index + 1 < self.len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Back to the first row, keeping the length.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
