//! Exclusive accordion state for FAQ lists

/// At most one item open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `index` (closing any other), or close it if it is already open.
    /// Returns whether `index` is open afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}
