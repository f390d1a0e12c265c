//! Hero slider and testimonial rotation state

/// Default autoplay interval for sliders (5 seconds)
pub const DEFAULT_AUTOPLAY_MS: u32 = 5000;

/// Index-based slider with wrap-around navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// Advance one slide, wrapping to the first
    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Go back one slide, wrapping to the last
    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jump to a slide; out of range indices are ignored
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }
}

/// Window of `page_size` items that rotates through a longer list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedWindow {
    len: usize,
    page_size: usize,
    start: usize,
}

impl PagedWindow {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size: page_size.max(1),
            start: 0,
        }
    }

    /// Rotation is only needed when there are more items than fit
    pub fn needs_rotation(&self) -> bool {
        self.len > self.page_size
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.page_size
    }

    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.start..(self.start + self.page_size).min(self.len)
    }

    pub fn advance(&mut self) {
        if self.needs_rotation() {
            self.start = (self.start + self.page_size) % self.len;
        }
    }
}
