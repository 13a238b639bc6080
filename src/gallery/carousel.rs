// SPDX-License-Identifier: MPL-2.0
//! Image carousel cursor for a single project.
//!
//! The cursor always satisfies `current_index < len` when `len > 0`, and sits
//! at index 0 when the image list is empty.

/// Cursor over a project's image sequence. Navigation wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    current_index: usize,
    len: usize,
}

impl Carousel {
    /// Creates a cursor at the first image of a sequence of `len` images.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether arrows and indicators make sense (more than one image).
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    /// Advances to the next image, wrapping from last to first.
    pub fn next(&mut self) {
        if self.is_navigable() {
            self.current_index = (self.current_index + 1) % self.len;
        }
    }

    /// Steps back to the previous image, wrapping from first to last.
    pub fn previous(&mut self) {
        if self.is_navigable() {
            self.current_index = (self.current_index + self.len - 1) % self.len;
        }
    }

    /// Jumps directly to `index`. Returns `false` and leaves the cursor
    /// untouched when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    /// Adapts to a new sequence length, keeping the index when still valid.
    pub fn clamp_to(&mut self, len: usize) {
        self.len = len;
        if self.current_index >= len {
            self.current_index = 0;
        }
    }

    /// Active flag for each indicator dot; empty when there is nothing to navigate.
    #[must_use]
    pub fn indicators(&self) -> Vec<bool> {
        if !self.is_navigable() {
            return Vec::new();
        }
        (0..self.len).map(|i| i == self.current_index).collect()
    }
}
