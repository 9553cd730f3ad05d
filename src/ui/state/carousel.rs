// SPDX-License-Identifier: MPL-2.0
//! Wrap-around cursor over a project's image sequence.
//!
//! The cursor always satisfies `index < len` when `len > 0`, so indexing the
//! image list with it can never go out of range. With zero or one image every
//! movement is a no-op.

/// Carousel cursor: the index of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCursor {
    index: usize,
    len: usize,
}

impl ImageCursor {
    /// Creates a cursor at the first image of a sequence of `len` images.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Whether there is more than one image to move between.
    #[must_use]
    pub fn can_move(self) -> bool {
        self.len > 1
    }

    /// Advances to the next image, wrapping to the first one.
    pub fn next(&mut self) {
        if self.can_move() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Steps back to the previous image, wrapping to the last one.
    pub fn prev(&mut self) {
        if self.can_move() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`; out-of-range values are reduced modulo the length.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    /// Adapts the cursor to a new sequence length, keeping the position when
    /// it is still valid.
    pub fn reset_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_with_period_len() {
        for n in 2..6 {
            let mut cursor = ImageCursor::new(n);
            let mut seen = Vec::new();
            for _ in 0..n {
                seen.push(cursor.index());
                cursor.next();
            }
            assert_eq!(seen, (0..n).collect::<Vec<_>>());
            assert_eq!(cursor.index(), 0, "back at start after {n} steps");
        }
    }

    #[test]
    fn prev_is_inverse_of_next() {
        let mut cursor = ImageCursor::new(4);
        for start in 0..4 {
            cursor.select(start);
            cursor.next();
            cursor.prev();
            assert_eq!(cursor.index(), start);
            cursor.prev();
            cursor.next();
            assert_eq!(cursor.index(), start);
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut cursor = ImageCursor::new(3);
        cursor.prev();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn single_and_empty_sequences_never_move() {
        for n in 0..=1 {
            let mut cursor = ImageCursor::new(n);
            cursor.next();
            cursor.prev();
            cursor.next();
            assert_eq!(cursor.index(), 0);
            assert!(!cursor.can_move());
        }
    }

    #[test]
    fn select_sets_index_directly() {
        let mut cursor = ImageCursor::new(5);
        cursor.select(3);
        assert_eq!(cursor.index(), 3);
        cursor.select(7);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn select_on_empty_is_ignored() {
        let mut cursor = ImageCursor::new(0);
        cursor.select(4);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn reset_len_keeps_valid_position() {
        let mut cursor = ImageCursor::new(5);
        cursor.select(2);
        cursor.reset_len(3);
        assert_eq!(cursor.index(), 2);
        cursor.reset_len(2);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.len(), 2);
    }
}
