// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The pending-move stack of the backtracking engine.
//!
//! `entries` holds candidate moves for every open level of the search;
//! `frames[i]` is the index in `entries` where level `i` begins. Popping a
//! frame discards whatever candidates of that level were never tried.

use knight_model::position::Position;

#[derive(Clone, Debug, Default)]
pub struct SearchStack {
    entries: Vec<Position>,
    frames: Vec<usize>,
}

impl SearchStack {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Ensures the stack can hold a search on a board with `num_cells` cells
    /// without reallocating. Each level holds at most 8 candidates.
    #[inline]
    pub fn ensure_capacity(&mut self, num_cells: usize) {
        let entry_capacity = num_cells.saturating_mul(8);
        let frame_capacity = num_cells.saturating_add(1);

        if self.entries.capacity() < entry_capacity {
            self.entries.reserve(entry_capacity - self.entries.len());
        }
        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.len());
        }
    }

    /// Returns the number of open levels.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Opens a new level.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Closes the current level, discarding its untried candidates.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        self.entries.truncate(start);
        Some(())
    }

    /// Pushes candidates so that they pop in iteration order.
    #[inline]
    pub fn extend_ordered<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = Position>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.entries.extend(candidates.into_iter().rev());
    }

    /// Pops the next candidate (LIFO).
    #[inline]
    pub fn pop(&mut self) -> Option<Position> {
        self.entries.pop()
    }

    /// Returns `true` if the current level has no candidates left.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.frames.last() {
            Some(&start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Clears all entries and frames, keeping the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: usize, c: usize) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn test_empty_stack() {
        let mut s = SearchStack::new();
        assert_eq!(s.depth(), 0);
        assert!(s.is_current_level_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(s.to_string(), "SearchStack(entries: 0, frames: 0)");
    }

    #[test]
    fn test_extend_ordered_pops_in_iteration_order() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.extend_ordered(vec![p(0, 1), p(0, 2), p(0, 3)]);
        assert_eq!(s.pop(), Some(p(0, 1)));
        assert_eq!(s.pop(), Some(p(0, 2)));
        assert_eq!(s.pop(), Some(p(0, 3)));
        assert!(s.is_current_level_empty());
    }

    #[test]
    fn test_pop_frame_discards_untried_candidates() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.extend_ordered([p(1, 0), p(1, 1)]);
        s.push_frame();
        s.extend_ordered([p(2, 0), p(2, 1), p(2, 2)]);
        assert_eq!(s.depth(), 2);
        assert_eq!(s.to_string(), "SearchStack(entries: 5, frames: 2)");

        s.pop();
        s.pop_frame();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.pop(), Some(p(1, 0)));
        assert_eq!(s.pop(), Some(p(1, 1)));
        assert!(s.is_current_level_empty());
    }

    #[test]
    fn test_pop_frame_on_empty_is_none() {
        let mut s = SearchStack::new();
        assert_eq!(s.pop_frame(), None);
    }

    #[test]
    fn test_ensure_capacity_and_reset() {
        let mut s = SearchStack::new();
        s.ensure_capacity(25);
        s.push_frame();
        s.extend_ordered([p(0, 0)]);
        s.reset();
        assert_eq!(s.depth(), 0);
        assert_eq!(s.pop(), None);
    }
}
