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

//! Paths, visited sets and the search state coupling the two.

use crate::{
    board::Board,
    position::{Position, Step},
};
use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};

/// A set of visited cells with O(1) membership.
///
/// Backed by a bitset over the canonical cell index `row * N + col`.
/// Positions outside the board are never members.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VisitedSet {
    bits: FixedBitSet,
    size: usize,
    len: usize,
}

impl VisitedSet {
    /// Creates an empty visited set for `board`.
    #[inline]
    pub fn new(board: &Board) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(board.num_cells()),
            size: board.size(),
            len: 0,
        }
    }

    #[inline(always)]
    fn index(&self, position: Position) -> Option<usize> {
        if position.row() < self.size && position.col() < self.size {
            Some(position.row() * self.size + position.col())
        } else {
            None
        }
    }

    /// Marks `position` as visited.
    /// Returns `false` if it was already visited or lies off the board.
    #[inline]
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if self.bits.put(index) {
            return false;
        }
        self.len += 1;
        true
    }

    /// Unmarks `position`. Returns `false` if it was not visited.
    #[inline]
    pub fn remove(&mut self, position: Position) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if !self.bits.contains(index) {
            return false;
        }
        self.bits.set(index, false);
        self.len -= 1;
        true
    }

    /// Returns `true` if `position` has been visited.
    #[inline(always)]
    pub fn contains(&self, position: Position) -> bool {
        self.index(position)
            .is_some_and(|index| self.bits.contains(index))
    }

    /// Returns the number of visited cells.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no cell has been visited.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Unmarks every cell, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.bits.clear();
        self.len = 0;
    }
}

/// An ordered sequence of steps; index 0 is the start.
///
/// Step numbers always increase by exactly one per index, starting at 1.
/// A tour built here may still revisit cells or contain illegal jumps;
/// only the validator decides whether it is a knight's tour.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    steps: Vec<Step>,
}

impl Tour {
    /// Creates an empty tour.
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Creates an empty tour with room for `capacity` steps.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Creates a one-step tour at `start`.
    #[inline]
    pub fn starting_at(start: Position) -> Self {
        let mut tour = Self::with_capacity(1);
        tour.push(start);
        tour
    }

    /// Builds a tour from positions, numbering them `1..=len`.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let steps = positions
            .into_iter()
            .enumerate()
            .map(|(i, p)| Step::new(p, i + 1))
            .collect();
        Self { steps }
    }

    /// Appends `position` as the next step.
    #[inline]
    pub fn push(&mut self, position: Position) {
        let number = self.steps.len() + 1;
        self.steps.push(Step::new(position, number));
    }

    /// Removes and returns the last step.
    #[inline]
    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    /// Shortens the tour to its first `len` steps.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.steps.truncate(len);
    }

    /// Returns the position of the last step.
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.steps.last().map(Step::position)
    }

    /// Returns the position of the first step.
    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.steps.first().map(Step::position)
    }

    /// Returns the number of steps.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the tour has no steps.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the steps as a slice.
    #[inline(always)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns an iterator over the positions in order.
    #[inline]
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.steps.iter().map(Step::position)
    }

    /// Returns a renumbered copy of the first `len` steps.
    #[inline]
    pub fn prefix(&self, len: usize) -> Self {
        Self::from_positions(self.positions().take(len))
    }

    /// Consumes the tour and returns its steps.
    #[inline]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl FromIterator<Position> for Tour {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", step)?;
        }
        write!(f, "]")
    }
}

/// A path under construction together with its visited set.
///
/// `extend` and `retract` update both, so membership always equals the
/// set of cells on the path.
#[derive(Clone, Debug)]
pub struct TourState {
    tour: Tour,
    visited: VisitedSet,
}

impl TourState {
    /// Creates a state holding only `start`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is not on `board`.
    #[inline]
    pub fn new(board: &Board, start: Position) -> Self {
        debug_assert!(
            board.contains(start),
            "called `TourState::new` with start {} outside {}",
            start,
            board
        );
        let mut tour = Tour::with_capacity(board.num_cells());
        let mut visited = VisitedSet::new(board);
        tour.push(start);
        visited.insert(start);
        Self { tour, visited }
    }

    /// Moves to `position`. Returns `false`, leaving the state untouched, if
    /// the cell is already on the path or off the board.
    #[inline]
    pub fn extend(&mut self, position: Position) -> bool {
        if !self.visited.insert(position) {
            return false;
        }
        self.tour.push(position);
        true
    }

    /// Undoes the last move and returns the cell it left.
    #[inline]
    pub fn retract(&mut self) -> Option<Position> {
        let step = self.tour.pop()?;
        let removed = self.visited.remove(step.position());
        debug_assert!(
            removed,
            "called `TourState::retract` with a path cell missing from the visited set"
        );
        Some(step.position())
    }

    /// Returns the current (last) cell.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.tour.last()
    }

    /// Returns the number of cells on the path.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the path is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Returns `true` if every cell of `board` is on the path.
    #[inline(always)]
    pub fn is_complete(&self, board: &Board) -> bool {
        self.visited.len() == board.num_cells()
    }

    /// Returns the path.
    #[inline(always)]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Returns the visited set.
    #[inline(always)]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Consumes the state and returns the path.
    #[inline]
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
