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

use std::time::Duration;

/// Counters of a greedy traversal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreedyStatistics {
    /// Moves committed to, not counting the start cell.
    pub moves_made: u64,
    /// Candidate cells whose degree was computed.
    pub candidates_scored: u64,
    /// Steps where more than one candidate shared the minimum degree.
    pub ties: u64,
    pub time_total: Duration,
}

impl GreedyStatistics {
    #[inline]
    pub fn on_move(&mut self) {
        self.moves_made = self.moves_made.saturating_add(1);
    }

    #[inline]
    pub fn on_candidates_scored(&mut self, count: usize) {
        self.candidates_scored = self.candidates_scored.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_tie(&mut self) {
        self.ties = self.ties.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for GreedyStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Greedy Statistics:")?;
        writeln!(f, "  Moves made:           {}", self.moves_made)?;
        writeln!(f, "  Candidates scored:    {}", self.candidates_scored)?;
        writeln!(f, "  Ties:                 {}", self.ties)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

/// Counters of a frontier search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontierStatistics {
    /// Entries popped from the frontier.
    pub expansions: u64,
    /// Entries pushed onto the frontier, the root included.
    pub entries_pushed: u64,
    /// The largest frontier size observed.
    pub max_frontier_len: u64,
    /// The longest path popped, in cells.
    pub longest_path: u64,
    pub time_total: Duration,
}

impl FrontierStatistics {
    #[inline]
    pub fn on_expansion(&mut self) {
        self.expansions = self.expansions.saturating_add(1);
    }

    #[inline]
    pub fn on_push(&mut self, frontier_len: usize) {
        self.entries_pushed = self.entries_pushed.saturating_add(1);
        self.max_frontier_len = self.max_frontier_len.max(frontier_len as u64);
    }

    #[inline]
    pub fn on_path_length(&mut self, length: usize) {
        self.longest_path = self.longest_path.max(length as u64);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for FrontierStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Frontier Statistics:")?;
        writeln!(f, "  Expansions:           {}", self.expansions)?;
        writeln!(f, "  Entries pushed:       {}", self.entries_pushed)?;
        writeln!(f, "  Max frontier size:    {}", self.max_frontier_len)?;
        writeln!(f, "  Longest path:         {}", self.longest_path)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
